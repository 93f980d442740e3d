//! Server configuration.
//!
//! The service has no configuration surface of its own: the listen address
//! is fixed. Log verbosity follows `RUST_LOG` (see the binary).

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
