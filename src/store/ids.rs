//! Id assignment for newly created records.

use rand::Rng;

/// Exclusive upper bound of ids drawn by [`RandomIds`].
pub const MAX_RANDOM_ID: u32 = 100_000_000;

/// Source of ids for newly created movies.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Draws a uniform integer in `[0, MAX_RANDOM_ID)` and formats it in decimal.
///
/// Draws are not checked against ids already in the collection, so two
/// records can end up sharing an id. Lookups then only ever see the older one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> String {
        rand::rng().random_range(0..MAX_RANDOM_ID).to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}
