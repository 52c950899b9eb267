//! Collaborator traits the battle resolver depends on.
//!
//! The resolver never performs I/O itself. Randomness comes from a
//! [`RandomOracle`] and win/loss bookkeeping goes to a [`StatsRecorder`];
//! adapters for both live in the runtime crate.
mod rng;
mod stats;

pub use rng::{FixedRandomOracle, RandomError, RandomOracle};
pub use stats::{StatsError, StatsRecorder};
