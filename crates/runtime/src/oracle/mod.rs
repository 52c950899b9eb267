//! Random draw oracles.
//!
//! Implementations of [`meal_core::RandomOracle`]. Battles draw from
//! random.org by default; [`meal_core::FixedRandomOracle`] is re-exported for
//! scripted or offline sessions.
mod random_org;

pub use meal_core::FixedRandomOracle;
pub use random_org::{DEFAULT_TIMEOUT, RANDOM_ORG_URL, RandomOrgOracle, parse_fraction};
