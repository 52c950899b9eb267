//! Battle scoring.
//!
//! Pure functions only: a meal's score depends on nothing but its own
//! attributes, and the score gap is normalized before it is compared with a
//! random draw.
//!
//! # Core Functions
//!
//! - `battle_score`: price × cuisine length − difficulty penalty
//! - `difficulty_penalty`: HIGH=1, MED=2, LOW=3
//! - `score_delta`: normalized absolute gap between two scores

mod score;

pub use score::{DELTA_NORMALIZER, battle_score, difficulty_penalty, score_delta};
