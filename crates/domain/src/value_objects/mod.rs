//! Value objects - Immutable objects defined by their attributes

mod custom_build_draft;
mod difficulty;

pub use custom_build_draft::CustomBuildDraft;
pub use difficulty::{DifficultyBucket, MAX_DIFFICULTY_RATING, MIN_DIFFICULTY_RATING};
