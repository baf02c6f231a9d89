// Core engine exports
pub mod criteria;
pub mod engine;
pub mod ranking;
pub mod score;
pub mod similarity;

pub use criteria::match_against_criteria;
pub use engine::{ComparisonEngine, EngineError};
pub use ranking::{rank_manufacturers, DEFAULT_COUNT_CAP};
pub use score::{
    calculate_initial_profile_score, calculate_profile_completeness, calculate_profile_score,
};
pub use similarity::{
    compare_manufacturers, find_similar_manufacturers, DEFAULT_SIMILARITY_THRESHOLD,
};
