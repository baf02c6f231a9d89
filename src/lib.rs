//! Fabrica Match - Manufacturer scoring and comparison engine for the
//! Fabrica B2B marketplace
//!
//! This library implements the scoring, similarity, criteria-matching,
//! and ranking rules used by the marketplace's discovery features. It
//! operates on manufacturer documents already fetched by the calling
//! service layer: every operation is a synchronous pure function over
//! an in-memory snapshot, with no I/O and no shared mutable state.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use self::core::{
    calculate_initial_profile_score, calculate_profile_completeness, calculate_profile_score,
    compare_manufacturers, find_similar_manufacturers, match_against_criteria, rank_manufacturers,
    ComparisonEngine, EngineError,
};
pub use models::{
    CriteriaMatch, ManufacturerProfile, MatchCriteria, RankCandidate, RankedManufacturer,
    RankingWeights, SimilarManufacturer, SimilarityWeights,
};
