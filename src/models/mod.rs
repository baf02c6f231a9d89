// Model exports
pub mod domain;

pub use domain::{
    CriteriaMatch, Headquarters, IndustryFilter, ManufacturerProfile, MatchCriteria, MoqRange,
    RankCandidate, RankedManufacturer, RankingWeights, SimilarManufacturer, SimilarityWeights,
};
