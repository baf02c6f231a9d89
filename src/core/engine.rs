use crate::core::ranking::{self, rank_manufacturers, DEFAULT_COUNT_CAP};
use crate::core::similarity::{
    self, compare_manufacturers, find_similar_manufacturers, DEFAULT_SIMILARITY_THRESHOLD,
};
use crate::core::criteria::match_against_criteria;
use crate::models::{
    CriteriaMatch, ManufacturerProfile, MatchCriteria, RankCandidate, RankedManufacturer,
    RankingWeights, SimilarManufacturer, SimilarityWeights,
};
use thiserror::Error;

/// Input-shape errors raised by the engine
///
/// Scoring and comparison are total over partial profiles; only
/// malformed weights, caps, thresholds, and supplied match scores are
/// rejected, so bad configuration fails loudly instead of producing NaN
/// scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("weight `{name}` must be a finite, non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("weights must not all be zero")]
    ZeroWeightSum,

    #[error("count normalization cap must be a finite, positive number, got {0}")]
    InvalidCountCap(f64),

    #[error("similarity threshold must be a finite number in 0..=100, got {0}")]
    InvalidThreshold(f64),

    #[error("match score for manufacturer `{manufacturer_id}` must be a finite number in 0..=1, got {value}")]
    InvalidMatchScore {
        manufacturer_id: String,
        value: f64,
    },
}

#[inline]
pub(crate) fn check_weight(name: &'static str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidWeight { name, value });
    }
    Ok(())
}

/// Comparison engine: scoring, similarity search, criteria matching,
/// and ranking over caller-fetched manufacturer snapshots.
///
/// Weights are validated and normalized once at construction, so every
/// call site works with a known-good configuration. All methods are
/// pure and safe to call concurrently.
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    similarity_weights: SimilarityWeights,
    ranking_weights: RankingWeights,
    count_cap: f64,
    default_threshold: f64,
}

impl ComparisonEngine {
    pub fn new(
        similarity_weights: SimilarityWeights,
        ranking_weights: RankingWeights,
        count_cap: f64,
        default_threshold: f64,
    ) -> Result<Self, EngineError> {
        let similarity_weights = similarity::normalize_weights(&similarity_weights)?;
        let ranking_weights = ranking::normalize_weights(&ranking_weights)?;

        if !count_cap.is_finite() || count_cap <= 0.0 {
            return Err(EngineError::InvalidCountCap(count_cap));
        }
        check_threshold(default_threshold)?;

        Ok(Self {
            similarity_weights,
            ranking_weights,
            count_cap,
            default_threshold,
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            similarity_weights: SimilarityWeights::default(),
            ranking_weights: RankingWeights::default(),
            count_cap: DEFAULT_COUNT_CAP,
            default_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Build an engine from loaded [`Settings`](crate::config::Settings)
    pub fn from_settings(settings: &crate::config::Settings) -> Result<Self, EngineError> {
        let scoring = &settings.scoring;

        Self::new(
            SimilarityWeights {
                industry: scoring.similarity.industry,
                services: scoring.similarity.services,
                moq: scoring.similarity.moq,
                location: scoring.similarity.location,
            },
            RankingWeights {
                profile_score: scoring.ranking.profile_score,
                match_score: scoring.ranking.match_score,
                certification_count: scoring.ranking.certification_count,
                services_count: scoring.ranking.services_count,
            },
            scoring.count_cap,
            scoring.similarity_threshold,
        )
    }

    /// Pairwise similarity in [0, 1]
    pub fn compare(&self, a: &ManufacturerProfile, b: &ManufacturerProfile) -> f64 {
        compare_manufacturers(a, b, &self.similarity_weights)
    }

    /// Similarity search over `candidates`, scored on the 0-100 scale.
    ///
    /// `threshold` falls back to the configured default when absent and
    /// must be finite and within 0..=100 when supplied.
    pub fn find_similar(
        &self,
        source: &ManufacturerProfile,
        candidates: &[ManufacturerProfile],
        threshold: Option<f64>,
    ) -> Result<Vec<SimilarManufacturer>, EngineError> {
        let threshold = match threshold {
            Some(value) => {
                check_threshold(value)?;
                value
            }
            None => self.default_threshold,
        };

        let similar =
            find_similar_manufacturers(source, candidates, threshold, &self.similarity_weights);

        tracing::debug!(
            "Similarity search for {}: {} of {} candidates at or above threshold {}",
            source.manufacturer_id,
            similar.len(),
            candidates.len(),
            threshold
        );

        Ok(similar)
    }

    /// Match one manufacturer against a criteria set
    pub fn match_criteria(
        &self,
        profile: &ManufacturerProfile,
        criteria: &MatchCriteria,
    ) -> CriteriaMatch {
        match_against_criteria(profile, criteria)
    }

    /// Rank candidates by composite score, best first
    pub fn rank(
        &self,
        candidates: &[RankCandidate],
    ) -> Result<Vec<RankedManufacturer>, EngineError> {
        let ranked = rank_manufacturers(candidates, &self.ranking_weights, self.count_cap)?;

        tracing::debug!("Ranked {} manufacturers", ranked.len());

        Ok(ranked)
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn check_threshold(value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(EngineError::InvalidThreshold(value));
    }
    Ok(())
}
