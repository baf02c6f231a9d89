use crate::core::engine::{check_weight, EngineError};
use crate::core::score::calculate_profile_score;
use crate::models::{RankCandidate, RankedManufacturer, RankingWeights};

/// Certification and service counts are normalized against this cap
/// when no configured cap is supplied.
pub const DEFAULT_COUNT_CAP: f64 = 10.0;

/// Rank manufacturers by composite score, best first.
///
/// The composite per candidate is a weighted sum of the normalized
/// profile score, the externally supplied match score (0 when absent),
/// and the certification and service counts normalized against
/// `count_cap` and capped at 1.0. Caller weights are validated and
/// scaled to sum 1.0 before use.
///
/// The sort is stable, so candidates with equal composite scores keep
/// their input order and ranks are always the consecutive positions
/// 1..=n. An empty candidate list is not an error.
pub fn rank_manufacturers(
    candidates: &[RankCandidate],
    weights: &RankingWeights,
    count_cap: f64,
) -> Result<Vec<RankedManufacturer>, EngineError> {
    let weights = normalize_weights(weights)?;

    if !count_cap.is_finite() || count_cap <= 0.0 {
        return Err(EngineError::InvalidCountCap(count_cap));
    }

    let mut scored: Vec<RankedManufacturer> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let match_score = match candidate.match_score {
            Some(value) if !value.is_finite() || !(0.0..=1.0).contains(&value) => {
                return Err(EngineError::InvalidMatchScore {
                    manufacturer_id: candidate.profile.manufacturer_id.clone(),
                    value,
                });
            }
            Some(value) => value,
            None => 0.0,
        };

        let profile_score = calculate_profile_score(&candidate.profile) as f64 / 100.0;
        let certification_count =
            (candidate.profile.certifications.len() as f64 / count_cap).min(1.0);
        let services_count =
            (candidate.profile.services_offered.len() as f64 / count_cap).min(1.0);

        let composite = profile_score * weights.profile_score
            + match_score * weights.match_score
            + certification_count * weights.certification_count
            + services_count * weights.services_count;

        scored.push(RankedManufacturer {
            manufacturer_id: candidate.profile.manufacturer_id.clone(),
            rank: 0,
            score: composite,
        });
    }

    // Stable descending sort keeps input order among equal scores
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (position, entry) in scored.iter_mut().enumerate() {
        entry.rank = position + 1;
    }

    Ok(scored)
}

/// Validate ranking weights and scale them to sum 1.0.
///
/// Rejects non-finite or negative components and an all-zero set.
pub fn normalize_weights(weights: &RankingWeights) -> Result<RankingWeights, EngineError> {
    check_weight("profile_score", weights.profile_score)?;
    check_weight("match_score", weights.match_score)?;
    check_weight("certification_count", weights.certification_count)?;
    check_weight("services_count", weights.services_count)?;

    let sum = weights.sum();
    if sum <= f64::EPSILON {
        return Err(EngineError::ZeroWeightSum);
    }

    Ok(RankingWeights {
        profile_score: weights.profile_score / sum,
        match_score: weights.match_score / sum,
        certification_count: weights.certification_count / sum,
        services_count: weights.services_count / sum,
    })
}
