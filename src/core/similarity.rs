use crate::core::engine::{check_weight, EngineError};
use crate::models::{ManufacturerProfile, SimilarManufacturer, SimilarityWeights};

/// Country-only location matches earn this fraction of the location
/// weight; a matching city raises it to the full weight.
const COUNTRY_TIER: f64 = 0.7;

/// Similarity threshold (0-100 scale) used when the caller does not
/// supply one.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 50.0;

/// Compute the weighted similarity of two manufacturer profiles, in
/// [0, 1].
///
/// Combines industry exact match, services overlap (Jaccard), MOQ
/// proximity, and location tier under the supplied weights. The result
/// is symmetric: `compare_manufacturers(a, b, w) == compare_manufacturers(b, a, w)`.
///
/// Weights are expected pre-normalized (see [`normalize_weights`]);
/// [`crate::core::ComparisonEngine`] normalizes once at construction.
pub fn compare_manufacturers(
    a: &ManufacturerProfile,
    b: &ManufacturerProfile,
    weights: &SimilarityWeights,
) -> f64 {
    let score = industry_score(a, b) * weights.industry
        + services_overlap(a, b) * weights.services
        + moq_proximity(a, b) * weights.moq
        + location_score(a, b) * weights.location;

    score.clamp(0.0, 1.0)
}

/// Find candidates similar to `source`, scored on the 0-100 scale and
/// kept when at or above `threshold`.
///
/// Results are sorted descending by similarity; candidates with equal
/// similarity keep their input order. An empty candidate list yields an
/// empty result.
pub fn find_similar_manufacturers(
    source: &ManufacturerProfile,
    candidates: &[ManufacturerProfile],
    threshold: f64,
    weights: &SimilarityWeights,
) -> Vec<SimilarManufacturer> {
    let mut similar: Vec<SimilarManufacturer> = candidates
        .iter()
        .filter_map(|candidate| {
            let similarity = compare_manufacturers(source, candidate, weights) * 100.0;

            if similarity >= threshold {
                Some(SimilarManufacturer {
                    manufacturer_id: candidate.manufacturer_id.clone(),
                    similarity,
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable, so equal scores keep candidate order
    similar.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    similar
}

/// Validate similarity weights and scale them to sum 1.0.
///
/// Rejects non-finite or negative components and an all-zero set.
pub fn normalize_weights(weights: &SimilarityWeights) -> Result<SimilarityWeights, EngineError> {
    check_weight("industry", weights.industry)?;
    check_weight("services", weights.services)?;
    check_weight("moq", weights.moq)?;
    check_weight("location", weights.location)?;

    let sum = weights.sum();
    if sum <= f64::EPSILON {
        return Err(EngineError::ZeroWeightSum);
    }

    Ok(SimilarityWeights {
        industry: weights.industry / sum,
        services: weights.services / sum,
        moq: weights.moq / sum,
        location: weights.location / sum,
    })
}

/// Industry sub-score: exact match after trimming, case-insensitive
#[inline]
fn industry_score(a: &ManufacturerProfile, b: &ManufacturerProfile) -> f64 {
    match (a.industry.as_deref(), b.industry.as_deref()) {
        (Some(left), Some(right)) if left.trim().eq_ignore_ascii_case(right.trim()) => 1.0,
        _ => 0.0,
    }
}

/// Services sub-score: Jaccard overlap of the normalized service sets.
/// An empty union is defined as 0 similarity.
#[inline]
fn services_overlap(a: &ManufacturerProfile, b: &ManufacturerProfile) -> f64 {
    let left = a.normalized_services();
    let right = b.normalized_services();

    let intersection = left.intersection(&right).count();
    let union = left.len() + right.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// MOQ sub-score: relative proximity, 1 - |a-b| / max(a, b).
/// Equal quantities score 1; a missing side scores 0.
#[inline]
fn moq_proximity(a: &ManufacturerProfile, b: &ManufacturerProfile) -> f64 {
    match (a.moq, b.moq) {
        (Some(left), Some(right)) => {
            if left == right {
                return 1.0;
            }
            let max = left.max(right) as f64;
            1.0 - left.abs_diff(right) as f64 / max
        }
        _ => 0.0,
    }
}

/// Location sub-score: matching country is the coarse tier, matching
/// city on top of it the fine tier.
#[inline]
fn location_score(a: &ManufacturerProfile, b: &ManufacturerProfile) -> f64 {
    let country_matches = match (
        a.headquarters.country.as_deref(),
        b.headquarters.country.as_deref(),
    ) {
        (Some(left), Some(right)) => left.trim().eq_ignore_ascii_case(right.trim()),
        _ => false,
    };

    if !country_matches {
        return 0.0;
    }

    let city_matches = match (a.headquarters.city.as_deref(), b.headquarters.city.as_deref()) {
        (Some(left), Some(right)) => left.trim().eq_ignore_ascii_case(right.trim()),
        _ => false,
    };

    if city_matches {
        1.0
    } else {
        COUNTRY_TIER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Headquarters;

    fn create_profile(
        id: &str,
        industry: &str,
        services: &[&str],
        moq: u64,
        country: &str,
    ) -> ManufacturerProfile {
        ManufacturerProfile {
            manufacturer_id: id.to_string(),
            name: Some(format!("Manufacturer {}", id)),
            description: None,
            industry: Some(industry.to_string()),
            contact_email: None,
            services_offered: services.iter().map(|s| s.to_string()).collect(),
            moq: Some(moq),
            headquarters: Headquarters {
                country: Some(country.to_string()),
                city: None,
                address: None,
            },
            certifications: vec![],
            is_email_verified: None,
            profile_completeness: None,
            created_at: None,
        }
    }

    #[test]
    fn test_identical_profiles_with_city_score_one() {
        let mut a = create_profile("1", "electronics", &["smt assembly", "testing"], 100, "US");
        a.headquarters.city = Some("Austin".to_string());
        let mut b = a.clone();
        b.manufacturer_id = "2".to_string();

        let weights = SimilarityWeights::default();
        let similarity = compare_manufacturers(&a, &b, &weights);

        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = create_profile("1", "electronics", &["assembly", "testing"], 100, "US");
        let b = create_profile("2", "textiles", &["assembly", "dyeing"], 400, "DE");

        let weights = SimilarityWeights::default();

        assert_eq!(
            compare_manufacturers(&a, &b, &weights),
            compare_manufacturers(&b, &a, &weights)
        );
    }

    #[test]
    fn test_disjoint_services_score_below_overlapping() {
        let source = create_profile("src", "electronics", &["assembly", "testing"], 100, "US");
        let disjoint = create_profile("d", "electronics", &["molding", "painting"], 100, "US");
        let overlapping = create_profile("o", "electronics", &["assembly", "painting"], 100, "US");

        let weights = SimilarityWeights::default();
        let disjoint_score = compare_manufacturers(&source, &disjoint, &weights);
        let overlapping_score = compare_manufacturers(&source, &overlapping, &weights);

        // Full industry, moq, and location credit either way
        assert!(disjoint_score > 0.0);
        assert!(overlapping_score > disjoint_score);
    }

    #[test]
    fn test_missing_services_mean_zero_overlap() {
        let a = create_profile("1", "electronics", &[], 100, "US");
        let b = create_profile("2", "electronics", &[], 100, "US");

        let weights = SimilarityWeights::default();
        let similarity = compare_manufacturers(&a, &b, &weights);

        // Industry + moq + country-tier location credit only
        let expected = weights.industry + weights.moq + weights.location * COUNTRY_TIER;
        assert!((similarity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_moq_proximity_decreases_with_distance() {
        let source = create_profile("src", "electronics", &["assembly"], 100, "US");
        let near = create_profile("n", "electronics", &["assembly"], 120, "US");
        let far = create_profile("f", "electronics", &["assembly"], 1000, "US");

        let weights = SimilarityWeights::default();

        assert!(
            compare_manufacturers(&source, &near, &weights)
                > compare_manufacturers(&source, &far, &weights)
        );
    }

    #[test]
    fn test_city_match_is_a_finer_tier() {
        let mut source = create_profile("src", "electronics", &["assembly"], 100, "US");
        source.headquarters.city = Some("Austin".to_string());

        let mut same_city = create_profile("c", "electronics", &["assembly"], 100, "US");
        same_city.headquarters.city = Some("Austin".to_string());

        let mut other_city = create_profile("o", "electronics", &["assembly"], 100, "US");
        other_city.headquarters.city = Some("Denver".to_string());

        let weights = SimilarityWeights::default();

        assert!(
            compare_manufacturers(&source, &same_city, &weights)
                > compare_manufacturers(&source, &other_city, &weights)
        );
    }

    #[test]
    fn test_find_similar_empty_candidates() {
        let source = create_profile("src", "electronics", &["assembly"], 100, "US");
        let weights = SimilarityWeights::default();

        let similar =
            find_similar_manufacturers(&source, &[], DEFAULT_SIMILARITY_THRESHOLD, &weights);

        assert!(similar.is_empty());
    }

    #[test]
    fn test_find_similar_sorted_and_thresholded() {
        let source = create_profile("src", "electronics", &["assembly", "testing"], 100, "US");
        let candidates = vec![
            create_profile("far", "textiles", &["weaving"], 9000, "VN"),
            create_profile("close", "electronics", &["assembly", "testing"], 100, "US"),
            create_profile("mid", "electronics", &["assembly"], 150, "US"),
        ];

        let weights = SimilarityWeights::default();
        let similar = find_similar_manufacturers(
            &source,
            &candidates,
            DEFAULT_SIMILARITY_THRESHOLD,
            &weights,
        );

        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].manufacturer_id, "close");
        assert_eq!(similar[1].manufacturer_id, "mid");
        for hit in &similar {
            assert!(hit.similarity >= DEFAULT_SIMILARITY_THRESHOLD);
        }
    }

    #[test]
    fn test_find_similar_ties_keep_input_order() {
        let source = create_profile("src", "electronics", &["assembly"], 100, "US");
        let candidates = vec![
            create_profile("first", "electronics", &["assembly"], 100, "US"),
            create_profile("second", "electronics", &["assembly"], 100, "US"),
        ];

        let weights = SimilarityWeights::default();
        let similar = find_similar_manufacturers(&source, &candidates, 50.0, &weights);

        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].manufacturer_id, "first");
        assert_eq!(similar[1].manufacturer_id, "second");
    }

    #[test]
    fn test_normalize_weights_scales_to_one() {
        let weights = SimilarityWeights {
            industry: 3.0,
            services: 3.5,
            moq: 1.5,
            location: 2.0,
        };

        let normalized = normalize_weights(&weights).unwrap();

        assert!((normalized.sum() - 1.0).abs() < 1e-9);
        assert!((normalized.services - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_weights_rejects_negative() {
        let weights = SimilarityWeights {
            industry: -0.1,
            ..SimilarityWeights::default()
        };

        assert!(matches!(
            normalize_weights(&weights),
            Err(EngineError::InvalidWeight { name: "industry", .. })
        ));
    }

    #[test]
    fn test_normalize_weights_rejects_all_zero() {
        let weights = SimilarityWeights {
            industry: 0.0,
            services: 0.0,
            moq: 0.0,
            location: 0.0,
        };

        assert!(matches!(
            normalize_weights(&weights),
            Err(EngineError::ZeroWeightSum)
        ));
    }
}
