use crate::models::{CriteriaMatch, IndustryFilter, ManufacturerProfile, MatchCriteria, MoqRange};

/// Match a manufacturer against a buyer's criteria set.
///
/// `matches` is true only when every specified criterion passes. `score`
/// is the fraction of specified criteria that passed, so partial credit
/// stays visible on a failed match; an empty criteria set is vacuously
/// satisfied with a score of 1. `matched_criteria` lists the passing
/// criterion names in the order they are declared on [`MatchCriteria`].
pub fn match_against_criteria(
    profile: &ManufacturerProfile,
    criteria: &MatchCriteria,
) -> CriteriaMatch {
    let mut specified = 0usize;
    let mut matched_criteria = Vec::new();

    if let Some(filter) = &criteria.industry {
        specified += 1;
        if industry_passes(profile, filter) {
            matched_criteria.push("industry".to_string());
        }
    }

    if let Some(required) = &criteria.services {
        specified += 1;
        if services_pass(profile, required) {
            matched_criteria.push("services".to_string());
        }
    }

    if let Some(range) = &criteria.moq_range {
        specified += 1;
        if moq_passes(profile, range) {
            matched_criteria.push("moqRange".to_string());
        }
    }

    let score = if specified == 0 {
        1.0
    } else {
        matched_criteria.len() as f64 / specified as f64
    };

    CriteriaMatch {
        matches: matched_criteria.len() == specified,
        score,
        matched_criteria,
    }
}

/// Exact or any-of industry check, trimmed and case-insensitive.
/// An empty any-of list cannot be satisfied.
fn industry_passes(profile: &ManufacturerProfile, filter: &IndustryFilter) -> bool {
    let Some(industry) = profile.industry.as_deref() else {
        return false;
    };
    let industry = industry.trim();

    match filter {
        IndustryFilter::One(required) => industry.eq_ignore_ascii_case(required.trim()),
        IndustryFilter::AnyOf(options) => options
            .iter()
            .any(|option| industry.eq_ignore_ascii_case(option.trim())),
    }
}

/// Subset check: every required service must appear in servicesOffered.
/// An empty required list is vacuously satisfied.
fn services_pass(profile: &ManufacturerProfile, required: &[String]) -> bool {
    let offered = profile.normalized_services();

    required
        .iter()
        .all(|service| offered.contains(&service.trim().to_ascii_lowercase()))
}

/// Inclusive bounds check. A range with min > max is unsatisfiable and
/// fails rather than erroring; a profile without a positive MOQ fails.
fn moq_passes(profile: &ManufacturerProfile, range: &MoqRange) -> bool {
    if range.min > range.max {
        return false;
    }

    profile
        .moq
        .map_or(false, |moq| moq >= range.min && moq <= range.max)
}
