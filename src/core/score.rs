use crate::models::ManufacturerProfile;

/// Point allocations for profile fields. The raw sums intentionally
/// exceed the maximum score; totals clamp after summing so different
/// field subsets can reach a full score.
const NAME_POINTS: u32 = 10;
const DESCRIPTION_POINTS: u32 = 25;
const INDUSTRY_POINTS: u32 = 20;
const CONTACT_EMAIL_POINTS: u32 = 15;
const SERVICES_POINTS: u32 = 30;
const MOQ_POINTS: u32 = 20;
const COUNTRY_POINTS: u32 = 20;

/// Certifications earn points per entry up to a cap.
const CERTIFICATION_POINTS_EACH: u32 = 5;
const CERTIFICATION_POINTS_CAP: u32 = 25;
const EMAIL_VERIFIED_POINTS: u32 = 15;

/// Descriptions longer than this earn a long-form bonus on top of the
/// base description credit.
const LONG_DESCRIPTION_THRESHOLD: usize = 50;
const LONG_DESCRIPTION_POINTS: u32 = 10;

const MAX_SCORE: u32 = 100;

/// Calculate the profile score (0-100) for a fresh registration, before
/// the record is persisted.
///
/// Only fields available at registration time contribute; verification
/// and certification signals are scored by [`calculate_profile_score`].
pub fn calculate_initial_profile_score(profile: &ManufacturerProfile) -> u8 {
    registration_points(profile).min(MAX_SCORE) as u8
}

/// Calculate the quality score (0-100) for an existing profile.
///
/// Adds verification and content-depth weight on top of the
/// registration-time fields: certifications scale with count up to a
/// cap, a verified contact email earns a fixed bonus, and a long
/// description out-scores a short one.
pub fn calculate_profile_score(profile: &ManufacturerProfile) -> u8 {
    let mut score = registration_points(profile);

    let cert_count = profile.certifications.len() as u32;
    score += (cert_count * CERTIFICATION_POINTS_EACH).min(CERTIFICATION_POINTS_CAP);

    if profile.email_verified() {
        score += EMAIL_VERIFIED_POINTS;
    }

    if profile
        .description
        .as_deref()
        .map_or(false, |d| d.trim().len() > LONG_DESCRIPTION_THRESHOLD)
    {
        score += LONG_DESCRIPTION_POINTS;
    }

    score.min(MAX_SCORE) as u8
}

/// Calculate profile completeness as the percentage (0-100) of a fixed
/// checklist of fields that are populated.
///
/// Rounding happens once on the final percentage, not per field, so a
/// fully populated profile reports exactly 100.
pub fn calculate_profile_completeness(profile: &ManufacturerProfile) -> u8 {
    let checklist = [
        has_text(profile.name.as_deref()),
        has_text(profile.description.as_deref()),
        has_text(profile.industry.as_deref()),
        has_text(profile.contact_email.as_deref()),
        !profile.services_offered.is_empty(),
        has_positive_moq(profile),
        has_text(profile.headquarters.country.as_deref()),
        has_text(profile.headquarters.city.as_deref()),
        !profile.certifications.is_empty(),
        profile.email_verified(),
    ];

    let populated = checklist.iter().filter(|present| **present).count();
    let percentage = populated as f64 * 100.0 / checklist.len() as f64;

    percentage.round() as u8
}

/// Points for the fields shared by the initial and full profile scores
fn registration_points(profile: &ManufacturerProfile) -> u32 {
    let mut score = 0;

    if has_text(profile.name.as_deref()) {
        score += NAME_POINTS;
    }
    if has_text(profile.description.as_deref()) {
        score += DESCRIPTION_POINTS;
    }
    if has_text(profile.industry.as_deref()) {
        score += INDUSTRY_POINTS;
    }
    if has_text(profile.contact_email.as_deref()) {
        score += CONTACT_EMAIL_POINTS;
    }
    if !profile.services_offered.is_empty() {
        score += SERVICES_POINTS;
    }
    if has_positive_moq(profile) {
        score += MOQ_POINTS;
    }
    if has_text(profile.headquarters.country.as_deref()) {
        score += COUNTRY_POINTS;
    }

    score
}

/// Whitespace-only strings count as missing
#[inline]
fn has_text(value: Option<&str>) -> bool {
    value.map_or(false, |s| !s.trim().is_empty())
}

/// A minimum order quantity of 0 is not a usable quantity
#[inline]
fn has_positive_moq(profile: &ManufacturerProfile) -> bool {
    profile.moq.map_or(false, |moq| moq > 0)
}
