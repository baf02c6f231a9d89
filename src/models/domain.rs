use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Manufacturer profile as stored in the marketplace document store.
///
/// Every scored field is optional: partially filled registrations are
/// valid inputs and simply earn lower scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturerProfile {
    #[serde(rename = "manufacturerId", alias = "_id")]
    pub manufacturer_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(rename = "contactEmail", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "servicesOffered", default)]
    pub services_offered: Vec<String>,
    #[serde(default)]
    pub moq: Option<u64>,
    #[serde(default)]
    pub headquarters: Headquarters,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(rename = "isEmailVerified", default)]
    pub is_email_verified: Option<bool>,
    /// Cached completeness percentage maintained by the profile service.
    #[serde(rename = "profileCompleteness", default)]
    pub profile_completeness: Option<u8>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ManufacturerProfile {
    /// Helper to get is_email_verified as a bool, defaulting to false
    pub fn email_verified(&self) -> bool {
        self.is_email_verified.unwrap_or(false)
    }

    /// Services lowercased and trimmed for overlap/subset comparisons
    pub fn normalized_services(&self) -> HashSet<String> {
        self.services_offered
            .iter()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Manufacturer headquarters location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Headquarters {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Buyer-supplied matching criteria
///
/// Criterion names reported in [`CriteriaMatch::matched_criteria`] follow
/// the field order declared here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchCriteria {
    #[serde(default)]
    pub industry: Option<IndustryFilter>,
    /// Required services; every entry must appear in the profile's
    /// servicesOffered.
    #[serde(default)]
    pub services: Option<Vec<String>>,
    #[serde(rename = "moqRange", default)]
    pub moq_range: Option<MoqRange>,
}

/// Required industry: a single value or an any-of list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndustryFilter {
    One(String),
    AnyOf(Vec<String>),
}

/// Inclusive minimum order quantity bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoqRange {
    pub min: u64,
    pub max: u64,
}

/// Result of matching one manufacturer against a criteria set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaMatch {
    pub matches: bool,
    /// Fraction of specified criteria that passed, 1.0 when none were
    /// specified.
    pub score: f64,
    #[serde(rename = "matchedCriteria")]
    pub matched_criteria: Vec<String>,
}

/// Similarity search hit, scored on the 0-100 scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarManufacturer {
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: String,
    pub similarity: f64,
}

/// Ranking input: a profile plus an optional externally supplied match
/// score in [0, 1] (treated as 0 when absent).
#[derive(Debug, Clone)]
pub struct RankCandidate {
    pub profile: ManufacturerProfile,
    pub match_score: Option<f64>,
}

/// Ranked result entry; rank 1 is the highest composite score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedManufacturer {
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: String,
    pub rank: usize,
    pub score: f64,
}

/// Pairwise similarity weights
#[derive(Debug, Clone, Copy)]
pub struct SimilarityWeights {
    pub industry: f64,
    pub services: f64,
    pub moq: f64,
    pub location: f64,
}

impl SimilarityWeights {
    pub fn sum(&self) -> f64 {
        self.industry + self.services + self.moq + self.location
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            industry: 0.30,
            services: 0.35,
            moq: 0.15,
            location: 0.20,
        }
    }
}

/// Composite ranking weights
#[derive(Debug, Clone, Copy)]
pub struct RankingWeights {
    pub profile_score: f64,
    pub match_score: f64,
    pub certification_count: f64,
    pub services_count: f64,
}

impl RankingWeights {
    pub fn sum(&self) -> f64 {
        self.profile_score + self.match_score + self.certification_count + self.services_count
    }
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            profile_score: 0.4,
            match_score: 0.3,
            certification_count: 0.2,
            services_count: 0.1,
        }
    }
}
