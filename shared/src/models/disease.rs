//! Plant disease analysis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DataSource, Language};

/// Probability below which a detection is rated low severity
pub const LOW_SEVERITY_BELOW: f64 = 0.4;
/// Probability below which a detection is rated medium severity
pub const MEDIUM_SEVERITY_BELOW: f64 = 0.7;

/// Disease name reported when the health assessment lists nothing
pub const NO_DISEASE_DETECTED: &str = "No disease detected";

/// Severity bucket derived from detection probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Severity::Low, Language::English) => "Low",
            (Severity::Medium, Language::English) => "Medium",
            (Severity::High, Language::English) => "High",
            (Severity::Low, Language::Hindi) => "कम",
            (Severity::Medium, Language::Hindi) => "मध्यम",
            (Severity::High, Language::Hindi) => "उच्च",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

/// Classify a detection probability into a severity bucket
pub fn classify_severity(probability: f64) -> Severity {
    let p = if probability.is_nan() { 0.0 } else { probability };
    if p < LOW_SEVERITY_BELOW {
        Severity::Low
    } else if p < MEDIUM_SEVERITY_BELOW {
        Severity::Medium
    } else {
        Severity::High
    }
}

/// Clamp a reported confidence into [0, 1]
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

/// Immediate actions shown alongside a diagnosis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Recommendations {
    pub preventive_measures: Vec<String>,
    pub organic_solutions: Vec<String>,
    pub chemical_solutions: Vec<String>,
}

/// Result of analysing one uploaded image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseAnalysis {
    pub id: Uuid,
    pub file_name: String,
    pub plant_name: String,
    pub plant_name_hi: String,
    pub disease_name: String,
    pub disease_name_hi: String,
    /// In [0, 1]
    pub confidence: f64,
    pub severity: Severity,
    pub treatment: String,
    pub treatment_hi: String,
    pub source: DataSource,
    pub recommendations: Recommendations,
    pub analyzed_at: DateTime<Utc>,
}

/// Outcome for one file in an upload batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisEntry {
    Analyzed(DiseaseAnalysis),
    Failed {
        file_name: String,
        message: String,
        message_hi: String,
    },
}

impl AnalysisEntry {
    pub fn file_name(&self) -> &str {
        match self {
            AnalysisEntry::Analyzed(a) => &a.file_name,
            AnalysisEntry::Failed { file_name, .. } => file_name,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisEntry::Failed { .. })
    }
}

/// Response for a multi-image upload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisBatch {
    pub results: Vec<AnalysisEntry>,
    /// Uploaded files that were not images
    pub skipped_files: Vec<String>,
}

// ============================================================================
// Recommendation table
// ============================================================================

struct DiseaseGuide {
    aliases: &'static [&'static str],
    preventive: &'static [&'static str],
    organic: &'static [&'static str],
    chemical: &'static [&'static str],
}

const GENERIC_PREVENTIVE: &[&str] = &[
    "Maintain proper plant spacing for good air circulation",
    "Water at the base of plants to keep leaves dry",
    "Remove and destroy infected plant debris",
    "Use disease-resistant varieties when available",
];

const GENERIC_ORGANIC: &[&str] = &[
    "Apply neem oil spray",
    "Use copper-based fungicides",
    "Apply compost tea as a natural fungicide",
    "Introduce beneficial microorganisms to soil",
];

const GENERIC_CHEMICAL: &[&str] = &[
    "Apply appropriate fungicide based on disease type",
    "Use systemic pesticides if needed",
    "Follow recommended chemical application schedule",
    "Rotate between different chemical classes to prevent resistance",
];

const DISEASE_GUIDES: &[DiseaseGuide] = &[
    DiseaseGuide {
        aliases: &["apple scab", "apple apple scab"],
        preventive: &[
            "Plant resistant varieties",
            "Clean up fallen leaves in autumn",
            "Maintain proper tree spacing",
        ],
        organic: &[
            "Apply organic fungicides like neem oil",
            "Remove infected leaves and fruit",
            "Improve air circulation by pruning",
        ],
        chemical: &[
            "Apply captan or myclobutanil from green tip to petal fall",
            "Follow recommended chemical application schedule",
        ],
    },
    DiseaseGuide {
        aliases: &["tomato late blight", "late blight"],
        preventive: &[
            "Use disease-resistant varieties",
            "Avoid overhead watering",
            "Practice crop rotation",
        ],
        organic: &[
            "Apply copper-based fungicides",
            "Remove and destroy infected plants",
            "Improve drainage and air circulation",
        ],
        chemical: &[
            "Apply chlorothalonil or mancozeb at first sign of infection",
            "Rotate between different chemical classes to prevent resistance",
        ],
    },
];

/// Normalise a disease name or PlantDoc key for table lookup
pub fn normalize_disease_key(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Look up immediate actions for a disease, falling back to generic advice
pub fn recommendations_for(disease_name: &str) -> Recommendations {
    let key = normalize_disease_key(disease_name);
    match DISEASE_GUIDES.iter().find(|g| g.aliases.contains(&key.as_str())) {
        Some(guide) => Recommendations {
            preventive_measures: to_strings(guide.preventive),
            organic_solutions: to_strings(guide.organic),
            chemical_solutions: to_strings(guide.chemical),
        },
        None => Recommendations {
            preventive_measures: to_strings(GENERIC_PREVENTIVE),
            organic_solutions: to_strings(GENERIC_ORGANIC),
            chemical_solutions: to_strings(GENERIC_CHEMICAL),
        },
    }
}

// ============================================================================
// Mock detections (PlantDoc classes)
// ============================================================================

/// A canned detection used when the plant identification API is not configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDisease {
    pub key: &'static str,
    pub plant_name: &'static str,
    pub disease_name: &'static str,
    pub treatment: &'static str,
}

pub const MOCK_DISEASES: &[MockDisease] = &[
    MockDisease {
        key: "Apple___Apple_scab",
        plant_name: "Apple",
        disease_name: "Apple Scab",
        treatment: "Apply organic fungicides like neem oil; remove infected leaves and fruit",
    },
    MockDisease {
        key: "Tomato___Late_blight",
        plant_name: "Tomato",
        disease_name: "Tomato Late Blight",
        treatment: "Apply copper-based fungicides; remove and destroy infected plants",
    },
];

/// Pick a mock detection from a digest of the image, with confidence in [0.85, 0.95)
pub fn mock_detection(digest: &[u8]) -> (&'static MockDisease, f64) {
    let pick = digest.first().copied().unwrap_or(0) as usize % MOCK_DISEASES.len();
    let spread = digest.get(1).copied().unwrap_or(0) as f64 / 256.0;
    (&MOCK_DISEASES[pick], 0.85 + spread * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(classify_severity(0.0), Severity::Low);
        assert_eq!(classify_severity(0.39), Severity::Low);
        assert_eq!(classify_severity(0.4), Severity::Medium);
        assert_eq!(classify_severity(0.69), Severity::Medium);
        assert_eq!(classify_severity(0.7), Severity::High);
        assert_eq!(classify_severity(1.0), Severity::High);
    }

    #[test]
    fn test_severity_out_of_range() {
        assert_eq!(classify_severity(f64::NAN), Severity::Low);
        assert_eq!(classify_severity(-0.5), Severity::Low);
        assert_eq!(classify_severity(1.5), Severity::High);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::High.to_string(), "High");
        assert_eq!(Severity::Medium.label(Language::Hindi), "मध्यम");
    }

    #[test]
    fn test_normalize_disease_key() {
        assert_eq!(normalize_disease_key("Tomato___Late_blight"), "tomato late blight");
        assert_eq!(normalize_disease_key("  Apple   Scab "), "apple scab");
    }

    #[test]
    fn test_recommendations_known_disease() {
        let by_key = recommendations_for("Apple___Apple_scab");
        let by_name = recommendations_for("Apple Scab");
        assert_eq!(by_key, by_name);
        assert_eq!(by_key.preventive_measures[0], "Plant resistant varieties");
    }

    #[test]
    fn test_recommendations_unknown_disease() {
        let recs = recommendations_for("Powdery mildew");
        assert_eq!(recs.preventive_measures.len(), 4);
        assert_eq!(recs.organic_solutions[0], "Apply neem oil spray");
        assert_eq!(
            recs.chemical_solutions[3],
            "Rotate between different chemical classes to prevent resistance"
        );
    }

    #[test]
    fn test_mock_detection_is_deterministic() {
        let digest = [3u8, 128, 7];
        let (a, ca) = mock_detection(&digest);
        let (b, cb) = mock_detection(&digest);
        assert_eq!(a, b);
        assert_eq!(ca, cb);
        assert_eq!(a.key, "Tomato___Late_blight");
        assert!((ca - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_entry_serialization_tag() {
        let entry = AnalysisEntry::Failed {
            file_name: "leaf.png".into(),
            message: "boom".into(),
            message_hi: "boom".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["file_name"], "leaf.png");
    }

    proptest! {
        #[test]
        fn prop_severity_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_severity(lo) <= classify_severity(hi));
        }

        #[test]
        fn prop_mock_confidence_range(digest in proptest::collection::vec(any::<u8>(), 0..32)) {
            let (_, confidence) = mock_detection(&digest);
            prop_assert!((0.85..0.95).contains(&confidence));
        }

        #[test]
        fn prop_clamp_confidence(c in -10.0f64..10.0) {
            let clamped = clamp_confidence(c);
            prop_assert!((0.0..=1.0).contains(&clamped));
        }
    }
}
