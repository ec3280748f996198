//! Pest detection fixtures

use crate::model::{PestCandidate, PestDetection, Severity};

/// Detection result the mock endpoint returns for every upload.
pub fn pest_detection() -> PestDetection {
    PestDetection {
        pest: "Aphids".into(),
        confidence: 87,
        severity: Severity::Medium,
        recommendations: vec![
            "Apply neem oil spray every 7-10 days".into(),
            "Introduce ladybugs as natural predators".into(),
            "Remove affected leaves and dispose properly".into(),
            "Improve air circulation around plants".into(),
            "Use insecticidal soap for severe infestations".into(),
        ],
        alternative_pests: vec![
            PestCandidate {
                name: "Whiteflies".into(),
                confidence: 12,
            },
            PestCandidate {
                name: "Thrips".into(),
                confidence: 8,
            },
        ],
    }
}

/// Shorter result the card falls back to when the upload request fails.
pub fn pest_detection_fallback() -> PestDetection {
    PestDetection {
        pest: "Aphids".into(),
        confidence: 87,
        severity: Severity::Medium,
        recommendations: vec![
            "Apply neem oil spray".into(),
            "Introduce ladybugs as natural predators".into(),
            "Remove affected leaves".into(),
            "Improve air circulation".into(),
        ],
        alternative_pests: Vec::new(),
    }
}
