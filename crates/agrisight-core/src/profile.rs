//! Farmer Profile Intake
//!
//! Validation and synthesis for the one-shot profile submission flow.
//! Profiles are echoed back enriched; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AgriError, Result};

/// Required submission fields, in the order they are reported when missing.
pub const REQUIRED_PROFILE_FIELDS: [&str; 5] =
    ["state", "district", "farmSize", "soilType", "irrigation"];

/// Raw profile form payload as posted by the intake form.
///
/// Every field is optional at the wire level; `missing_fields` decides
/// which ones actually block submission.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSubmission {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub farm_size: Option<String>,
    pub soil_type: Option<String>,
    pub irrigation: Option<String>,
    pub languages: Vec<String>,
    pub crops: Vec<String>,
}

impl ProfileSubmission {
    /// Names of required fields that are absent or empty, in
    /// `REQUIRED_PROFILE_FIELDS` order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.state,
            &self.district,
            &self.farm_size,
            &self.soil_type,
            &self.irrigation,
        ];

        REQUIRED_PROFILE_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| !value.as_deref().is_some_and(|v| !v.is_empty()))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Reject the submission unless every required field is present.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AgriError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ))
        }
    }
}

/// A complete farmer profile as returned by the intake endpoint.
///
/// The `id` is assigned by the handler at creation time and never reused;
/// the profile itself lives only for the single request/response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    /// "district, state"
    pub location: String,
    pub state: String,
    pub district: String,
    pub farm_size: String,
    pub soil_type: String,
    pub irrigation: String,
    pub languages: Vec<String>,
    pub crops: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FarmerProfile {
    /// Build a profile from a validated submission, filling defaults for
    /// the optional fields. The caller supplies the synthesized id.
    pub fn from_submission(submission: ProfileSubmission, id: impl Into<String>) -> Result<Self> {
        submission.validate()?;

        let state = submission.state.unwrap_or_default();
        let district = submission.district.unwrap_or_default();
        let now = Utc::now();

        Ok(Self {
            id: id.into(),
            name: submission
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Farmer".into()),
            avatar: submission.avatar,
            location: format!("{district}, {state}"),
            state,
            district,
            farm_size: submission.farm_size.unwrap_or_default(),
            soil_type: submission.soil_type.unwrap_or_default(),
            irrigation: submission.irrigation.unwrap_or_default(),
            languages: submission.languages,
            crops: submission.crops,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ProfileSubmission {
        ProfileSubmission {
            state: Some("Odisha".into()),
            district: Some("Cuttack".into()),
            farm_size: Some("2".into()),
            soil_type: Some("Alluvial Soil".into()),
            irrigation: Some("Drip Irrigation".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_submission_reports_all_fields_in_order() {
        let missing = ProfileSubmission::default().missing_fields();
        assert_eq!(
            missing,
            vec!["state", "district", "farmSize", "soilType", "irrigation"]
        );
    }

    #[test]
    fn test_partial_submission_reports_remaining_fields() {
        let submission = ProfileSubmission {
            state: Some("Odisha".into()),
            ..Default::default()
        };
        assert_eq!(
            submission.missing_fields(),
            vec!["district", "farmSize", "soilType", "irrigation"]
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut submission = valid_submission();
        submission.district = Some(String::new());
        assert_eq!(submission.missing_fields(), vec!["district"]);
    }

    #[test]
    fn test_profile_synthesis_defaults() {
        let profile = FarmerProfile::from_submission(valid_submission(), "profile_1").unwrap();
        assert_eq!(profile.id, "profile_1");
        assert_eq!(profile.name, "Farmer");
        assert_eq!(profile.avatar, None);
        assert_eq!(profile.location, "Cuttack, Odisha");
        assert!(profile.languages.is_empty());
        assert!(profile.crops.is_empty());
        assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn test_profile_synthesis_keeps_provided_name() {
        let mut submission = valid_submission();
        submission.name = Some("Asha".into());
        submission.languages = vec!["Odia".into(), "Hindi".into()];
        let profile = FarmerProfile::from_submission(submission, "profile_2").unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.languages.len(), 2);
    }

    #[test]
    fn test_invalid_submission_is_rejected() {
        let err = FarmerProfile::from_submission(ProfileSubmission::default(), "x").unwrap_err();
        assert!(err.to_string().contains("state"));
        assert!(err.to_string().contains("irrigation"));
    }

    #[test]
    fn test_wire_field_names() {
        let profile =
            FarmerProfile::from_submission(valid_submission(), "profile_wire").unwrap();
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["farmSize"], "2");
        assert_eq!(json["soilType"], "Alluvial Soil");
        assert!(json["avatar"].is_null());
        assert!(json.get("createdAt").is_some());
    }
}
