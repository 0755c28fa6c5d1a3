use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// resident (any attribute may live at any of the three levels)
//  ├── id
//  ├── first_name / middle_name / last_name
//  ├── email
//  ├── verification_status
//  ├── status_notes
//  ├── updated_at
//  ├── user
//  │    ├── id
//  │    ├── name
//  │    ├── email
//  │    ├── residencyStatus (or residency_status)
//  │    ├── status_notes
//  │    └── updated_at
//  └── profile
//       └── verification_status

#[derive(Debug, Default, Deserialize)]
pub struct RawResidentPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub verification_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<RawUser>,
    #[serde(default, deserialize_with = "lenient")]
    pub profile: Option<RawProfile>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "residencyStatus",
        alias = "residency_status",
        deserialize_with = "lenient"
    )]
    pub residency_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default, deserialize_with = "lenient")]
    pub verification_status: Option<String>,
}

/// A field of the wrong type (`"profile": []`, a numeric status) reads as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Backends hand out ids both as numbers and as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

/// Envelope of `GET /admin/residents`.
#[derive(Debug, Default, Deserialize)]
pub struct ResidentsEnvelope {
    #[serde(default)]
    pub residents: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidentId(String);

impl ResidentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for ResidentId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s.trim().to_string()),
        }
    }
}

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidencyStatus {
    Active,
    Inactive,
    ForReview,
    Deceased,
    Relocated,
}

impl ResidencyStatus {
    pub const ALL: [ResidencyStatus; 5] = [
        ResidencyStatus::Active,
        ResidencyStatus::Inactive,
        ResidencyStatus::ForReview,
        ResidencyStatus::Deceased,
        ResidencyStatus::Relocated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResidencyStatus::Active => "active",
            ResidencyStatus::Inactive => "inactive",
            ResidencyStatus::ForReview => "for_review",
            ResidencyStatus::Deceased => "deceased",
            ResidencyStatus::Relocated => "relocated",
        }
    }

    /// Strict parse; `None` for anything outside the five known values.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
    }

    /// Lenient parse used by the normalizer: unknown or missing is `for_review`.
    pub fn parse_or_review(value: Option<&str>) -> Self {
        value
            .and_then(Self::parse)
            .unwrap_or(ResidencyStatus::ForReview)
    }
}

impl fmt::Display for ResidencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat, canonical view of one resident as shown on the review page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentView {
    pub id: ResidentId,
    pub name: String,
    pub email: String,
    pub residency_status: ResidencyStatus,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub status_updated_at: Option<DateTime<Utc>>,
    pub resident_record_id: Option<ResidentId>,
    pub verification_status: Option<String>,
    pub status_notes: Option<String>,
}

/// Body of `POST /admin/residency-status/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateRequest {
    pub residency_status: ResidencyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_notes: Option<String>,
}
