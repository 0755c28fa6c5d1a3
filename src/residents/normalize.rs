// residents/normalize.rs
//
// One resolver per attribute. Each resolver walks its sources in order and the
// first non-blank value wins.
use crate::residents::models::{RawResidentPayload, ResidencyStatus, ResidentId, ResidentView};
use crate::residents::ApiError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

pub fn normalize_resident(value: Value) -> Result<ResidentView, ApiError> {
    if !value.is_object() {
        return Err(ApiError::UnexpectedShape(format!(
            "resident entry is not an object: {value}"
        )));
    }

    let raw: RawResidentPayload = serde_json::from_value(value)
        .map_err(|e| ApiError::UnexpectedShape(format!("resident entry: {e}")))?;

    let id = resolve_id(&raw)
        .ok_or_else(|| ApiError::UnexpectedShape("resident entry has no id".into()))?;

    Ok(ResidentView {
        name: resolve_name(&raw),
        email: resolve_email(&raw),
        residency_status: resolve_residency_status(&raw),
        last_activity_at: resolve_last_activity(&raw),
        status_updated_at: resolve_status_updated(&raw),
        resident_record_id: raw
            .id
            .clone()
            .map(ResidentId::from)
            .filter(|id| !id.as_str().is_empty()),
        verification_status: resolve_verification_status(&raw),
        status_notes: resolve_status_notes(&raw),
        id,
    })
}

/// Normalize a full list, failing on the first malformed entry.
pub fn normalize_all(values: Vec<Value>) -> Result<Vec<ResidentView>, ApiError> {
    values.into_iter().map(normalize_resident).collect()
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn resolve_id(raw: &RawResidentPayload) -> Option<ResidentId> {
    let user_id = raw.user.as_ref().and_then(|u| u.id.clone());
    user_id
        .into_iter()
        .chain(raw.id.clone())
        .map(ResidentId::from)
        .find(|id| !id.as_str().is_empty())
}

fn resolve_name(raw: &RawResidentPayload) -> String {
    if let Some(name) = non_blank(raw.user.as_ref().and_then(|u| u.name.as_ref())) {
        return name.to_string();
    }

    [&raw.first_name, &raw.middle_name, &raw.last_name]
        .into_iter()
        .filter_map(|part| non_blank(part.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_email(raw: &RawResidentPayload) -> String {
    non_blank(raw.user.as_ref().and_then(|u| u.email.as_ref()))
        .or_else(|| non_blank(raw.email.as_ref()))
        .unwrap_or_default()
        .to_string()
}

fn resolve_residency_status(raw: &RawResidentPayload) -> ResidencyStatus {
    let status = raw.user.as_ref().and_then(|u| u.residency_status.as_deref());
    ResidencyStatus::parse_or_review(status)
}

fn resolve_last_activity(raw: &RawResidentPayload) -> Option<DateTime<Utc>> {
    non_blank(raw.updated_at.as_ref())
        .or_else(|| non_blank(raw.user.as_ref().and_then(|u| u.updated_at.as_ref())))
        .and_then(parse_timestamp)
}

fn resolve_status_updated(raw: &RawResidentPayload) -> Option<DateTime<Utc>> {
    non_blank(raw.user.as_ref().and_then(|u| u.updated_at.as_ref())).and_then(parse_timestamp)
}

fn resolve_verification_status(raw: &RawResidentPayload) -> Option<String> {
    non_blank(raw.verification_status.as_ref())
        .or_else(|| non_blank(raw.profile.as_ref().and_then(|p| p.verification_status.as_ref())))
        .map(str::to_string)
}

fn resolve_status_notes(raw: &RawResidentPayload) -> Option<String> {
    non_blank(raw.user.as_ref().and_then(|u| u.status_notes.as_ref()))
        .or_else(|| non_blank(raw.status_notes.as_ref()))
        .map(str::to_string)
}

/// RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS` taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            tracing::debug!(value, error = %e, "ignoring unparseable timestamp");
            None
        }
    }
}
