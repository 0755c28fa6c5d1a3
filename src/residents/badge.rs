use crate::residents::models::ResidencyStatus;

/// Presentation category for a residency status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: ResidencyStatus,
    pub label: String,
}

impl StatusBadge {
    /// Anything unrecognized, including a missing value, renders as `for_review`.
    pub fn resolve(status: Option<&str>) -> Self {
        let status = ResidencyStatus::parse_or_review(status);
        Self {
            status,
            label: status.as_str().replace('_', " ").to_uppercase(),
        }
    }

    pub fn css_class(&self) -> String {
        format!("badge badge-{}", self.status.as_str())
    }
}

impl ResidencyStatus {
    pub fn badge(self) -> StatusBadge {
        StatusBadge::resolve(Some(self.as_str()))
    }
}
