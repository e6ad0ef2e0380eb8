//! Compliance report types.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Report key for issue template matches.
pub const ISSUE_TEMPLATES: &str = "issue_templates";
/// Report key for merge request template matches.
pub const MERGE_REQUEST_TEMPLATES: &str = "merge_request_templates";
/// Report key for the license content classification.
pub const LICENSE_STATUS: &str = "license_status";
/// Report key for a non-blank project description.
pub const DESCRIPTION_PRESENT: &str = "description_present";
/// Report key for the existence of at least one tag.
pub const TAGS_PRESENT: &str = "tags_present";

/// Outcome of classifying license file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// No candidate license file could be fetched.
    NotFound,
    /// A license file exists but does not match the policy.
    Invalid,
    /// A license file matches the policy.
    Valid,
}

impl LicenseStatus {
    /// Display label matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Invalid => "invalid",
            Self::Valid => "valid",
        }
    }
}

/// The value recorded for one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckValue {
    /// Plain presence.
    Present(bool),
    /// Matching file names; presence means non-empty.
    Files(Vec<String>),
    /// License classification.
    License(LicenseStatus),
}

impl CheckValue {
    /// Whether the requirement is met.
    pub fn passed(&self) -> bool {
        match self {
            Self::Present(present) => *present,
            Self::Files(files) => !files.is_empty(),
            Self::License(status) => *status == LicenseStatus::Valid,
        }
    }
}

/// One recorded check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub key: String,
    pub value: CheckValue,
}

/// Check results in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    entries: Vec<Finding>,
}

impl Findings {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result, replacing an earlier value for the same key.
    pub fn record(&mut self, key: impl Into<String>, value: CheckValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|f| f.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Finding { key, value }),
        }
    }

    /// Look up a result by key.
    pub fn get(&self, key: &str) -> Option<&CheckValue> {
        self.entries
            .iter()
            .find(|f| f.key == key)
            .map(|f| &f.value)
    }

    /// Iterate over all results.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.entries.iter()
    }

    /// Iterate over results whose requirement is not met.
    pub fn failing(&self) -> impl Iterator<Item = &Finding> {
        self.entries.iter().filter(|f| !f.value.passed())
    }

    /// Whether every recorded requirement is met.
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|f| f.value.passed())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Findings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for finding in &self.entries {
            map.serialize_entry(&finding.key, &finding.value)?;
        }
        map.end()
    }
}

/// Result of evaluating one repository snapshot.
///
/// A `Failed` report carries no findings: when setup fails, nothing else
/// about the repository is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceReport {
    /// Every check ran.
    Completed(Findings),
    /// Branch resolution or the root listing failed.
    Failed { error: String },
}

impl ComplianceReport {
    /// Get the findings of a completed evaluation.
    pub fn findings(&self) -> Option<&Findings> {
        match self {
            Self::Completed(findings) => Some(findings),
            Self::Failed { .. } => None,
        }
    }

    /// Get the error of a failed evaluation.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Completed(_) => None,
            Self::Failed { error } => Some(error),
        }
    }

    /// Look up a single check result.
    pub fn get(&self, key: &str) -> Option<&CheckValue> {
        self.findings().and_then(|f| f.get(key))
    }

    /// Whether the evaluation completed and every requirement is met.
    pub fn all_passed(&self) -> bool {
        self.findings().is_some_and(Findings::all_passed)
    }
}

impl Serialize for ComplianceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Completed(findings) => findings.serialize(serializer),
            Self::Failed { error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passed_covers_every_shape() {
        assert!(CheckValue::Present(true).passed());
        assert!(!CheckValue::Present(false).passed());
        assert!(CheckValue::Files(vec!["bug.md".into()]).passed());
        assert!(!CheckValue::Files(vec![]).passed());
        assert!(CheckValue::License(LicenseStatus::Valid).passed());
        assert!(!CheckValue::License(LicenseStatus::Invalid).passed());
        assert!(!CheckValue::License(LicenseStatus::NotFound).passed());
    }

    #[test]
    fn record_replaces_existing_key() {
        let mut findings = Findings::new();
        findings.record("README.md", CheckValue::Present(false));
        findings.record("README.md", CheckValue::Present(true));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings.get("README.md"), Some(&CheckValue::Present(true)));
    }

    #[test]
    fn failing_lists_only_unmet() {
        let mut findings = Findings::new();
        findings.record("a", CheckValue::Present(true));
        findings.record("b", CheckValue::Files(vec![]));
        findings.record("c", CheckValue::License(LicenseStatus::Invalid));

        let failing: Vec<_> = findings.failing().map(|f| f.key.as_str()).collect();
        assert_eq!(failing, vec!["b", "c"]);
        assert!(!findings.all_passed());
    }

    #[test]
    fn completed_report_serializes_as_flat_map() {
        let mut findings = Findings::new();
        findings.record("README.md", CheckValue::Present(true));
        findings.record(ISSUE_TEMPLATES, CheckValue::Files(vec!["bug.MD".into()]));
        findings.record(LICENSE_STATUS, CheckValue::License(LicenseStatus::NotFound));

        let value = serde_json::to_value(ComplianceReport::Completed(findings)).unwrap();

        assert_eq!(
            value,
            json!({
                "README.md": true,
                "issue_templates": ["bug.MD"],
                "license_status": "not_found"
            })
        );
    }

    #[test]
    fn failed_report_has_only_error_key() {
        let report = ComplianceReport::Failed {
            error: "boom".into(),
        };
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value, json!({"error": "boom"}));
        assert!(report.findings().is_none());
        assert!(report.get("README.md").is_none());
        assert!(!report.all_passed());
    }

    #[test]
    fn license_status_labels_match_serde() {
        for status in [
            LicenseStatus::NotFound,
            LicenseStatus::Invalid,
            LicenseStatus::Valid,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                json!(status.as_str())
            );
        }
    }
}
