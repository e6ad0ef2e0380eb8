//! License content classification.

use super::checklist::LicensePolicy;
use super::report::LicenseStatus;

/// Lowercase and drop whitespace and hyphens.
///
/// ```
/// use repo_hygiene::compliance::normalize_license_text;
///
/// assert_eq!(normalize_license_text("GNU Affero-General\n Public"), "gnuafferogeneralpublic");
/// ```
pub fn normalize_license_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Classify fetched license content against a policy.
///
/// `None` means no candidate file could be fetched.
pub fn classify_license(content: Option<&str>, policy: &LicensePolicy) -> LicenseStatus {
    let Some(content) = content else {
        return LicenseStatus::NotFound;
    };

    match policy {
        LicensePolicy::Any => LicenseStatus::Valid,
        LicensePolicy::Phrases { phrases, .. } => {
            let normalized = normalize_license_text(content);
            let matched = phrases
                .iter()
                .map(|p| normalize_license_text(p))
                .any(|p| !p.is_empty() && normalized.contains(&p));
            if matched {
                LicenseStatus::Valid
            } else {
                LicenseStatus::Invalid
            }
        }
    }
}
