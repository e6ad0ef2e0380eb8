//! Editor settings inspection.

use serde_json::Value;

use super::checklist::LinterCheck;

/// Whether editor settings content enables the configured linter.
///
/// Malformed content counts as "not configured".
pub fn linter_configured(content: &str, linter: &LinterCheck) -> bool {
    let settings: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("Unparseable editor settings: {}", e);
            return false;
        }
    };

    let provider_matches = settings
        .get(&linter.setting)
        .and_then(Value::as_str)
        .is_some_and(|v| v == linter.expected);

    let section_mentions = settings.get(&linter.section).is_some_and(|section| {
        section
            .to_string()
            .to_lowercase()
            .contains(&linter.name.to_lowercase())
    });

    provider_matches || section_mentions
}
