//! Remediation suggestions for failed checks.
//!
//! Suggestions come out in a fixed display order (metadata, then
//! documentation, then configuration) rather than report order.

use serde::Serialize;

use super::checklist::Checklist;
use super::report::{ComplianceReport, DESCRIPTION_PRESENT, LICENSE_STATUS, TAGS_PRESENT};

/// Display group of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Metadata,
    Documentation,
    Configuration,
}

/// Remediation for one failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub key: String,
    pub category: Category,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Hint about where template folders belong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateTip {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// What to tell the user after an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Suggestions {
    /// Every check passed.
    AllSet,
    /// At least one check failed.
    Remediate {
        #[serde(skip_serializing_if = "Option::is_none")]
        template_tip: Option<TemplateTip>,
        items: Vec<Suggestion>,
    },
    /// The evaluation itself failed.
    Unavailable { error: String },
}

impl Suggestions {
    /// Failed-check suggestions, empty unless remediation is needed.
    pub fn items(&self) -> &[Suggestion] {
        match self {
            Self::Remediate { items, .. } => items,
            _ => &[],
        }
    }
}

struct Row<'a> {
    key: &'a str,
    category: Category,
    message: &'a str,
    image: Option<&'a str>,
}

/// Every remediation the checklist knows, in display order.
fn table(checklist: &Checklist) -> Vec<Row<'_>> {
    let mut rows = vec![
        Row {
            key: DESCRIPTION_PRESENT,
            category: Category::Metadata,
            message: &checklist.metadata.description.suggestion,
            image: checklist.metadata.description.image.as_deref(),
        },
        Row {
            key: TAGS_PRESENT,
            category: Category::Metadata,
            message: &checklist.metadata.tags.suggestion,
            image: checklist.metadata.tags.image.as_deref(),
        },
    ];

    rows.extend(checklist.required_files.iter().map(|f| Row {
        key: &f.label,
        category: Category::Documentation,
        message: &f.suggestion,
        image: f.image.as_deref(),
    }));
    rows.push(Row {
        key: LICENSE_STATUS,
        category: Category::Documentation,
        message: &checklist.license.suggestion,
        image: checklist.license.image.as_deref(),
    });
    for folder in [&checklist.templates.issue, &checklist.templates.merge_request] {
        rows.push(Row {
            key: &folder.key,
            category: Category::Documentation,
            message: &folder.suggestion,
            image: folder.image.as_deref(),
        });
    }

    rows.extend(checklist.config_files.iter().map(|f| Row {
        key: &f.name,
        category: Category::Configuration,
        message: &f.suggestion,
        image: f.image.as_deref(),
    }));
    rows.extend(checklist.editor.files.iter().map(|f| Row {
        key: &f.key,
        category: Category::Configuration,
        message: &f.suggestion,
        image: f.image.as_deref(),
    }));
    if let Some(linter) = &checklist.editor.linter {
        rows.push(Row {
            key: &linter.key,
            category: Category::Configuration,
            message: &linter.suggestion,
            image: linter.image.as_deref(),
        });
    }

    rows
}

/// Build suggestions for every failed check in `report`.
///
/// # Example
///
/// ```
/// use repo_hygiene::compliance::{render_suggestions, Checklist, ComplianceReport};
///
/// let report = ComplianceReport::Failed { error: "boom".to_string() };
/// let suggestions = render_suggestions(&report, &Checklist::default());
/// assert!(suggestions.items().is_empty());
/// ```
pub fn render_suggestions(report: &ComplianceReport, checklist: &Checklist) -> Suggestions {
    let findings = match report {
        ComplianceReport::Completed(findings) => findings,
        ComplianceReport::Failed { error } => {
            return Suggestions::Unavailable {
                error: error.clone(),
            }
        }
    };

    if findings.all_passed() {
        return Suggestions::AllSet;
    }

    let failed = |key: &str| findings.get(key).is_some_and(|v| !v.passed());

    let items: Vec<Suggestion> = table(checklist)
        .into_iter()
        .filter(|row| failed(row.key))
        .map(|row| Suggestion {
            key: row.key.to_string(),
            category: row.category,
            message: row.message.to_string(),
            image: row.image.map(String::from),
        })
        .collect();

    let templates = &checklist.templates;
    let template_tip = (failed(&templates.issue.key) || failed(&templates.merge_request.key))
        .then(|| TemplateTip {
            message: templates.tip.clone(),
            image: templates.tip_image.clone(),
        });

    Suggestions::Remediate {
        template_tip,
        items,
    }
}
