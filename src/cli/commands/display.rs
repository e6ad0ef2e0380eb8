//! Shared display helpers for reports and suggestions.

use crate::compliance::{Category, CheckValue, ComplianceReport, Suggestions};
use crate::ui::UserInterface;

/// Section title for a suggestion category.
pub fn category_title(category: Category) -> &'static str {
    match category {
        Category::Metadata => "Metadata",
        Category::Documentation => "Documentation",
        Category::Configuration => "Configuration",
    }
}

/// Extra text shown after a check label.
pub fn check_detail(value: &CheckValue) -> Option<String> {
    match value {
        CheckValue::Present(_) => None,
        CheckValue::Files(files) if files.is_empty() => Some("(none)".to_string()),
        CheckValue::Files(files) => Some(format!("({})", files.join(", "))),
        CheckValue::License(status) => Some(format!("({})", status.as_str().replace('_', " "))),
    }
}

/// Print every finding in report order.
pub fn show_report(ui: &mut dyn UserInterface, report: &ComplianceReport) {
    let Some(findings) = report.findings() else {
        return;
    };
    for finding in findings.iter() {
        let detail = check_detail(&finding.value);
        ui.show_check(&finding.key, finding.value.passed(), detail.as_deref());
    }
}

/// Print remediation grouped by category, or the all-set message.
pub fn show_suggestions(ui: &mut dyn UserInterface, suggestions: &Suggestions) {
    match suggestions {
        Suggestions::AllSet => {
            ui.message("");
            ui.success("All set! The project meets every checklist requirement.");
        }
        Suggestions::Remediate {
            template_tip,
            items,
        } => {
            let verbose = ui.output_mode().shows_detail();
            let mut current = None;
            for item in items {
                if current != Some(item.category) {
                    ui.show_section(category_title(item.category));
                    current = Some(item.category);
                }
                ui.message(&format!("  • {}: {}", item.key, item.message));
                if verbose {
                    if let Some(image) = &item.image {
                        ui.message(&format!("    example: {}", image));
                    }
                }
            }
            if let Some(tip) = template_tip {
                ui.message("");
                ui.show_hint(&format!("Tip: {}", tip.message));
            }
        }
        Suggestions::Unavailable { .. } => {}
    }
}
