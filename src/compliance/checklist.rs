//! Checklist definition.
//!
//! The set of required files, template folders, editor files, and the
//! license policy is data, not code. [`Checklist::default`] carries the
//! built-in policy; a YAML file can replace any section.

use serde::{Deserialize, Serialize};

use super::report::{
    DESCRIPTION_PRESENT, ISSUE_TEMPLATES, LICENSE_STATUS, MERGE_REQUEST_TEMPLATES, TAGS_PRESENT,
};

/// Root checklist structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklist {
    /// Root-level files, each satisfied by any of its variants.
    pub required_files: Vec<RequiredFile>,

    /// Issue and merge request template folders.
    pub templates: TemplateChecks,

    /// Root-level configuration files matched by exact name.
    pub config_files: Vec<ConfigFile>,

    /// Editor configuration folder checks.
    pub editor: EditorChecks,

    /// License file content policy.
    pub license: LicenseCheck,

    /// Project metadata remediation text.
    pub metadata: MetadataChecks,
}

/// A root file requirement such as `CHANGELOG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredFile {
    /// Report key and display label.
    pub label: String,
    /// Accepted file names, compared case-insensitively.
    pub variants: Vec<String>,
    /// Remediation text shown when missing.
    #[serde(default)]
    pub suggestion: String,
    /// Illustration shown with the remediation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Template folder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateChecks {
    pub issue: TemplateFolder,
    pub merge_request: TemplateFolder,
    /// Extension a template file must end with.
    pub extension: String,
    /// Hint shown when either folder has no templates.
    pub tip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_image: Option<String>,
}

/// One template folder.
///
/// A blank `key` or `path` takes the built-in value for its slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateFolder {
    /// Report key.
    #[serde(default)]
    pub key: String,
    /// Repository-relative folder path.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A root configuration file such as `.gitignore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Exact file name; also the report key.
    pub name: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Editor folder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorChecks {
    /// Folder holding editor files.
    pub folder: String,
    pub files: Vec<EditorFile>,
    /// Optional content check on one of the files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linter: Option<LinterCheck>,
}

/// A file expected inside the editor folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorFile {
    /// Report key.
    pub key: String,
    /// Exact file name inside the folder.
    pub name: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Looks for a linter in an editor settings file.
///
/// Satisfied when `setting` equals `expected`, or when the serialized
/// `section` contains `name` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinterCheck {
    pub key: String,
    /// Settings file name inside the editor folder.
    pub file: String,
    pub setting: String,
    pub expected: String,
    pub section: String,
    pub name: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// License content check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseCheck {
    /// Files tried in order; the first one fetched is classified.
    pub candidates: Vec<String>,
    pub policy: LicensePolicy,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// How license content is judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LicensePolicy {
    /// Any fetchable license file is valid.
    Any,
    /// Content must contain one of the phrases after normalization.
    Phrases { family: String, phrases: Vec<String> },
}

/// Metadata remediation entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataChecks {
    pub description: Remedy,
    pub tags: Remedy,
}

/// Remediation text plus optional illustration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Remedy {
    #[serde(default)]
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Checklist {
    /// Parse a checklist from YAML. Missing sections take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut checklist: Self = serde_yaml::from_str(content)?;
        checklist.templates.fill_slot_defaults();
        Ok(checklist)
    }

    /// Serialize the checklist to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Every report key this checklist produces, in evaluation order.
    pub fn check_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .required_files
            .iter()
            .map(|f| f.label.clone())
            .collect();
        keys.push(self.templates.issue.key.clone());
        keys.push(self.templates.merge_request.key.clone());
        keys.extend(self.config_files.iter().map(|f| f.name.clone()));
        keys.extend(self.editor.files.iter().map(|f| f.key.clone()));
        if let Some(linter) = &self.editor.linter {
            keys.push(linter.key.clone());
        }
        keys.push(LICENSE_STATUS.to_string());
        keys.push(DESCRIPTION_PRESENT.to_string());
        keys.push(TAGS_PRESENT.to_string());
        keys
    }
}

impl TemplateChecks {
    /// Give each folder its built-in key and path where left blank.
    fn fill_slot_defaults(&mut self) {
        let defaults = Self::default();
        self.issue.fill_from(&defaults.issue);
        self.merge_request.fill_from(&defaults.merge_request);
    }
}

impl TemplateFolder {
    fn fill_from(&mut self, default: &TemplateFolder) {
        if self.key.trim().is_empty() {
            self.key = default.key.clone();
        }
        if self.path.trim().is_empty() {
            self.path = default.path.clone();
        }
    }
}

fn required(label: &str, variants: &[&str], suggestion: &str, image: &str) -> RequiredFile {
    RequiredFile {
        label: label.to_string(),
        variants: variants.iter().map(|v| v.to_string()).collect(),
        suggestion: suggestion.to_string(),
        image: Some(image.to_string()),
    }
}

fn config_file(name: &str, suggestion: &str) -> ConfigFile {
    ConfigFile {
        name: name.to_string(),
        suggestion: suggestion.to_string(),
        image: None,
    }
}

fn editor_file(key: &str, name: &str, suggestion: &str) -> EditorFile {
    EditorFile {
        key: key.to_string(),
        name: name.to_string(),
        suggestion: suggestion.to_string(),
        image: None,
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            required_files: vec![
                required(
                    "README.md",
                    &["README.md"],
                    "Add a `README.md` file at the root of the repository with setup and usage instructions.",
                    "assets/Readme.png",
                ),
                required(
                    "CONTRIBUTING.md",
                    &["CONTRIBUTING.md"],
                    "Add a `CONTRIBUTING.md` file to guide collaborators on how to contribute to the project.",
                    "assets/Contributing.png",
                ),
                required(
                    "CHANGELOG",
                    &["CHANGELOG", "CHANGELOG.md", "CHANGELOG.txt"],
                    "Maintain a `CHANGELOG.md` file to record changes across versions for better transparency.",
                    "assets/Changelog.png",
                ),
                required(
                    "LICENSE",
                    &["LICENSE", "LICENSE.md", "LICENSE.txt"],
                    "Include a `LICENSE` file to define the legal usage of your project.",
                    "assets/license-example.png",
                ),
            ],
            templates: TemplateChecks::default(),
            config_files: vec![
                config_file(
                    ".gitignore",
                    "Add a `.gitignore` so build output and local files stay out of the repository.",
                ),
                config_file(
                    "pyproject.toml",
                    "Describe the project's build and tooling in a `pyproject.toml`.",
                ),
            ],
            editor: EditorChecks::default(),
            license: LicenseCheck::default(),
            metadata: MetadataChecks::default(),
        }
    }
}

impl Default for TemplateChecks {
    fn default() -> Self {
        Self {
            issue: TemplateFolder {
                key: ISSUE_TEMPLATES.to_string(),
                path: ".gitlab/issue_templates".to_string(),
                suggestion: "Add issue templates under `.gitlab/issue_templates/` as `.md` files (e.g., `bug.md`).".to_string(),
                image: Some("assets/issue-template.png".to_string()),
            },
            merge_request: TemplateFolder {
                key: MERGE_REQUEST_TEMPLATES.to_string(),
                path: ".gitlab/merge_request_templates".to_string(),
                suggestion: "Add merge request templates under `.gitlab/merge_request_templates/` as `.md` files (e.g., `default.md`).".to_string(),
                image: Some("assets/mr-template.png".to_string()),
            },
            extension: ".md".to_string(),
            tip: "Issue and merge request templates live in `.gitlab/issue_templates/` and `.gitlab/merge_request_templates/` respectively.".to_string(),
            tip_image: Some("assets/files.png".to_string()),
        }
    }
}

impl Default for EditorChecks {
    fn default() -> Self {
        Self {
            folder: ".vscode".to_string(),
            files: vec![
                editor_file(
                    "vscode_settings",
                    "settings.json",
                    "Commit shared editor settings in `.vscode/settings.json`.",
                ),
                editor_file(
                    "vscode_extensions",
                    "extensions.json",
                    "Recommend editor extensions in `.vscode/extensions.json`.",
                ),
                editor_file(
                    "vscode_launch",
                    "launch.json",
                    "Share debug configurations in `.vscode/launch.json`.",
                ),
            ],
            linter: Some(LinterCheck {
                key: "vscode_linter".to_string(),
                file: "settings.json".to_string(),
                setting: "python.linting.provider".to_string(),
                expected: "ruff".to_string(),
                section: "[python]".to_string(),
                name: "ruff".to_string(),
                suggestion: "Enable the ruff linter in `.vscode/settings.json`.".to_string(),
                image: None,
            }),
        }
    }
}

impl Default for LicenseCheck {
    fn default() -> Self {
        Self {
            candidates: vec!["LICENSE".to_string(), "LICENSE.md".to_string()],
            policy: LicensePolicy::agpl_v3(),
            suggestion: "Use the GNU AGPLv3 license text in `LICENSE`.".to_string(),
            image: Some("assets/license-example.png".to_string()),
        }
    }
}

impl LicensePolicy {
    /// The GNU Affero General Public License, version 3.
    pub fn agpl_v3() -> Self {
        Self::Phrases {
            family: "AGPL-3.0".to_string(),
            phrases: vec![
                "GNU Affero General Public License Version 3".to_string(),
                "AGPL-3.0".to_string(),
                "AGPLv3".to_string(),
            ],
        }
    }
}

impl Default for MetadataChecks {
    fn default() -> Self {
        Self {
            description: Remedy {
                suggestion: "Provide a meaningful project description in GitLab settings."
                    .to_string(),
                image: Some("assets/project-description.png".to_string()),
            },
            tags: Remedy {
                suggestion: "Tag your project releases for version control and clarity."
                    .to_string(),
                image: Some("assets/Tags.png".to_string()),
            },
        }
    }
}
