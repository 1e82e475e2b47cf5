use chrono::{DateTime, Datelike, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::{Result, ScaffoldError};

const MAX_STRICT_NAME_LEN: usize = 128;

/// How much checking a project name gets before it becomes a path segment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Only empty and whitespace-only names are rejected.
    #[default]
    Permissive,
    /// Names must also be a single portable path segment.
    Strict,
}

impl std::str::FromStr for NamePolicy {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(NamePolicy::Permissive),
            "strict" => Ok(NamePolicy::Strict),
            other => Err(ScaffoldError::Configuration(format!(
                "Unknown name policy: {}",
                other
            ))),
        }
    }
}

/// Project name as supplied by the caller, used verbatim for paths and content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str, policy: NamePolicy) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(ScaffoldError::InvalidInput(
                "project name cannot be empty".to_string(),
            ));
        }

        if policy == NamePolicy::Strict {
            validate_strict(raw)?;
        }

        Ok(Self(raw.to_string()))
    }

    /// Name for a directory that has none of its own, such as `/`: the path
    /// as displayed, or `.` when that is blank too.
    pub fn for_unnamed_dir(dir: &Path) -> Self {
        let shown = dir.display().to_string();
        if shown.trim().is_empty() {
            Self(".".to_string())
        } else {
            Self(shown)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn strict_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("strict name pattern is valid")
    })
}

fn validate_strict(raw: &str) -> Result<()> {
    if raw.len() > MAX_STRICT_NAME_LEN {
        return Err(ScaffoldError::InvalidInput(format!(
            "project name exceeds {} characters",
            MAX_STRICT_NAME_LEN
        )));
    }
    if raw == "." || raw == ".." {
        return Err(ScaffoldError::InvalidInput(format!(
            "'{}' is not a usable project name",
            raw
        )));
    }
    if !strict_name_pattern().is_match(raw) {
        return Err(ScaffoldError::InvalidInput(format!(
            "'{}' must start with a letter or digit and contain only letters, digits, '_', '-' or '.'",
            raw
        )));
    }
    Ok(())
}

/// Inputs shared by every rendered path and template in one generation run.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub project_name: ProjectName,
    pub timestamp: DateTime<Local>,
}

impl RenderContext {
    pub fn new(project_name: ProjectName, timestamp: DateTime<Local>) -> Self {
        Self {
            project_name,
            timestamp,
        }
    }

    pub fn now(project_name: ProjectName) -> Self {
        Self::new(project_name, Local::now())
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// ISO-8601 creation stamp written into `config/config.json`.
    pub fn created_date(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// Human readable creation stamp used in the README.
    pub fn created_at(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// One directory handled by the folder materializer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FolderRecord {
    pub path: PathBuf,
    /// False when the directory was already present.
    pub created: bool,
}

/// One starter file written by the renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerationReport {
    pub project_name: ProjectName,
    pub base_path: PathBuf,
    pub folders: Vec<FolderRecord>,
    pub files: Vec<WrittenFile>,
}
