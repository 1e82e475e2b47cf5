//! Read-only structure verification of a generated project.
//!
//! Nothing here mutates the filesystem. A missing path is a finding in the
//! report, never an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::layout::{self, CONFIG_FILE, CREDENTIALS_DIR};
use crate::models::{NamePolicy, ProjectName};
use crate::templates::ProjectConfigDocument;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathCheck {
    pub path: PathBuf,
    pub exists: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StructureReport {
    pub all_ok: bool,
    pub entries: Vec<PathCheck>,
}

impl StructureReport {
    pub fn missing(&self) -> impl Iterator<Item = &PathCheck> {
        self.entries.iter().filter(|entry| !entry.exists)
    }
}

/// Structure, config and credential findings for one project directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub project_name: ProjectName,
    pub base_path: PathBuf,
    pub structure: StructureReport,
    pub config_present: bool,
    /// `None` when the credentials directory does not exist.
    pub credential_files: Option<usize>,
}

impl VerificationReport {
    pub fn all_ok(&self) -> bool {
        self.structure.all_ok
    }

    /// Process exit code. Incomplete structures only fail the process when
    /// `fail_on_missing` is set.
    pub fn exit_code(&self, fail_on_missing: bool) -> i32 {
        if fail_on_missing && !self.all_ok() { 1 } else { 0 }
    }
}

/// Probes each critical path under `base_path`, in order.
#[instrument(skip(critical_paths))]
pub fn verify_structure(base_path: &Path, critical_paths: &[PathBuf]) -> StructureReport {
    let entries: Vec<PathCheck> = critical_paths
        .iter()
        .map(|relative| {
            let exists = base_path.join(relative).exists();
            debug!(path = %relative.display(), exists, "Checked path");
            PathCheck {
                path: relative.clone(),
                exists,
            }
        })
        .collect();

    let all_ok = entries.iter().all(|entry| entry.exists);
    StructureReport { all_ok, entries }
}

pub fn check_config(base_path: &Path) -> bool {
    base_path.join(CONFIG_FILE).exists()
}

/// Number of entries in the credentials directory, 0 when it is absent.
pub fn count_credential_files(base_path: &Path) -> usize {
    credential_entries(base_path).unwrap_or(0)
}

fn credential_entries(base_path: &Path) -> Option<usize> {
    let dir = base_path.join(CREDENTIALS_DIR);
    if !dir.is_dir() {
        return None;
    }
    let count = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .count();
    Some(count)
}

/// Project name for an argument-free run inside `base_path`.
///
/// Tries `project_info.name` from `config/config.json`, then the directory
/// name, skipping blank candidates. A directory without a usable name (the
/// filesystem root) is named after its path, so verification always runs.
pub fn resolve_project_name(base_path: &Path) -> ProjectName {
    config_project_name(base_path)
        .or_else(|| {
            base_path
                .file_name()
                .and_then(|name| permissive(&name.to_string_lossy()))
        })
        .unwrap_or_else(|| {
            warn!(path = %base_path.display(), "No project name found, using the path");
            ProjectName::for_unnamed_dir(base_path)
        })
}

fn config_project_name(base_path: &Path) -> Option<ProjectName> {
    let content = std::fs::read_to_string(base_path.join(CONFIG_FILE)).ok()?;
    match ProjectConfigDocument::from_json(&content) {
        Ok(doc) => permissive(&doc.project_info.name),
        Err(e) => {
            warn!(error = %e, "Unreadable project config, falling back to directory name");
            None
        }
    }
}

fn permissive(raw: &str) -> Option<ProjectName> {
    ProjectName::parse(raw, NamePolicy::Permissive).ok()
}

/// Runs every read-only check for `name` under `base_path`.
#[instrument]
pub fn verify_project(base_path: &Path, name: &ProjectName) -> VerificationReport {
    let critical = layout::critical_paths(name);
    let structure = verify_structure(base_path, &critical);

    VerificationReport {
        project_name: name.clone(),
        base_path: base_path.to_path_buf(),
        structure,
        config_present: check_config(base_path),
        credential_files: credential_entries(base_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RenderContext;
    use crate::test_helpers::TestProject;

    fn name(raw: &str) -> ProjectName {
        ProjectName::parse(raw, NamePolicy::Permissive).unwrap()
    }

    #[test]
    fn test_empty_directory_reports_everything_missing() {
        let project = TestProject::new().unwrap();
        let critical = layout::critical_paths(&name("Demo"));

        let report = verify_structure(project.root(), &critical);

        assert!(!report.all_ok);
        assert_eq!(report.entries.len(), critical.len());
        assert!(report.entries.iter().all(|entry| !entry.exists));
        assert_eq!(report.missing().count(), critical.len());
    }

    #[test]
    fn test_partial_structure() {
        let project = TestProject::new().unwrap();
        project.add_dir("scripts").unwrap();
        let critical = vec![PathBuf::from("scripts"), PathBuf::from("notebooks")];

        let report = verify_structure(project.root(), &critical);

        assert!(!report.all_ok);
        assert_eq!(
            report.entries,
            vec![
                PathCheck { path: PathBuf::from("scripts"), exists: true },
                PathCheck { path: PathBuf::from("notebooks"), exists: false },
            ]
        );
    }

    #[test]
    fn test_empty_list_is_ok() {
        let project = TestProject::new().unwrap();
        assert!(verify_structure(project.root(), &[]).all_ok);
    }

    #[test]
    fn test_credential_count() {
        let project = TestProject::new().unwrap();
        assert_eq!(count_credential_files(project.root()), 0);

        project.add_dir("config/credentials").unwrap();
        assert_eq!(count_credential_files(project.root()), 0);

        project.add_file("config/credentials/gee_service_account.json", "{}").unwrap();
        project.add_file("config/credentials/arcgis.key", "secret").unwrap();
        project.add_file("config/credentials/nested/ignored.json", "{}").unwrap();
        // Two files plus the nested directory itself
        assert_eq!(count_credential_files(project.root()), 3);
    }

    #[test]
    fn test_check_config() {
        let project = TestProject::new().unwrap();
        assert!(!check_config(project.root()));

        project.add_file("config/config.json", "{}").unwrap();
        assert!(check_config(project.root()));
    }

    #[test]
    fn test_resolve_project_name_falls_back_to_dir() {
        let project = TestProject::new().unwrap();
        project.add_dir("Amazonia").unwrap();
        project.add_file("Amazonia/config/config.json", "not json").unwrap();

        let resolved = resolve_project_name(&project.path("Amazonia"));
        assert_eq!(resolved.as_str(), "Amazonia");
    }

    #[test]
    fn test_blank_config_name_falls_back_to_dir() {
        let project = TestProject::new().unwrap();
        let mut doc = ProjectConfigDocument::for_context(&RenderContext::now(name("Amazonia")));
        doc.project_info.name = "   ".to_string();
        project
            .add_file("  x/config/config.json", &doc.to_json().unwrap())
            .unwrap();

        let resolved = resolve_project_name(&project.path("  x"));
        assert_eq!(resolved.as_str(), "  x");
        assert_eq!(verify_project(&project.path("  x"), &resolved).exit_code(false), 0);
    }

    #[test]
    fn test_filesystem_root_still_verifies() {
        let root = Path::new("/");
        let resolved = resolve_project_name(root);
        assert_eq!(resolved.as_str(), "/");

        let report = verify_project(root, &resolved);
        assert_eq!(report.structure.entries.len(), layout::critical_paths(&resolved).len());
        assert_eq!(report.exit_code(false), 0);
    }

    #[test]
    fn test_verify_project_without_credentials_dir() {
        let project = TestProject::new().unwrap();
        let report = verify_project(project.root(), &name("Demo"));

        assert!(!report.all_ok());
        assert!(!report.config_present);
        assert_eq!(report.credential_files, None);
        assert_eq!(report.exit_code(false), 0);
        assert_eq!(report.exit_code(true), 1);
    }
}
