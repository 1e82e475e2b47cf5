//! Directory layout of a generated project.
//!
//! `FOLDER_SPEC` is the authoritative folder table. The verifier's critical
//! path list is derived from the entries tagged `critical`, so the two can
//! not drift apart.

use std::path::PathBuf;

use crate::models::{ProjectName, RenderContext};
use crate::templates::{TemplateVars, render};

/// Relative location of the project configuration document.
pub const CONFIG_FILE: &str = "config/config.json";

/// Directory whose entries are counted as credential files.
pub const CREDENTIALS_DIR: &str = "config/credentials";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderEntry {
    pub template: &'static str,
    /// Checked by the structure verifier.
    pub critical: bool,
}

const fn folder(template: &'static str) -> FolderEntry {
    FolderEntry {
        template,
        critical: false,
    }
}

const fn critical(template: &'static str) -> FolderEntry {
    FolderEntry {
        template,
        critical: true,
    }
}

pub static FOLDER_SPEC: &[FolderEntry] = &[
    // Data; raw_* is never modified after ingest
    critical("data/raw_{{PROJECT_NAME}}/vectorial"),
    critical("data/raw_{{PROJECT_NAME}}/raster"),
    critical("data/raw_{{PROJECT_NAME}}/tabular"),
    critical("data/processed_{{PROJECT_NAME}}/vectorial_procesada"),
    folder("data/processed_{{PROJECT_NAME}}/raster_procesada"),
    folder("data/processed_{{PROJECT_NAME}}/tabular_procesada"),
    folder("data/temp_{{PROJECT_NAME}}"),
    critical("outputs/{{PROJECT_NAME}}_análisis_geo"),
    folder("outputs/{{PROJECT_NAME}}_mapas"),
    folder("outputs/{{PROJECT_NAME}}_figuras"),
    folder("outputs/{{PROJECT_NAME}}_statistics"),
    critical("scripts"),
    folder("notebooks"),
    critical("documentation_MIAs/{{PROJECT_NAME}}_sop"),
    folder("documentation_MIAs/{{PROJECT_NAME}}_technical"),
    folder("documentation_MIAs/{{PROJECT_NAME}}_metadata"),
    folder("outputs/reports_{{PROJECT_NAME}}/{{YEAR}}"),
    folder("git_config"),
    folder("environments/docker"),
    folder("environments/conda"),
    folder("environments/virtualenv"),
];

/// Every folder of the layout resolved for one generation run, in table order.
pub fn folder_paths(ctx: &RenderContext) -> Vec<PathBuf> {
    let vars = TemplateVars::for_layout(&ctx.project_name, Some(ctx.year()));
    FOLDER_SPEC
        .iter()
        .map(|entry| PathBuf::from(render(entry.template, &vars)))
        .collect()
}

/// Critical folders only, without the config file.
pub fn critical_folders(name: &ProjectName) -> Vec<PathBuf> {
    let vars = TemplateVars::for_layout(name, None);
    FOLDER_SPEC
        .iter()
        .filter(|entry| entry.critical)
        .map(|entry| PathBuf::from(render(entry.template, &vars)))
        .collect()
}

/// The full critical path list: tagged folders followed by the config file.
pub fn critical_paths(name: &ProjectName) -> Vec<PathBuf> {
    let mut paths = critical_folders(name);
    paths.push(PathBuf::from(CONFIG_FILE));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamePolicy;
    use chrono::{Local, TimeZone};

    fn ctx(name: &str) -> RenderContext {
        let name = ProjectName::parse(name, NamePolicy::Permissive).unwrap();
        RenderContext::new(name, Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_folder_paths_are_resolved_in_order() {
        let paths = folder_paths(&ctx("Amazonia"));

        assert_eq!(paths.len(), FOLDER_SPEC.len());
        assert_eq!(paths[0], PathBuf::from("data/raw_Amazonia/vectorial"));
        assert_eq!(paths[7], PathBuf::from("outputs/Amazonia_análisis_geo"));
        assert!(paths.contains(&PathBuf::from("outputs/reports_Amazonia/2024")));
        assert_eq!(paths.last(), Some(&PathBuf::from("environments/virtualenv")));

        for path in &paths {
            assert!(!path.to_string_lossy().contains("{{"), "unresolved: {}", path.display());
        }
    }

    #[test]
    fn test_critical_entries_do_not_depend_on_year() {
        for entry in FOLDER_SPEC.iter().filter(|e| e.critical) {
            assert!(!entry.template.contains("{{YEAR}}"));
        }
    }

    #[test]
    fn test_critical_paths_are_subset_of_folder_spec() {
        let context = ctx("Amazonia");
        let all = folder_paths(&context);
        let critical = critical_paths(&context.project_name);

        assert_eq!(critical.last(), Some(&PathBuf::from(CONFIG_FILE)));
        for path in &critical[..critical.len() - 1] {
            assert!(all.contains(path), "{} missing from folder spec", path.display());
        }
    }
}
