//! Project generation: folder materialization and starter file rendering.
//!
//! Every filesystem step is awaited in order, so per-path reporting follows
//! the layout and template tables exactly.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, instrument};

use crate::guard::{self, GuardState, OverwritePrompt};
use crate::layout;
use crate::models::{FolderRecord, GenerationReport, NamePolicy, ProjectName, RenderContext, WrittenFile};
use crate::templates::{FILE_TEMPLATES, TemplateVars};
use crate::{Result, ScaffoldError};

/// Ensures every folder of the layout exists under `base_path`.
///
/// All folders are attempted even after a failure; the first failure is
/// returned once the batch is done.
#[instrument(skip(ctx), fields(project = %ctx.project_name))]
pub async fn materialize_folders(base_path: &Path, ctx: &RenderContext) -> Result<Vec<FolderRecord>> {
    let mut records = Vec::new();
    let mut first_failure: Option<ScaffoldError> = None;

    for relative in layout::folder_paths(ctx) {
        let full_path = base_path.join(&relative);
        let existed = fs::metadata(&full_path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        match fs::create_dir_all(&full_path).await {
            Ok(()) => {
                debug!(path = %relative.display(), created = !existed, "Folder ready");
                records.push(FolderRecord {
                    path: relative,
                    created: !existed,
                });
            }
            Err(e) => {
                error!(path = %full_path.display(), error = %e, "Failed to create folder");
                if first_failure.is_none() {
                    first_failure = Some(ScaffoldError::filesystem(full_path, e));
                }
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(records),
    }
}

/// Writes a single template file, creating its parent directory first.
pub async fn write_template_file(path: &Path, content: &str) -> Result<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::filesystem(parent, e))?;
    }
    fs::write(path, content.as_bytes())
        .await
        .map_err(|e| ScaffoldError::filesystem(path, e))?;
    Ok(content.len())
}

/// Renders every starter file and overwrites it under `base_path`.
///
/// Stops at the first file that cannot be written.
#[instrument(skip(ctx), fields(project = %ctx.project_name))]
pub async fn render_and_write(base_path: &Path, ctx: &RenderContext) -> Result<Vec<WrittenFile>> {
    let vars = TemplateVars::from_context(ctx);
    let mut written = Vec::with_capacity(FILE_TEMPLATES.len());

    for template in FILE_TEMPLATES {
        let content = template.render(ctx, &vars)?;
        let bytes_written = write_template_file(&base_path.join(template.path), &content).await?;
        debug!(path = template.path, bytes_written, "File written");
        written.push(WrittenFile {
            path: PathBuf::from(template.path),
            bytes_written,
        });
    }

    Ok(written)
}

/// Creates projects as `<parent_dir>/<project name>`.
#[derive(Debug, Clone)]
pub struct Generator {
    parent_dir: PathBuf,
    policy: NamePolicy,
}

impl Generator {
    pub fn new(parent_dir: impl Into<PathBuf>, policy: NamePolicy) -> Self {
        Self {
            parent_dir: parent_dir.into(),
            policy,
        }
    }

    /// Generator rooted at the current working directory.
    pub fn in_current_dir(policy: NamePolicy) -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?, policy))
    }

    pub fn project_path(&self, name: &ProjectName) -> PathBuf {
        self.parent_dir.join(name.as_str())
    }

    /// Validates the name, runs the overwrite guard and materializes the
    /// project. Returns `UserAborted` untouched when the overwrite is
    /// declined.
    #[instrument(skip(self, prompt, timestamp))]
    pub async fn generate(
        &self,
        raw_name: &str,
        prompt: &mut dyn OverwritePrompt,
        timestamp: DateTime<Local>,
    ) -> Result<GenerationReport> {
        let project_name = ProjectName::parse(raw_name, self.policy)?;
        let base_path = self.project_path(&project_name);

        let state = guard::run_guard(&base_path, prompt)?;
        if state == GuardState::Aborted {
            return Err(ScaffoldError::UserAborted);
        }

        info!(project = %project_name, path = %base_path.display(), "Generating project");
        let ctx = RenderContext::new(project_name, timestamp);

        let folders = materialize_folders(&base_path, &ctx).await?;
        info!(count = folders.len(), "Folders materialized");

        let files = render_and_write(&base_path, &ctx).await?;
        info!(count = files.len(), "Starter files written");

        Ok(GenerationReport {
            project_name: ctx.project_name,
            base_path,
            folders,
            files,
        })
    }
}
