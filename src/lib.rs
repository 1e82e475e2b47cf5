pub mod config;
pub mod error;
pub mod generator;
pub mod guard;
pub mod layout;
pub mod logging;
pub mod models;
pub mod report;
pub mod templates;
pub mod verifier;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{Result, ScaffoldError};
pub use generator::{Generator, materialize_folders, render_and_write};
pub use guard::{AssumeYes, GuardState, OverwritePrompt, ReaderPrompt, confirm_overwrite};
pub use models::{FolderRecord, GenerationReport, NamePolicy, ProjectName, RenderContext, WrittenFile};
pub use verifier::{
    StructureReport, VerificationReport, check_config, count_credential_files, verify_project,
    verify_structure,
};
