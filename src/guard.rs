//! Pre-flight check before writing into an existing project directory.

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::Result;

/// Where the overwrite check stands for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    NoTarget,
    TargetExistsUnconfirmed,
    TargetExistsConfirmed,
    Aborted,
}

impl GuardState {
    /// Initial state from a filesystem probe.
    pub fn probe(base_path: &Path) -> Self {
        if base_path.exists() {
            GuardState::TargetExistsUnconfirmed
        } else {
            GuardState::NoTarget
        }
    }

    pub fn may_proceed(self) -> bool {
        matches!(self, GuardState::NoTarget | GuardState::TargetExistsConfirmed)
    }
}

/// Asks whether an existing project directory may be overwritten.
pub trait OverwritePrompt {
    fn confirm(&mut self, base_path: &Path) -> Result<bool>;
}

/// Interactive `(y/N)` prompt over any reader/writer pair.
pub struct ReaderPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ReaderPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for ReaderPrompt<R, W> {
    fn confirm(&mut self, base_path: &Path) -> Result<bool> {
        let dir_name = base_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_path.display().to_string());

        writeln!(self.output, "⚠️  El directorio '{}' ya existe.", dir_name)?;
        write!(self.output, "¿Deseas sobrescribir el contenido? (y/N): ")?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF reads zero bytes and counts as "no"
        self.input.read_line(&mut answer)?;

        // Only the line ending is dropped, " y" declines
        Ok(answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y"))
    }
}

/// Confirms without asking, for `--yes` and unattended runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl OverwritePrompt for AssumeYes {
    fn confirm(&mut self, _base_path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Runs the guard state machine and returns the terminal state.
#[instrument(skip(prompt))]
pub fn run_guard(base_path: &Path, prompt: &mut dyn OverwritePrompt) -> Result<GuardState> {
    let state = GuardState::probe(base_path);
    debug!(?state, "Probed target directory");

    let state = match state {
        GuardState::TargetExistsUnconfirmed => {
            if prompt.confirm(base_path)? {
                GuardState::TargetExistsConfirmed
            } else {
                info!("Overwrite declined");
                GuardState::Aborted
            }
        }
        other => other,
    };

    Ok(state)
}

/// True when generation may continue into `base_path`. Never prompts for
/// a missing target.
pub fn confirm_overwrite(base_path: &Path, prompt: &mut dyn OverwritePrompt) -> Result<bool> {
    Ok(run_guard(base_path, prompt)?.may_proceed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct CountingPrompt {
        answer: bool,
        calls: usize,
    }

    impl OverwritePrompt for CountingPrompt {
        fn confirm(&mut self, _base_path: &Path) -> Result<bool> {
            self.calls += 1;
            Ok(self.answer)
        }
    }

    #[test]
    fn test_missing_target_never_prompts() {
        let temp_dir = TempDir::new().unwrap();
        let mut prompt = CountingPrompt { answer: false, calls: 0 };

        let proceed = confirm_overwrite(&temp_dir.path().join("nuevo"), &mut prompt).unwrap();

        assert!(proceed);
        assert_eq!(prompt.calls, 0);
    }

    #[test]
    fn test_existing_target_follows_answer() {
        let temp_dir = TempDir::new().unwrap();

        let mut yes = CountingPrompt { answer: true, calls: 0 };
        assert_eq!(
            run_guard(temp_dir.path(), &mut yes).unwrap(),
            GuardState::TargetExistsConfirmed
        );
        assert_eq!(yes.calls, 1);

        let mut no = CountingPrompt { answer: false, calls: 0 };
        assert_eq!(run_guard(temp_dir.path(), &mut no).unwrap(), GuardState::Aborted);
        assert!(!confirm_overwrite(temp_dir.path(), &mut no).unwrap());
    }

    #[test]
    fn test_reader_prompt_answers() {
        let temp_dir = TempDir::new().unwrap();
        let cases = [
            ("y\n", true),
            ("Y\n", true),
            ("y\r\n", true),
            ("  y  \n", false),
            ("y \n", false),
            ("yes\n", false),
            ("n\n", false),
            ("\n", false),
            ("", false),
        ];

        for (input, expected) in cases {
            let mut output = Vec::new();
            let mut prompt = ReaderPrompt::new(Cursor::new(input), &mut output);
            assert_eq!(prompt.confirm(temp_dir.path()).unwrap(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_reader_prompt_message() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("Amazonia");
        let mut output = Vec::new();

        ReaderPrompt::new(Cursor::new("n\n"), &mut output)
            .confirm(&target)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("El directorio 'Amazonia' ya existe."));
        assert!(text.ends_with("(y/N): "));
    }
}
