//! The generate task: language check, generation, and writing the file.

use std::path::{Path, PathBuf};

use crate::csharp::SUPPORTED_LANGUAGE;
use crate::diagnostic::{self, Diagnostic};
use crate::generator::{ConstantGenerator, GeneratorConfig};
use crate::item::Item;

/// Errors that make the generate task fail.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The project language is not C#. Checked before any item is validated.
    #[error("{}", language_diagnostic(.received))]
    UnsupportedLanguage { received: String },

    /// At least one item failed validation.
    #[error("constant generation failed with {} error(s)", error_count(.diagnostics))]
    Validation { diagnostics: Vec<Diagnostic> },

    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// The diagnostics that explain this failure.
    ///
    /// A language mismatch is reported as a single BCG004 error.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::UnsupportedLanguage { received } => vec![language_diagnostic(received)],
            Self::Validation { diagnostics } => diagnostics.clone(),
            Self::CreateDir { .. } | Self::Write { .. } => Vec::new(),
        }
    }
}

fn language_diagnostic(received: &str) -> Diagnostic {
    Diagnostic::error(
        diagnostic::UNSUPPORTED_LANGUAGE,
        format!(
            "Unsupported project language '{received}'; \
             only '{SUPPORTED_LANGUAGE}' is supported."
        ),
    )
}

fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}

/// Checks that `language` is the one language the generator supports.
pub fn check_language(language: &str) -> Result<(), TaskError> {
    if language == SUPPORTED_LANGUAGE {
        Ok(())
    } else {
        Err(TaskError::UnsupportedLanguage {
            received: language.to_owned(),
        })
    }
}

/// Result of a successful task run.
#[derive(Debug)]
pub struct TaskOutput {
    /// The file that was written.
    pub path: PathBuf,

    /// Warnings reported during generation.
    pub diagnostics: Vec<Diagnostic>,

    /// Number of constants emitted.
    pub constants: usize,
}

/// Generates the constants file and writes it to disk.
#[derive(Debug, Clone)]
pub struct GenerateTask {
    /// Project language marker; must be `C#`.
    pub language: String,

    /// Where the generated file is written.
    pub output_path: PathBuf,

    /// Namespace of the generated class. Empty for the global namespace.
    pub namespace: String,

    /// Name of the generated class.
    pub type_name: String,
}

impl GenerateTask {
    /// Runs the task over `items`.
    ///
    /// Nothing is written unless every item passed validation.
    pub fn execute(&self, items: &[Item]) -> Result<TaskOutput, TaskError> {
        check_language(&self.language)?;

        let generator = ConstantGenerator::new(GeneratorConfig {
            namespace: self.namespace.clone(),
            type_name: self.type_name.clone(),
        });
        let generation = generator.generate(items);
        let Some(text) = generation.text else {
            return Err(TaskError::Validation {
                diagnostics: generation.diagnostics,
            });
        };

        write_output(&self.output_path, &text)?;
        tracing::info!(
            path = %self.output_path.display(),
            constants = generation.constants,
            "generated {}",
            self.type_name
        );

        Ok(TaskOutput {
            path: self.output_path.clone(),
            diagnostics: generation.diagnostics,
            constants: generation.constants,
        })
    }
}

/// Writes `text` as UTF-8 (no byte-order mark), creating parent directories.
fn write_output(path: &Path, text: &str) -> Result<(), TaskError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| TaskError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, text.as_bytes()).map_err(|source| TaskError::Write {
        path: path.to_path_buf(),
        source,
    })
}
