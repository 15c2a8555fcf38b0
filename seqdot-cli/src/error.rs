//! Error handling for the seqdot CLI

use seqdot_core::filter::FilterError;
use seqdot_core::io::InputError;
use seqdot_core::pipeline::PipelineError;
use seqdot_render::{ExportError, RenderError};
use thiserror::Error;

/// Main error type for seqdot CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid argument: {message}")]
    Usage { message: String },

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage { message: message.into() }
    }

    /// Process exit status for this error
    ///
    /// 1 usage, config or input; 2 output unwritable; 3 filter source
    /// unavailable; 4 filter dimension mismatch.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pipeline(PipelineError::Filter { source, .. }) => match source {
                FilterError::DimensionMismatch { .. } => 4,
                FilterError::Input(InputError::Unavailable { .. }) => 3,
                _ => 1,
            },
            CliError::Export(ExportError::Render(_)) => 1,
            CliError::Export(_) => 2,
            _ => 1,
        }
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Export(ExportError::Render(err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::Pipeline(PipelineError::Filter { source: FilterError::DimensionMismatch { .. }, .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • The x weight file needs one line per symbol of the first sequence\n\
                 • The y weight file needs one line per symbol of the second sequence",
            );
        }

        CliError::Pipeline(PipelineError::Filter { source: FilterError::Input(InputError::Unavailable { path, .. }), .. }) => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the weight file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::Input(InputError::Unavailable { .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Sequences are read from files only with --fasta\n\
                 • Compressed inputs need a .gz extension",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your seqdot.toml configuration file\n\
                 • Colors are written as #RRGGBB and palette ranges lie inside [0, 1]",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit with its status code
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(error.exit_code());
}
