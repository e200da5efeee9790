//! Options of the `generate` and `check` commands.

use std::path::PathBuf;

use resgen_diagnostic::{ColorMode, DiagnosticConfig};

use crate::DriverError;

/// How diagnostics are written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, with source snippets.
    #[default]
    Terminal,
    /// One JSON array for the whole run.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "terminal" | "human" => Some(OutputFormat::Terminal),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Source files and directories to read.
    pub inputs: Vec<PathBuf>,
    /// Where `{Name}.g.cs` files are written.
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub parallel: bool,
    /// Errors shown before the rest are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Print generated sources instead of writing files.
    pub stdout: bool,
    /// Compare generated sources against `out_dir` without writing.
    pub check: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            inputs: Vec::new(),
            out_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            color: ColorMode::default(),
            parallel: true,
            error_limit: DiagnosticConfig::default().error_limit,
            stdout: false,
            check: false,
        }
    }
}

impl GenerateOptions {
    /// Parse command arguments; everything not starting with `-` is an input.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut options = GenerateOptions::default();

        for arg in args {
            if let Some(dir) = arg.strip_prefix("--out-dir=") {
                options.out_dir = PathBuf::from(dir);
            } else if let Some(format) = arg.strip_prefix("--format=") {
                options.format =
                    OutputFormat::parse(format).ok_or_else(|| DriverError::InvalidValue {
                        option: "--format",
                        value: format.to_string(),
                    })?;
            } else if let Some(color) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(color).ok_or_else(|| DriverError::InvalidValue {
                    option: "--color",
                    value: color.to_string(),
                })?;
            } else if let Some(limit) = arg.strip_prefix("--error-limit=") {
                options.error_limit = limit.parse().map_err(|_| DriverError::InvalidValue {
                    option: "--error-limit",
                    value: limit.to_string(),
                })?;
            } else if arg == "--no-parallel" {
                options.parallel = false;
            } else if arg == "--stdout" {
                options.stdout = true;
            } else if arg == "--check" {
                options.check = true;
            } else if arg.starts_with('-') {
                return Err(DriverError::UnknownOption(arg.clone()));
            } else {
                options.inputs.push(PathBuf::from(arg));
            }
        }

        if options.stdout && options.check {
            return Err(DriverError::ConflictingOptions("--stdout", "--check"));
        }
        if options.inputs.is_empty() {
            return Err(DriverError::MissingArgument("input files"));
        }
        Ok(options)
    }

    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
