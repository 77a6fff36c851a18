//! `rst check` command implementation.

use std::path::PathBuf;

use clap::Args;
use rst_parser::Parser;

use crate::config::{CliSettings, Config, DirectivePolicy};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Input document.
    file: PathBuf,

    /// Exit with an error when the document has warnings.
    #[arg(long)]
    strict: bool,

    /// Policy for directives without a registered handler (overrides config).
    #[arg(long, value_enum)]
    unknown_directives: Option<DirectivePolicy>,

    /// Path to configuration file (default: auto-discover rst.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (parser debug logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, or with `--strict` when the
    /// document produced warnings.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            initial_header_level: None,
            unknown_directives: self.unknown_directives,
            standalone: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "configuration loaded");

        let source = super::read_source(&self.file)?;
        let mut parser = Parser::new().with_policy(config.render.unknown_directives.into());
        let result = parser.parse(&source);

        for warning in &result.warnings {
            output.warning(&format!("warning: {warning}"));
        }

        if result.warnings.is_empty() {
            output.success(&format!(
                "{}: {} nodes, no warnings",
                self.file.display(),
                result.document.len()
            ));
        } else {
            output.info(&format!(
                "{}: {} nodes, {} warnings",
                self.file.display(),
                result.document.len(),
                result.warnings.len()
            ));
            if self.strict {
                return Err(CliError::Validation(format!(
                    "{} warnings in {}",
                    result.warnings.len(),
                    self.file.display()
                )));
            }
        }

        Ok(())
    }
}
