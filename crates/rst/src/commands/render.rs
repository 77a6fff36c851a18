//! `rst render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rst_parser::Parser;
use rst_renderer::{DocumentRenderer, HtmlBackend, escape_html};

use crate::config::{CliSettings, Config, DirectivePolicy};
use crate::error::CliError;
use crate::output::Output;

/// Output format for the render command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum EmitFormat {
    /// Rendered HTML.
    Html,
    /// JSON dump of the parsed node tree.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input document.
    file: PathBuf,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = EmitFormat::Html)]
    emit: EmitFormat,

    /// Wrap the output in a minimal HTML5 page.
    #[arg(long)]
    standalone: bool,

    /// Do not wrap the output, even if the config says so.
    #[arg(long, conflicts_with = "standalone")]
    no_standalone: bool,

    /// Heading level a level-1 title renders as (overrides config).
    #[arg(long)]
    initial_header_level: Option<usize>,

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

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading, or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            initial_header_level: self.initial_header_level,
            unknown_directives: self.unknown_directives,
            standalone: self.resolve_standalone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "configuration loaded");

        let source = super::read_source(&self.file)?;
        let mut parser = Parser::new().with_policy(config.render.unknown_directives.into());
        let result = parser.parse(&source);
        for warning in &result.warnings {
            output.warning(&format!("warning: {warning}"));
        }

        let rendered = match self.emit {
            EmitFormat::Json => {
                let mut json = serde_json::to_string_pretty(&result.document)?;
                json.push('\n');
                json
            }
            EmitFormat::Html => {
                let page = DocumentRenderer::<HtmlBackend>::new()
                    .with_initial_header_level(config.render.initial_header_level)
                    .render(&result.document);
                if config.render.standalone {
                    standalone_page(page.title.as_deref(), &page.html)
                } else {
                    page.html
                }
            }
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
            }
        }

        Ok(())
    }

    /// Resolve the standalone override from the flag pair.
    fn resolve_standalone(&self) -> Option<bool> {
        if self.standalone {
            Some(true)
        } else if self.no_standalone {
            Some(false)
        } else {
            None
        }
    }
}

/// Wrap rendered HTML in a minimal standalone page.
fn standalone_page(title: Option<&str>, body: &str) -> String {
    let title = escape_html(title.unwrap_or("Document"));
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}
