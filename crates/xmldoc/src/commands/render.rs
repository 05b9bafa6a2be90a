//! `xmldoc render` command implementation.

use std::path::PathBuf;

use clap::Args;
use xmldoc_config::{CliSettings, Config};
use xmldoc_members::{DocumentationFile, MemberId};
use xmldoc_renderer::{LineEnding, RenderOptions, render_all};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Documentation file (`.xml`) produced by the compiler.
    file: PathBuf,

    /// Member id, e.g. `T:Acme.Services.Widget`.
    member: String,

    /// Render only this section, without heading.
    #[arg(long)]
    section: Option<String>,

    /// Tag used for section headings (overrides config).
    #[arg(long)]
    heading_tag: Option<String>,

    /// CSS class for section headings (overrides config).
    #[arg(long)]
    heading_class: Option<String>,

    /// Disable pretty-printing.
    #[arg(long)]
    no_indent: bool,

    /// Omit the heading of the summary section.
    #[arg(long)]
    suppress_summary_heading: bool,

    /// Use CRLF line endings when pretty-printing.
    #[arg(long)]
    crlf: bool,

    /// Path to configuration file (default: auto-discover xmldoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the documentation file cannot be
    /// loaded, or the member is not documented.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            heading_tag: self.heading_tag,
            heading_class: self.heading_class,
            no_indentation: self.no_indent.then_some(true),
            suppress_summary_heading: self.suppress_summary_heading.then_some(true),
            line_ending: self.crlf.then_some(LineEnding::CrLf),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration file");
        }

        let file = DocumentationFile::load(&self.file)?;
        let options = config.render_options(self.section.as_deref());
        let html = render_member(&file, &self.member, &options)?;
        output.document(&html)?;
        Ok(())
    }
}

/// Render one member of a documentation file.
fn render_member(
    file: &DocumentationFile,
    member: &str,
    options: &RenderOptions,
) -> Result<String, CliError> {
    let id: MemberId = member.parse()?;
    let documentation = file
        .member(&id)
        .ok_or_else(|| CliError::MemberNotFound(member.to_owned()))?;
    if let Some(section) = &options.section
        && documentation.element(section).is_none()
    {
        return Err(CliError::SectionNotFound(section.clone()));
    }
    Ok(render_all(Some(&documentation), options))
}
