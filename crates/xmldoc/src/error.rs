//! CLI error types.

use xmldoc_config::ConfigError;
use xmldoc_members::MembersError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Members(#[from] MembersError),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),
}
