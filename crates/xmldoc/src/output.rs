//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Documents go to stdout, everything else to stderr.
pub(crate) struct Output {
    out: Term,
    term: Term,
    dim: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            term: Term::stderr(),
            dim: Style::new().dim(),
            red: Style::new().red(),
        }
    }

    /// Write a line of program output to stdout.
    pub(crate) fn document(&self, text: &str) -> std::io::Result<()> {
        self.out.write_line(text)
    }

    /// Print an informational message (dimmed).
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(&self.dim.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}
