//! Colored terminal output for command results.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Status line writer. Rewritten templates and listings go to stdout; these
/// lines go to stderr so they never mix with generated code.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }

    /// Report templates written into an output directory (green).
    pub(crate) fn rewrote(&self, count: usize, dir: &Path) {
        let line = format!("Rewrote {count} template(s) into {}", dir.display());
        let _ = self.term.write_line(&self.green.apply_to(line).to_string());
    }

    /// Report the size of the active pipeline.
    pub(crate) fn pipeline(&self, directives: usize, passes: usize) {
        let _ = self.term.write_line(&format!(
            "{directives} directive(s), {passes} pattern pass(es)"
        ));
    }

    /// Report a failed command (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        let _ = self
            .term
            .write_line(&self.red.apply_to(format!("Error: {err}")).to_string());
    }
}
