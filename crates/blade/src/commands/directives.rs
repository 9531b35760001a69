//! `blade directives` command implementation.

use std::io::{self, Write};

use blade_directives::{Directive, Directives};
use clap::Args;

use super::{PipelineArgs, build_rewriter};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the directives command.
#[derive(Args)]
pub(crate) struct DirectivesArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,
}

impl DirectivesArgs {
    /// Execute the directives command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.pipeline.load_config()?;
        let rewriter = build_rewriter(&config);

        let mut stdout = io::stdout().lock();
        for line in listing(rewriter.directives()) {
            writeln!(stdout, "{line}")?;
        }

        Output::new().pipeline(rewriter.directives().len(), rewriter.patterns().len());

        Ok(())
    }
}

/// One line per directive: `@name`, or `@open ... @close` for pairs.
fn listing(directives: &Directives) -> Vec<String> {
    directives
        .iter()
        .map(|(name, directive)| match directive {
            Directive::Simple(_) => format!("@{name}"),
            Directive::Paired { close_name, .. } => format!("@{name} ... @{close_name}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blade_directives::Expander;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing() {
        let directives = Directives::new()
            .with("json", Expander::fixed(""))
            .with_paired("auth", "endauth", Expander::fixed(""), Expander::fixed(""));

        assert_eq!(listing(&directives), vec!["@auth ... @endauth", "@json"]);
    }

    #[test]
    fn test_listing_builtin() {
        let lines = listing(&Directives::builtin());
        assert!(lines.contains(&"@guest ... @endguest".to_owned()));
        assert!(lines.contains(&"@str_slug".to_owned()));
    }
}
