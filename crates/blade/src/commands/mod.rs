//! CLI command implementations.

mod directives;
mod rewrite;

use std::path::PathBuf;

use blade_config::{CliSettings, Config};
use blade_directives::{Directives, Expander, TagRewriter};
use clap::Args;

use crate::error::CliError;

pub(crate) use directives::DirectivesArgs;
pub(crate) use rewrite::RewriteArgs;

/// Options shared by every command that builds a rewriter.
#[derive(Args)]
pub(crate) struct PipelineArgs {
    /// Path to configuration file (default: auto-discover blade.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the @switch statement passes.
    #[arg(long)]
    no_switch: bool,

    /// Do not register built-in directives.
    #[arg(long)]
    no_builtin: bool,
}

impl PipelineArgs {
    /// Load configuration, applying command-line overrides.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            switch: self.no_switch.then_some(false),
            builtin: self.no_builtin.then_some(false),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build the rewriter described by `config`.
///
/// Built-ins are registered first, then `[[directive]]` and `[[paired]]`
/// entries in file order, so configuration overrides built-ins by name.
pub(crate) fn build_rewriter(config: &Config) -> TagRewriter {
    let mut directives = if config.rewrite.builtin {
        Directives::builtin()
    } else {
        Directives::new()
    };

    if config.rewrite.builtin {
        for name in &config.rewrite.disabled {
            if directives.remove(name).is_none() {
                tracing::warn!(directive = %name, "Disabled directive is not a built-in");
            }
        }
    }

    for directive in &config.directives {
        directives.register(&directive.name, Expander::template(&directive.template));
    }
    for paired in &config.paired {
        directives.register_paired(
            &paired.open,
            &paired.close,
            Expander::template(&paired.open_template),
            Expander::template(&paired.close_template),
        );
    }

    tracing::info!(
        directives = directives.len(),
        switch = config.rewrite.switch,
        "Directive registry ready"
    );

    if config.rewrite.switch {
        TagRewriter::new(directives)
    } else {
        TagRewriter::without_switch(directives)
    }
}
