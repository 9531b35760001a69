//! `blade rewrite` command implementation.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use blade_directives::TagRewriter;
use clap::Args;

use super::{PipelineArgs, build_rewriter};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the rewrite command.
#[derive(Args)]
pub(crate) struct RewriteArgs {
    /// Template files to rewrite (default: read standard input).
    files: Vec<PathBuf>,

    /// Directory to write rewritten files into (default: standard output).
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RewriteArgs {
    /// Execute the rewrite command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a file cannot be read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.pipeline.load_config()?;
        let rewriter = build_rewriter(&config);

        if self.files.is_empty() {
            let source = io::read_to_string(io::stdin())?;
            io::stdout().lock().write_all(rewriter.rewrite(&source).as_bytes())?;
            return Ok(());
        }

        let Some(dir) = &self.output else {
            let mut stdout = io::stdout().lock();
            for path in &self.files {
                stdout.write_all(rewrite_file(&rewriter, path)?.as_bytes())?;
            }
            return Ok(());
        };

        let targets = target_paths(dir, &self.files)?;
        std::fs::create_dir_all(dir).map_err(|source| CliError::File {
            path: dir.clone(),
            source,
        })?;

        for (path, target) in self.files.iter().zip(&targets) {
            let rewritten = rewrite_file(&rewriter, path)?;
            std::fs::write(target, rewritten).map_err(|source| CliError::File {
                path: target.clone(),
                source,
            })?;
            tracing::info!(source = %path.display(), target = %target.display(), "Rewrote template");
        }

        Output::new().rewrote(targets.len(), dir);
        Ok(())
    }
}

/// Read and rewrite one template file.
fn rewrite_file(rewriter: &TagRewriter, path: &Path) -> Result<String, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(rewriter.rewrite(&source))
}

/// Output location of `source` inside `dir`.
fn target_path(dir: &Path, source: &Path) -> Result<PathBuf, CliError> {
    let name = source.file_name().ok_or_else(|| {
        CliError::Validation(format!("{} is not a file path", source.display()))
    })?;
    Ok(dir.join(name))
}

/// Output locations of every source, rejecting sources that would land on
/// the same file.
fn target_paths(dir: &Path, sources: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut seen = HashMap::with_capacity(sources.len());
    let mut targets = Vec::with_capacity(sources.len());

    for source in sources {
        let target = target_path(dir, source)?;
        if let Some(previous) = seen.insert(target.clone(), source) {
            return Err(CliError::Validation(format!(
                "{} and {} would both be written to {}",
                previous.display(),
                source.display(),
                target.display()
            )));
        }
        targets.push(target);
    }

    Ok(targets)
}
