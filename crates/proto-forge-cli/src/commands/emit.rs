use std::collections::HashMap;
use std::path::{Path, PathBuf};

use console::Term;

use crate::cli::{EmitArgs, GlobalOpts};
use crate::commands::{discover_tree_files, load_tree};
use crate::config::{load_config, resolve_emit_params};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// What happened to one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Written,
    Unchanged,
    Skipped,
    Stale,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
            Self::Skipped => "skipped",
            Self::Stale => "stale",
        }
    }
}

/// Run the `emit` command: decode each tree and write its proto text.
pub fn run(args: EmitArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let params = resolve_emit_params(&config, &args.paths, args.out_dir.as_deref());
    let files = discover_tree_files(&params.inputs, &params.input_glob)?;

    if args.stdout {
        for file in &files {
            let tree = load_tree(file)?;
            print!("{}", proto_forge_emit::emit(&tree));
        }
        return Ok(());
    }

    let targets = plan_outputs(&files, &params.out_dir, &params.extension)?;
    let mut results = Vec::new();
    let mut stale = 0usize;

    for (file, target) in files.iter().zip(&targets) {
        let tree = load_tree(file)?;
        let text = proto_forge_emit::emit(&tree);
        let existing = read_existing(target)?;

        let outcome = if existing.as_deref() == Some(text.as_str()) {
            Outcome::Unchanged
        } else if args.check {
            stale += 1;
            Outcome::Stale
        } else if existing.is_some() && !args.force && !confirm_overwrite(target, output)? {
            Outcome::Skipped
        } else {
            write_output(target, &text)?;
            Outcome::Written
        };

        tracing::info!(
            input = %file.display(),
            output = %target.display(),
            outcome = outcome.as_str(),
            "emitted"
        );

        match output.mode {
            OutputMode::Human => output.status(&format!(
                "  {} -> {} .... {}",
                file.display(),
                target.display(),
                outcome.as_str()
            )),
            OutputMode::Json => results.push(serde_json::json!({
                "input": file.display().to_string(),
                "output": target.display().to_string(),
                "outcome": outcome.as_str(),
            })),
            OutputMode::Plain => println!(
                "{}\t{}\t{}",
                file.display(),
                target.display(),
                outcome.as_str()
            ),
        }
    }

    match output.mode {
        OutputMode::Human if stale == 0 => output.success(&format!(
            "{} files emitted to {}",
            files.len(),
            params.out_dir.display()
        )),
        OutputMode::Json => output.print_json(&serde_json::json!({
            "files": files.len(),
            "out_dir": params.out_dir.display().to_string(),
            "stale": stale,
            "results": results,
        })),
        _ => {}
    }

    if stale > 0 {
        return Err(CliError::Stale { count: stale });
    }
    Ok(())
}

/// `<out_dir>/<input stem>.<extension>`
fn output_path(out_dir: &Path, input: &Path, extension: &str) -> Result<PathBuf, CliError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| CliError::Other(format!("'{}' has no file name", input.display())))?;
    Ok(out_dir.join(stem).with_extension(extension))
}

/// Output path for every input, in input order. Fails before anything is
/// written if two inputs share a target.
fn plan_outputs(files: &[PathBuf], out_dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CliError> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(files.len());

    for file in files {
        let target = output_path(out_dir, file, extension)?;
        if let Some(first) = claimed.insert(target.clone(), file.as_path()) {
            return Err(CliError::OutputCollision {
                output: target,
                first: first.to_path_buf(),
                second: file.clone(),
            });
        }
        targets.push(target);
    }
    Ok(targets)
}

fn read_existing(path: &Path) -> Result<Option<String>, CliError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CliError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, text).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Ask before replacing a file whose content differs. Non-interactive runs
/// must pass `--force` instead.
fn confirm_overwrite(path: &Path, output: &OutputContext) -> Result<bool, CliError> {
    if !Term::stderr().is_term() {
        return Err(CliError::RequiresForce {
            path: path.to_path_buf(),
        });
    }

    output.warn(&format!("{} differs from the generated text", path.display()));
    dialoguer::Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()
        .map_err(|_| CliError::Cancelled)
}
