use crate::cli::{CheckArgs, GlobalOpts};
use crate::commands::{discover_tree_files, load_tree};
use crate::config::{load_config, resolve_emit_params};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `check` command: decode tree documents and report what they hold.
pub fn run(args: CheckArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let params = resolve_emit_params(&config, &args.paths, None);
    let files = discover_tree_files(&params.inputs, &params.input_glob)?;

    let mut total_declarations = 0usize;
    let mut results = Vec::new();

    for file in &files {
        let tree = load_tree(file)?;
        let filename = file.display().to_string();
        let count = tree.declarations.len();
        total_declarations += count;

        match output.mode {
            OutputMode::Human => {
                let package = tree.package.as_deref().unwrap_or("(no package)");
                output.status(&format!("  {filename} .... {package}, {count} declarations"));
            }
            OutputMode::Json => results.push(serde_json::json!({
                "file": filename,
                "package": tree.package,
                "imports": tree.imports.len(),
                "options": tree.options.len(),
                "declarations": count,
            })),
            OutputMode::Plain => println!("{filename}\t{count}"),
        }
    }

    match output.mode {
        OutputMode::Human => output.success(&format!(
            "{total_declarations} declarations decoded from {} files",
            files.len()
        )),
        OutputMode::Json => output.print_json(&serde_json::json!({
            "files": files.len(),
            "declarations": total_declarations,
            "results": results,
        })),
        OutputMode::Plain => {}
    }

    Ok(())
}
