use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Render schema trees into canonical proto3 source files.
///
/// proto-forge reads fully resolved schema trees (JSON documents produced by
/// an upstream compiler stage) and writes one `.proto` file per tree.
#[derive(Parser)]
#[command(
    name = "proto-forge",
    version,
    about = "Render schema trees into canonical proto3 source files",
    after_help = "Use 'proto-forge <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: PROTO_FORGE_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "PROTO_FORGE_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Emit .proto files from schema tree documents
    Emit(EmitArgs),

    /// Decode schema tree documents without emitting
    Check(CheckArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `proto-forge emit`.
#[derive(Args)]
pub struct EmitArgs {
    /// Tree files or directories (default: input_dir from config)
    pub paths: Vec<PathBuf>,

    /// Directory for generated files (default: out_dir from config)
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Print generated text to stdout instead of writing files
    #[arg(long = "stdout", conflicts_with = "out_dir")]
    pub stdout: bool,

    /// Overwrite existing files without asking
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Write nothing; fail if any generated file is missing or out of date
    #[arg(long = "check", conflicts_with_all = ["stdout", "force"])]
    pub check: bool,
}

/// Arguments for `proto-forge check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Tree files or directories (default: input_dir from config)
    pub paths: Vec<PathBuf>,
}

/// Arguments for `proto-forge completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_parser = ["bash", "zsh", "fish", "powershell", "elvish"])]
    pub shell: String,
}
