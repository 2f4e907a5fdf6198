//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

use crate::domain::entities::result_set::ResultView;

/// アセンブリソースとoptabをアセンブラサービスに送信するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "asmsubmit")]
#[command(about = "Submit assembly source and optab to a two-pass assembler service", long_about = None)]
pub struct Args {
    /// Load the input (assembly source) from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input text, applied after --input
    #[arg(long)]
    pub input_text: Option<String>,

    /// Load the optab from a file
    #[arg(short, long)]
    pub optab: Option<PathBuf>,

    /// Optab text, applied after --optab
    #[arg(long)]
    pub optab_text: Option<String>,

    /// Use the built-in SIC optab
    #[arg(long)]
    pub preset_optab: bool,

    /// Result panels to print: pass1, pass2 or both
    #[arg(long)]
    pub view: Option<ResultView>,

    /// Assembler service URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Save the four result files and a manifest to this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Dry run mode - validate without sending the request
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./.asmsubmit/config.json")]
    pub config: String,
}
