//! CLI argument definitions using clap.

use std::fmt::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use sudo_insults::{Category, Target};

/// Generate a module of sudo insults
#[derive(Parser)]
#[command(name = "sudo-insults")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// List of insults, separated by comma (e.g. CLASSIC,2001,PC)
    #[arg(value_name = "INSULTS")]
    pub insults: String,

    /// Directory for downloaded insult headers (default: program directory)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Directory for the generated module and demo (default: program directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL the insult headers are downloaded from
    #[arg(long, env = "SUDO_INSULTS_BASE_URL")]
    pub base_url: Option<String>,

    /// Language of the generated files
    #[arg(short, long, default_value = "python")]
    pub target: Target,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Usage text listing every category token.
pub fn usage(program: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} <insults>\n", program);
    let _ = writeln!(out, "   <insults>  list of insults, separated by comma\n");
    let _ = writeln!(out, "   ALL        include all insults");
    let _ = writeln!(out, "   PC         use politically correct variations\n");
    for category in Category::ALL {
        let _ = writeln!(out, "   {:<10} {}", category.token(), category.description());
    }
    let _ = writeln!(out, "\nexample: {} CLASSIC,2001,PC", program);
    out
}
