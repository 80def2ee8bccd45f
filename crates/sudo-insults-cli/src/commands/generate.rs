//! Generate command - fetch, filter and write the insult module.

use std::path::PathBuf;

use colored::Colorize;
use sudo_insults::{InsultsConfig, Selection, SudoInsults, Target};

pub fn run(
    insults: &str,
    cache_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    base_url: Option<String>,
    target: Target,
    json: bool,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before touching the filesystem or network
    let selection = Selection::parse(insults)?;

    let mut config = InsultsConfig::for_program()?.with_target(target);
    if let Some(dir) = cache_dir {
        config = config.with_cache_dir(dir);
    }
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }

    if !json {
        let names: Vec<String> = selection.categories().map(|c| c.to_string()).collect();
        println!(
            "{} {}{}",
            "Generating".cyan().bold(),
            names.join(", ").white(),
            if selection.pc() { " (PC)" } else { "" }
        );
    }

    let report = SudoInsults::new(config).generate(&selection)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (category, count) in &report.per_category {
        println!("  {:10} {}", category.to_string(), count.to_string().white().bold());
    }
    println!(
        "{} {} insults",
        "Collected".green().bold(),
        report.insults.len().to_string().white().bold()
    );
    if report.insults.is_empty() {
        println!("{} No insults matched the selection.", "Warning:".yellow().bold());
    }

    println!(
        "{} {}",
        "Wrote".green().bold(),
        report.files.module.display().to_string().white()
    );
    println!(
        "{} {}",
        "Wrote".green().bold(),
        report.files.demo.display().to_string().white()
    );

    if verbose > 0 {
        if let Some(sample) = report.insults.pick_now() {
            println!();
            println!("{} {}", "Sample:".yellow().bold(), sample);
        }
    }

    Ok(())
}
