//! xtask - Build tasks for freezesync
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man page, USAGE.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use freezesync::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for freezesync")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from the CLI definition
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate the man page
        #[arg(long)]
        man: bool,

        /// Generate USAGE.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // Neither flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_page(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate the man page using clap_mangen
fn generate_man_page(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let man = Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = man_dir.join("freezesync.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn is_documented(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id != "help" && id != "version" && !arg.is_hide_set()
}

fn flag_label(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    match (long, short) {
        (Some(l), Some(s)) => Some(format!("{}, {}", s, l)),
        (Some(l), None) => Some(l),
        (None, Some(s)) => Some(s),
        _ => None,
    }
}

/// Generate USAGE.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# freezesync\n\n");
    markdown.push_str("This document is auto-generated from the CLI definition.\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    markdown.push_str("## Usage\n\n");
    markdown.push_str(&format!("```\n{}\n```\n\n", cmd.render_usage()));

    let positional: Vec<_> = cmd
        .get_arguments()
        .filter(|a| a.is_positional() && is_documented(a))
        .collect();
    if !positional.is_empty() {
        markdown.push_str("## Arguments\n\n");
        for arg in positional {
            let name = arg
                .get_value_names()
                .and_then(|names| names.first())
                .map(|n| n.to_string())
                .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
            markdown.push_str(&format!("- `<{}>...`: ", name));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&format!("{}", help));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_positional() && is_documented(a))
        .collect();
    if !options.is_empty() {
        markdown.push_str("## Options\n\n");
        markdown.push_str("| Option | Description |\n");
        markdown.push_str("|--------|-------------|\n");
        for arg in options {
            let Some(flag) = flag_label(arg) else {
                continue;
            };
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!("| `{}` | {} |\n", flag, help));
        }
        markdown.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("## Description\n\n");
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("USAGE.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
