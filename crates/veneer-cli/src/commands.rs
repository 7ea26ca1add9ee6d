use anyhow::{bail, Context};
use colored::Colorize;
use veneer_diff::{compare_with, max_severity, CompareOptions};
use veneer_extract::{Extractor, ManifestExtractor};
use veneer_store::{load_forest, save_forest};
use veneer_types::Severity;

use crate::cli::{Cli, Command, CompareArgs, DumpArgs};
use crate::format;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Dump(args) => cmd_dump(args),
        Command::Compare(args) => cmd_compare(args, cli.verbose),
    }
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let mut extractor = ManifestExtractor::new();
    for manifest in &args.manifests {
        if manifest.is_dir() {
            if !args.recurse {
                bail!(
                    "{} is a directory; pass --recurse to collect manifests below it",
                    manifest.display()
                );
            }
            let found = extractor.add_dir(manifest)?;
            tracing::debug!(dir = %manifest.display(), found, "collected manifests");
        } else {
            extractor.add_file(manifest);
        }
    }

    let forest = extractor.extract().context("failed to build API surface")?;

    match &args.output {
        Some(file) => {
            save_forest(file, &forest)?;
            println!(
                "{} Saved surface of {} module(s) to {}",
                "✓".green().bold(),
                forest.len(),
                file.display().to_string().bold()
            );
        }
        None => print!("{}", format::format_forest(&forest)),
    }
    Ok(())
}

fn cmd_compare(args: CompareArgs, verbose: bool) -> anyhow::Result<()> {
    let old = load_forest(&args.old)?;
    let new = load_forest(&args.new)?;

    let options = CompareOptions {
        max_depth: args.max_depth,
    };
    let changes = compare_with(&old, &new, &options)?;

    if verbose {
        for change in &changes {
            println!("{}", format::format_change(change));
        }
    }

    // An empty change set is a patch-level no-op.
    let severity = max_severity(&changes).unwrap_or(Severity::Patch);
    match &args.bump {
        Some(version) => println!("{}", veneer_semver::bump(severity, version)?),
        None => println!("{}", format::severity_label(severity)),
    }
    Ok(())
}
