use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
};
use colored::Colorize;
use std::path::PathBuf;
use truffle_scaffold::Manifest;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("destination")
                .help("Directory to lay the skeleton out in (defaults to the current directory)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print each created path")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the tree that would be created without touching the disk")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .value_name("FILE")
                .help("Load directories and placeholder files from a toml manifest")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    let destination = matches
        .get_one::<PathBuf>("destination")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let manifest = match matches.get_one::<PathBuf>("manifest") {
        Some(path) => Manifest::from_file(path)?,
        None => Manifest::builtin(),
    };

    if matches.get_flag("dry-run") {
        truffle_scaffold::preview(&manifest, &destination)?;

        return Ok(());
    }

    let quiet = matches.get_flag("quiet");

    let report = truffle_scaffold::scaffold(&manifest, &destination, !quiet)?;

    if !quiet {
        println!(
            "{} {} directories, {} files",
            "done".bold().green(),
            report.directories,
            report.files
        );
    }

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
