use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use ennea_migrate::{run_record_migration, run_text_patch, MigrateOptions, DEFAULT_PREVIEW_LEN};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn cli() -> Command {
    let manifest = Arg::new("manifest")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Manifest file (.json, .yaml or .yml)");

    Command::new("ennea-migrate")
        .version(ennea_migrate::VERSION)
        .about("Apply narrative migrations to the relationship store")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Raise log level (-v info, -vv debug); RUST_LOG overrides"),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .value_parser(value_parser!(usize))
                .global(true)
                .help(format!(
                    "Characters of unmatched text quoted in warnings [default: {DEFAULT_PREVIEW_LEN}]"
                )),
        )
        .subcommand(
            Command::new("text")
                .about("Literal find-and-replace over a text file")
                .arg(
                    Arg::new("target")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("File to patch in place"),
                )
                .arg(manifest.clone()),
        )
        .subcommand(
            Command::new("records")
                .about("Id-keyed edits to a narrative JSON store")
                .arg(
                    Arg::new("store")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Narrative store to update in place"),
                )
                .arg(manifest),
        )
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn path_arg<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a PathBuf> {
    args.get_one::<PathBuf>(name)
        .with_context(|| format!("missing argument <{name}>"))
}

/// Run options from the command line; unset flags keep the library defaults
fn options_from(matches: &ArgMatches) -> MigrateOptions {
    let options = MigrateOptions::new();
    match matches.get_one::<usize>("preview") {
        Some(&preview_len) => options.with_preview_len(preview_len),
        None => options,
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));
    let options = options_from(&matches);

    let report = match matches.subcommand() {
        Some(("text", args)) => {
            let target = path_arg(args, "target")?;
            let manifest = path_arg(args, "manifest")?;
            run_text_patch(target, manifest, &options)
                .with_context(|| format!("text patch of {} failed", target.display()))?
        }
        Some(("records", args)) => {
            let store = path_arg(args, "store")?;
            let manifest = path_arg(args, "manifest")?;
            run_record_migration(store, manifest, &options)
                .with_context(|| format!("record migration of {} failed", store.display()))?
        }
        _ => anyhow::bail!("unknown subcommand"),
    };

    println!("{}", report.summary());
    Ok(())
}
