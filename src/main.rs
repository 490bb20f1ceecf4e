use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use hac::config::{keys, DEFAULT_COMMAND};
use hac::{
    attach_option_values, catalogue, default_layer, generate_init_file, has_command, load_layer,
    merge_layers, print_choices, print_error, print_warning, resolve_settings, run,
    should_use_colors, with_default_command, ConfigMap, ConfigPaths, OutputContext, OutputMode,
    COMMANDS,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hac")]
#[command(version, about = "Prepare working directories for competitive programming problems")]
struct Cli {
    /// Command to run (default taken from the config files)
    #[arg(value_parser = COMMANDS)]
    command: String,

    /// Problem location, e.g. `codeforces 100 A`
    location: Vec<String>,

    /// Languages, optionally with priority (`cpp`, `py.1`); `no` drops earlier ones
    #[arg(short, long, value_delimiter = ',', value_name = "CHOICE")]
    lang: Vec<String>,

    /// Runners, optionally with priority; `no` drops earlier ones
    #[arg(short, long, value_delimiter = ',', value_name = "CHOICE")]
    runner: Vec<String>,

    /// Directory under which problem directories are created
    #[arg(short, long, value_name = "PATH")]
    dir: Option<String>,

    /// Replace existing files and directories
    #[arg(short, long)]
    force: bool,

    /// Specify user config file path (overrides discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a template user config file
    #[arg(long)]
    init: bool,

    /// Print the available languages and runners
    #[arg(long)]
    list_choices: bool,

    /// Output only created file names and no warnings
    #[arg(short, long)]
    quiet: bool,

    /// Log configuration layering and resolution details
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    // Show help and exit when no arguments given
    if raw.is_empty() {
        let _ = Cli::command().print_help();
        return ExitCode::from(1);
    }

    // The placeholder command only satisfies clap; an implicit command is
    // taken from the config files after they are loaded.
    let args = attach_option_values(raw, &value_options());
    let explicit_command = has_command(&args);
    let args = with_default_command(args, DEFAULT_COMMAND);
    let cli = Cli::parse_from(std::iter::once("hac".to_string()).chain(args));

    let ctx = OutputContext::new(
        if cli.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        },
        should_use_colors(cli.no_color),
    );

    // `--init` does not depend on any configuration layer
    if cli.init {
        return handle_init(cli.config.clone(), &ctx);
    }

    init_tracing(cli.verbose, cli.quiet);

    let (langs, runners) = match (catalogue::langs(), catalogue::runners()) {
        (Ok(langs), Ok(runners)) => (langs, runners),
        (Err(e), _) | (_, Err(e)) => {
            print_error(&e, &ctx);
            return ExitCode::from(1);
        }
    };

    if cli.list_choices {
        print_choices(keys::LANG, &langs);
        print_choices(keys::RUNNER, &runners);
        return ExitCode::SUCCESS;
    }

    // Merge configurations: CLI > user file > machine file > defaults
    let paths = ConfigPaths::discover(cli.config.clone());
    let config = merge_layers([
        default_layer(),
        load_file_layer(&paths.system, &ctx),
        paths
            .user
            .as_deref()
            .map(|path| load_file_layer(path, &ctx))
            .unwrap_or_default(),
        build_cli_layer(&cli, explicit_command),
    ]);
    tracing::debug!(?config, "merged configuration");

    let resolution = match resolve_settings(&config, &langs, &runners) {
        Ok(resolution) => resolution,
        Err(e) => {
            print_error(&e, &ctx);
            return ExitCode::from(1);
        }
    };

    match run(&resolution, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e, &ctx);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "error",
        (false, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Spellings of every option that takes a value, e.g. `-l` and `--lang`.
fn value_options() -> Vec<String> {
    Cli::command()
        .get_arguments()
        .filter(|arg| !arg.is_positional() && arg.get_action().takes_values())
        .flat_map(|arg| {
            let long = arg.get_long().map(|l| format!("--{l}"));
            let short = arg.get_short().map(|s| format!("-{s}"));
            long.into_iter().chain(short)
        })
        .collect()
}

fn handle_init(explicit_path: Option<PathBuf>, ctx: &OutputContext) -> ExitCode {
    let Some(path) = ConfigPaths::discover(explicit_path).user else {
        print_error(&"no user config directory on this platform", ctx);
        return ExitCode::from(1);
    };

    match generate_init_file(&path) {
        Ok(()) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e, ctx);
            ExitCode::from(1)
        }
    }
}

fn load_file_layer(path: &Path, ctx: &OutputContext) -> ConfigMap {
    match load_layer(path) {
        Ok(layer) => layer,
        Err(e) => {
            print_warning(
                &format_args!("Failed to load {}: {}", path.display(), e),
                ctx,
            );
            ConfigMap::new()
        }
    }
}

fn build_cli_layer(cli: &Cli, explicit_command: bool) -> ConfigMap {
    // Only set options that were explicitly provided on CLI.
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with config files.
    let list = |items: &Vec<String>| (!items.is_empty()).then(|| items.clone());

    ConfigMap::from([
        (
            keys::COMMAND.to_string(),
            explicit_command.then(|| cli.command.clone()).into(),
        ),
        (keys::LANG.to_string(), list(&cli.lang).into()),
        (keys::RUNNER.to_string(), list(&cli.runner).into()),
        (keys::LOCATION.to_string(), list(&cli.location).into()),
        (keys::DIR.to_string(), cli.dir.clone().into()),
        (keys::FORCE.to_string(), cli.force.then_some(true).into()),
    ])
}
