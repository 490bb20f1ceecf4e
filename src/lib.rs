pub mod args;
pub mod catalogue;
pub mod choice;
pub mod colors;
pub mod config;
pub mod fsutil;
mod output;
pub mod prep;

pub use args::{
    attach_option_values, has_command, locate_mandatory, with_default_command, COMMANDS,
};
pub use choice::{
    canonicalize, expand, parse_tokens, reduce_list, Catalogue, ChoiceError, Token, TokenError,
};
pub use colors::{should_use_colors, Colors, Style};
pub use config::{
    default_layer, generate_init_file, load_layer, merge, merge_layers, resolve_settings, Command,
    ConfigError, ConfigMap, ConfigPaths, ConfigValue, HacToml, Resolution, ResolveError, Settings,
};
pub use output::{
    print_choices, print_error, print_warning, render_settings, OutputContext, OutputMode,
};
pub use prep::{prepare, PrepError, PrepReport};

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Prep(#[from] PrepError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Execute the resolved command.
pub fn run(resolution: &Resolution, ctx: &OutputContext) -> Result<(), RunError> {
    output::print_unsatisfied(&resolution.unsatisfied, ctx);

    let settings = &resolution.settings;
    tracing::debug!(command = %settings.command, "running command");

    match settings.command {
        Command::Show => output::print_settings(settings)?,
        Command::Prep => {
            let report = prepare(settings)?;
            output::print_prep_report(&report, ctx);
        }
    }

    Ok(())
}
