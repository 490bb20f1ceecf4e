use std::io;

use crate::choice::Catalogue;
use crate::colors::{Colors, Style};
use crate::config::{Settings, Unsatisfied};
use crate::fsutil::FsOutcome;
use crate::prep::{PrepReport, Prepared};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
        }
    }
}

/// Render settings as TOML, the same shape a config file uses.
pub fn render_settings(settings: &Settings) -> io::Result<String> {
    toml::to_string(settings).map_err(io::Error::other)
}

pub fn print_settings(settings: &Settings) -> io::Result<()> {
    print!("{}", render_settings(settings)?);
    Ok(())
}

/// Print a warning on stderr unless quiet.
pub fn print_warning(message: &dyn std::fmt::Display, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    eprintln!("{} {message}", ctx.colors.paint(Style::Warning, "Warning:"));
}

pub fn print_unsatisfied(unsatisfied: &[Unsatisfied], ctx: &OutputContext) {
    for missing in unsatisfied {
        print_warning(
            &format_args!("{} '{}' is not available", missing.key, missing.name),
            ctx,
        );
    }
}

pub fn print_choices(key: &str, catalogue: &Catalogue) {
    let choices: Vec<String> = catalogue.choices().iter().map(|t| t.to_string()).collect();
    println!("{key}: {}", choices.join(" "));
}

fn print_prepared(prepared: &Prepared, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        if prepared.outcome != FsOutcome::Kept {
            println!("{}", prepared.path.display());
        }
        return;
    }

    let (style, label) = match prepared.outcome {
        FsOutcome::Created => (Style::Success, "Created:"),
        FsOutcome::Replaced => (Style::Warning, "Replaced:"),
        FsOutcome::Kept => (Style::Info, "Kept:"),
    };
    println!(
        "{} {}",
        ctx.colors.paint(style, label),
        prepared.path.display()
    );
}

pub fn print_prep_report(report: &PrepReport, ctx: &OutputContext) {
    print_prepared(&report.dir, ctx);
    for file in &report.files {
        print_prepared(file, ctx);
    }
}

pub fn print_error(message: &dyn std::fmt::Display, ctx: &OutputContext) {
    eprintln!("{} {message}", ctx.colors.paint(Style::Error, "Error:"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue;
    use crate::config::{default_layer, resolve_settings};

    #[test]
    fn test_render_default_settings() {
        let resolution = resolve_settings(
            &default_layer(),
            &catalogue::langs().unwrap(),
            &catalogue::runners().unwrap(),
        )
        .unwrap();

        let rendered = render_settings(&resolution.settings).unwrap();
        assert!(rendered.contains("command = \"show\""));
        assert!(rendered.contains("lang = [\"cpp.0\"]"));
        assert!(rendered.contains("runner = [\"sh.0\"]"));
        assert!(rendered.contains("force = false"));
    }
}
