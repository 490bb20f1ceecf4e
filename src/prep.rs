//! The `prep` command: lay out a problem directory with solution skeletons.

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::catalogue::{lang_template, runner_file};
use crate::choice::Token;
use crate::config::Settings;
use crate::fsutil::{safe_fwrite, safe_mkdir, FsOutcome};

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("no problem location given")]
    NoLocation,
    #[error("invalid location component '{0}'")]
    InvalidLocation(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub path: PathBuf,
    pub outcome: FsOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepReport {
    pub dir: Prepared,
    pub files: Vec<Prepared>,
}

/// Replace a leading `~` with the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

/// Directory for a problem: `dir` followed by every location segment.
///
/// Location arguments may themselves contain `/`-separated segments.
pub fn problem_dir(dir: &Path, location: &[String]) -> Result<PathBuf, PrepError> {
    let mut path = expand_home(dir);
    let mut segments = 0;

    for segment in location.iter().flat_map(|l| l.split('/')) {
        if segment.is_empty() {
            continue;
        }
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => path.push(segment),
            _ => return Err(PrepError::InvalidLocation(segment.to_string())),
        }
        segments += 1;
    }

    if segments == 0 {
        return Err(PrepError::NoLocation);
    }
    Ok(path)
}

fn write(path: PathBuf, contents: &str, force: bool) -> io::Result<Prepared> {
    let outcome = safe_fwrite(&path, contents, force)?;
    tracing::debug!(path = %path.display(), ?outcome, "prepared file");
    Ok(Prepared { path, outcome })
}

/// Create the problem directory and one file per selected language and runner.
pub fn prepare(settings: &Settings) -> Result<PrepReport, PrepError> {
    let root = problem_dir(&settings.dir, &settings.location)?;
    let dir = Prepared {
        outcome: safe_mkdir(&root, settings.force)?,
        path: root.clone(),
    };

    let mut files = Vec::new();

    for token in &settings.lang {
        if let Token::Prioritized { name, priority } = token {
            let path = root.join(format!("solution.{name}"));
            files.push(write(path, lang_template(name, *priority), settings.force)?);
        }
    }

    for token in &settings.runner {
        if let Token::Prioritized { name, priority } = token {
            if let Some((file_name, contents)) = runner_file(name, *priority) {
                files.push(write(root.join(file_name), contents, settings.force)?);
            }
        }
    }

    Ok(PrepReport { dir, files })
}
