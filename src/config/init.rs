//! Template generation for the `--init` flag

use std::fs;
use std::io;
use std::path::Path;

/// Template hac.toml with documentation
pub const HAC_TOML_TEMPLATE: &str = r#"# hac.toml - Configuration for hac
#
# Settings are layered: built-in defaults < /etc/hac/hac.toml < this file
# < command-line options. Anything left commented out falls through to the
# previous layer.
#
# Choice lists (lang, runner) accept bare names ("cpp"), names with a
# priority ("cpp.1", lower numbers win) and the marker "no", which drops
# everything listed before it in the same list. A list set here replaces
# the machine-wide one as a whole.

# Command to run when none is given: "prep" or "show".
# command = "show"

# Languages to prepare solution files for.
# lang = ["cpp"]

# Runners to prepare.
# runner = ["sh"]

# Directory under which problem directories are created.
# dir = "."

# Replace existing files and directories instead of keeping them.
# force = false
"#;

/// Write the template to `path`, creating parent directories.
///
/// Returns an error if the file already exists.
pub fn generate_init_file(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, HAC_TOML_TEMPLATE)
}
