//! Raw command-line token handling done before clap sees the arguments.

/// Prefix marking an optional flag.
pub const FLAG_MARKER: char = '-';

/// Commands recognized as the first mandatory argument.
pub const COMMANDS: [&str; 2] = ["prep", "show"];

/// Index of the first token that is not an optional flag.
///
/// Returns `tokens.len()` when every token is a flag.
pub fn locate_mandatory<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens
        .iter()
        .position(|t| !t.as_ref().starts_with(FLAG_MARKER))
        .unwrap_or(tokens.len())
}

/// Whether `arg` ends in an option whose value is the next argument.
///
/// In a short cluster such as `-qd` the first value-taking flag consumes the
/// rest of the cluster, so only a trailing one waits for the next argument.
fn takes_detached_value(arg: &str, value_options: &[String]) -> bool {
    if arg.starts_with("--") {
        return value_options.iter().any(|o| o == arg);
    }
    let Some(cluster) = arg.strip_prefix(FLAG_MARKER) else {
        return false;
    };

    cluster
        .char_indices()
        .find(|(_, c)| value_options.contains(&format!("{FLAG_MARKER}{c}")))
        .is_some_and(|(i, c)| i + c.len_utf8() == cluster.len())
}

/// Attach detached option values to their option (`-l cpp` becomes `-lcpp`,
/// `--lang cpp` becomes `--lang=cpp`) so values are not mistaken for
/// mandatory arguments.
pub fn attach_option_values(args: Vec<String>, value_options: &[String]) -> Vec<String> {
    let mut attached = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            attached.push(arg);
            attached.extend(iter);
            break;
        }
        if takes_detached_value(&arg, value_options) {
            if let Some(value) = iter.next() {
                if arg.starts_with("--") {
                    attached.push(format!("{arg}={value}"));
                } else {
                    attached.push(format!("{arg}{value}"));
                }
                continue;
            }
        }
        attached.push(arg);
    }

    attached
}

/// Whether the mandatory section starts with a command.
pub fn has_command<S: AsRef<str>>(args: &[S]) -> bool {
    args[locate_mandatory(args)..]
        .first()
        .is_some_and(|first| COMMANDS.contains(&first.as_ref()))
}

/// Prepend `default_command` unless the mandatory section already starts with a command.
pub fn with_default_command(mut args: Vec<String>, default_command: &str) -> Vec<String> {
    if !has_command(&args) {
        args.insert(0, default_command.to_string());
    }
    args
}
