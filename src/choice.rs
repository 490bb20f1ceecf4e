//! Choice lists: tokens with optional priorities and their resolution.
//!
//! A choice token is either bare (`cpp`), prioritized (`cpp.1`) or the
//! negation marker (`no`). Lower priority numbers win.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Separates a choice name from its priority.
pub const SEPARATOR: char = '.';

/// Reserved token that cancels every choice listed before it.
pub const NEGATION: &str = "no";

/// Error produced when a string is not a well-formed choice token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("empty choice")]
    Empty,
    #[error("choice '{0}' has an empty name")]
    EmptyName(String),
    #[error("choice '{0}' uses the reserved name 'no'")]
    ReservedName(String),
    #[error("choice '{0}' has an invalid priority")]
    InvalidPriority(String),
}

/// Error produced while resolving choices against a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error(transparent)]
    Token(#[from] TokenError),
    /// An available choice lacks the `name.priority` form.
    #[error("available choice '{0}' is not canonical (expected <name>.<priority>)")]
    NotCanonical(String),
}

/// A single element of a choice list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Negation,
    Bare(String),
    Prioritized { name: String, priority: u32 },
}

impl Token {
    pub fn is_negation(&self) -> bool {
        matches!(self, Token::Negation)
    }

    /// The option name, `None` for the negation marker.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Negation => None,
            Token::Bare(name) | Token::Prioritized { name, .. } => Some(name),
        }
    }
}

fn parse_priority(token: &str, digits: &str) -> Result<u32, TokenError> {
    let invalid = || TokenError::InvalidPriority(token.to_string());

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // One textual form per priority keeps string order and equality in step.
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TokenError::Empty);
        }
        if s == NEGATION {
            return Ok(Token::Negation);
        }

        match s.split_once(SEPARATOR) {
            None => Ok(Token::Bare(s.to_string())),
            Some((name, digits)) => {
                if name.is_empty() {
                    return Err(TokenError::EmptyName(s.to_string()));
                }
                if name == NEGATION {
                    return Err(TokenError::ReservedName(s.to_string()));
                }
                let priority = parse_priority(s, digits)?;
                Ok(Token::Prioritized {
                    name: name.to_string(),
                    priority,
                })
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Negation => f.write_str(NEGATION),
            Token::Bare(name) => f.write_str(name),
            Token::Prioritized { name, priority } => write!(f, "{name}{SEPARATOR}{priority}"),
        }
    }
}

impl Token {
    fn variant_rank(&self) -> u8 {
        match self {
            Token::Negation => 0,
            Token::Bare(_) => 1,
            Token::Prioritized { .. } => 2,
        }
    }
}

// Ordering follows the rendered text so sorted output is lexicographic; the
// variant breaks ties so `Ord` agrees with `Eq` for tokens like `Bare("cpp.1")`.
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.variant_rank().cmp(&other.variant_rank()))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse every string into a token, stopping at the first malformed one.
pub fn parse_tokens<I, S>(items: I) -> Result<Vec<Token>, TokenError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().map(|s| s.as_ref().parse()).collect()
}

fn sorted_unique<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep only tokens after the last negation marker, deduplicated and sorted.
pub fn reduce_list(tokens: &[Token]) -> Vec<Token> {
    let start = tokens
        .iter()
        .rposition(Token::is_negation)
        .map_or(0, |i| i + 1);
    sorted_unique(&tokens[start..])
}

/// Add the bare form of every prioritized token, deduplicated and sorted.
pub fn expand(tokens: &[Token]) -> Vec<Token> {
    let mut out: BTreeSet<Token> = tokens.iter().cloned().collect();
    for token in tokens {
        if let Token::Prioritized { name, .. } = token {
            out.insert(Token::Bare(name.clone()));
        }
    }
    out.into_iter().collect()
}

/// A validated set of canonical (`name.priority`) choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    entries: BTreeSet<Token>,
    best: BTreeMap<String, u32>,
}

impl Catalogue {
    /// Build a catalogue, failing on the first entry that is not prioritized.
    pub fn new(available: &[Token]) -> Result<Self, ChoiceError> {
        let mut catalogue = Catalogue::default();

        for token in available {
            let Token::Prioritized { name, priority } = token else {
                return Err(ChoiceError::NotCanonical(token.to_string()));
            };
            catalogue
                .best
                .entry(name.clone())
                .and_modify(|best| *best = (*best).min(*priority))
                .or_insert(*priority);
            catalogue.entries.insert(token.clone());
        }

        Ok(catalogue)
    }

    /// Parse and validate a catalogue from string literals.
    pub fn from_strs(available: &[&str]) -> Result<Self, ChoiceError> {
        Self::new(&parse_tokens(available)?)
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.entries.contains(token)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Token> {
        self.entries.iter()
    }

    /// Every form a user may request: canonical entries plus their bare names.
    pub fn choices(&self) -> Vec<Token> {
        let entries: Vec<Token> = self.entries.iter().cloned().collect();
        expand(&entries)
    }

    /// Highest precedence entry for a name.
    pub fn best(&self, name: &str) -> Option<Token> {
        self.best.get(name).map(|&priority| Token::Prioritized {
            name: name.to_string(),
            priority,
        })
    }

    /// Resolve requested choices to one canonical entry per distinct name.
    ///
    /// Requested tokens are visited in sorted order and the first one seen for
    /// a name decides it: an exact canonical request is honored, anything else
    /// takes the lowest priority available. Names absent from the catalogue
    /// are dropped.
    pub fn resolve(&self, requested: &[Token]) -> Vec<Token> {
        let mut emitted = BTreeSet::new();
        let mut resolved = BTreeSet::new();

        for token in sorted_unique(requested) {
            let Some(name) = token.name() else {
                continue;
            };
            let canonical = if self.contains(&token) {
                Some(token.clone())
            } else {
                self.best(name)
            };
            let Some(canonical) = canonical else {
                continue;
            };
            if emitted.insert(name.to_string()) {
                resolved.insert(canonical);
            }
        }

        resolved.into_iter().collect()
    }

    /// Names requested but not offered at any priority, sorted.
    pub fn missing(&self, requested: &[Token]) -> Vec<String> {
        let known = self.choices();
        requested
            .iter()
            .filter_map(Token::name)
            .filter(|name| !known.contains(&Token::Bare(name.to_string())))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Resolve `requested` against `available`, which must be all canonical.
pub fn canonicalize(requested: &[Token], available: &[Token]) -> Result<Vec<Token>, ChoiceError> {
    Ok(Catalogue::new(available)?.resolve(requested))
}
