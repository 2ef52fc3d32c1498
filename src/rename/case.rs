//! Case-preserving name substitution
//!
//! An occurrence of the old name is replaced by the new name written in the
//! same convention as the occurrence:
//!
//! | occurrence (old = `old_name`) | replacement (new = `new_name`) |
//! |-------------------------------|--------------------------------|
//! | `OLD_NAME`                    | `NEW_NAME`                     |
//! | `old_name`                    | `new_name`                     |
//! | `OldName`                     | `NewName`                      |
//! | anything else, e.g. `Old_name`| `new_name` as given            |

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// Casing convention of a matched occurrence, relative to the old name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    Camel,
    /// None of the above; the new name is used unchanged.
    Unrecognized,
}

/// Camel-case form of a name: every `_`, `-` or whitespace separated
/// segment gets an upper-case first letter, and the segments are joined.
pub fn camel_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Classify `matched` against the forms of `old_name`, upper first.
pub fn detect_case(matched: &str, old_name: &str) -> CaseStyle {
    if matched == old_name.to_uppercase() {
        CaseStyle::Upper
    } else if matched == old_name.to_lowercase() {
        CaseStyle::Lower
    } else if matched == camel_case(old_name) {
        CaseStyle::Camel
    } else {
        CaseStyle::Unrecognized
    }
}

/// Replacement for one occurrence `matched` of `old_name`.
pub fn case_adapt(matched: &str, old_name: &str, new_name: &str) -> String {
    match detect_case(matched, old_name) {
        CaseStyle::Upper => new_name.to_uppercase(),
        CaseStyle::Lower => new_name.to_lowercase(),
        CaseStyle::Camel => camel_case(new_name),
        CaseStyle::Unrecognized => new_name.to_string(),
    }
}

/// Result of [`NamePattern::replace`].
#[derive(Debug)]
pub struct Substitution<'t> {
    pub text: Cow<'t, str>,
    /// Occurrences whose casing was unrecognized, in order of appearance.
    pub unrecognized: Vec<String>,
}

impl Substitution<'_> {
    pub fn changed(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }
}

/// Matcher for the old name, compiled once per run.
///
/// The old name matches in any casing. Its camel-case form matches exactly,
/// so `OldName` is found when the old name is `old_name` while `OLDNAME` and
/// `oldname` are not.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    old_name: String,
    new_name: String,
}

impl NamePattern {
    pub fn new(old_name: &str, new_name: &str) -> Result<Self> {
        if old_name.is_empty() {
            return Err(Error::EmptyName);
        }

        let camel = camel_case(old_name);
        let source = if camel.is_empty() || camel.to_lowercase() == old_name.to_lowercase() {
            format!("(?i:{})", regex::escape(old_name))
        } else {
            format!("(?i:{})|{}", regex::escape(old_name), regex::escape(&camel))
        };

        let regex = Regex::new(&source).map_err(|source| Error::Pattern {
            name: old_name.to_string(),
            source,
        })?;

        Ok(Self {
            regex,
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        })
    }

    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every occurrence in `text`, adapting the case of each one.
    pub fn replace<'t>(&self, text: &'t str) -> Substitution<'t> {
        let mut unrecognized = Vec::new();
        let replaced = self.regex.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            if detect_case(matched, &self.old_name) == CaseStyle::Unrecognized {
                unrecognized.push(matched.to_string());
            }
            case_adapt(matched, &self.old_name, &self.new_name)
        });

        // An identical replacement still allocates; report it as unchanged.
        let text = match replaced {
            Cow::Owned(owned) if owned == text => Cow::Borrowed(text),
            other => other,
        };

        Substitution { text, unrecognized }
    }
}
