//! Operation name derivation from path and verb.
//!
//! The base name is computed once per operation; every other identifier
//! (function, params type, result type, per-status variants) is derived from
//! it so the names can never drift apart.
//!
//! The path is processed as a pipeline of per-segment decisions:
//! 1. split into non-empty segments,
//! 2. decide for each segment whether it is singularized,
//! 3. drop placeholder segments (`{id}`),
//! 4. prefix the verb keyword, join with hyphens and camel-case.

use std::borrow::Cow;

use tracing::warn;

use crate::descriptor::{ResponseDef, Verb};
use crate::status::StatusPhrases;
use crate::ts::utils::{TS_RESERVED_WORDS, capitalize_first};

/// Names derived for a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationNames {
    /// camelCase base name, e.g. `getUser`.
    pub base: String,
    /// Name of the generated request function.
    pub function: String,
    /// e.g. `GetUserParams`.
    pub params_type: String,
    /// e.g. `GetUserResult`.
    pub result_type: String,
    pascal: String,
}

impl OperationNames {
    /// Derive all names for an operation at `path` with `verb`.
    pub fn new(path: &str, verb: Verb) -> Self {
        let base = base_name(path, verb);
        let pascal = capitalize_first(&base);
        let function = if TS_RESERVED_WORDS.contains(base.as_str()) {
            format!("_{base}")
        } else {
            base.clone()
        };
        Self {
            params_type: format!("{pascal}Params"),
            result_type: format!("{pascal}Result"),
            function,
            base,
            pascal,
        }
    }

    /// Name of the result variant for one response, e.g. `GetUserNotFoundResult`.
    pub fn variant_type(&self, response: &ResponseDef, phrases: &dyn StatusPhrases) -> String {
        format!("{}{}Result", self.pascal, status_phrase(response, phrases))
    }
}

/// Identifier phrase for a response code.
///
/// `"default"` never consults the lookup. Codes missing from the lookup fall
/// back to `Status<code>`.
pub fn status_phrase<'a>(response: &ResponseDef, phrases: &'a dyn StatusPhrases) -> Cow<'a, str> {
    if response.is_default() {
        return Cow::Borrowed("Default");
    }
    match phrases.phrase(&response.code) {
        Some(phrase) => Cow::Borrowed(phrase),
        None => {
            warn!(code = %response.code, "Unknown status code, using generic variant name.");
            let code: String = response
                .code
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect();
            Cow::Owned(format!("Status{code}"))
        }
    }
}

/// Derive the camelCase base name of an operation.
pub fn base_name(path: &str, verb: Verb) -> String {
    let segments = path_segments(path);
    let singular = singularize_flags(&segments, verb);

    let words: Vec<&str> = std::iter::once(verb.keyword())
        .chain(
            segments
                .iter()
                .zip(singular)
                .filter(|(segment, _)| !is_placeholder(segment))
                .map(|(&segment, singular)| {
                    if singular {
                        singularize(segment)
                    } else {
                        segment
                    }
                }),
        )
        .collect();

    camel_case(&words.join("-"))
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// One flag per segment: should it lose its trailing `s`.
///
/// `get` singularizes a collection that is indexed by the following
/// placeholder. Every other verb singularizes the last literal segment.
fn singularize_flags(segments: &[&str], verb: Verb) -> Vec<bool> {
    let last_literal = segments.iter().rposition(|s| !is_placeholder(s));
    (0..segments.len())
        .map(|i| match verb {
            Verb::Get => segments.get(i + 1).is_some_and(|next| is_placeholder(next)),
            Verb::Post | Verb::Put | Verb::Patch | Verb::Delete => Some(i) == last_literal,
        })
        .collect()
}

fn singularize(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

/// camelCase a string, treating every non-alphanumeric character as a word break.
fn camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty()) {
        if result.is_empty() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_lowercase());
                result.push_str(chars.as_str());
            }
        } else {
            result.push_str(&capitalize_first(word));
        }
    }
    result
}
