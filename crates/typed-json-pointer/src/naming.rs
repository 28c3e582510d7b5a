//! Serialized member names.
//!
//! A member's segment is its explicit wire name when it has one. Otherwise a
//! configured override or naming policy is applied to the declared identifier.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Member;

/// Maps a declared identifier to its wire name.
pub trait NamingPolicy: Send + Sync {
    fn convert_name(&self, name: &str) -> String;
}

impl<F> NamingPolicy for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Stock naming policies of the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownNamingPolicy {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case_lower")]
    SnakeCaseLower,
    #[serde(rename = "SNAKE_CASE_UPPER")]
    SnakeCaseUpper,
    #[serde(rename = "kebab-case-lower")]
    KebabCaseLower,
    #[serde(rename = "KEBAB-CASE-UPPER")]
    KebabCaseUpper,
}

impl NamingPolicy for KnownNamingPolicy {
    fn convert_name(&self, name: &str) -> String {
        match self {
            KnownNamingPolicy::CamelCase => camel_case(name),
            KnownNamingPolicy::SnakeCaseLower => separated(name, '_', false),
            KnownNamingPolicy::SnakeCaseUpper => separated(name, '_', true),
            KnownNamingPolicy::KebabCaseLower => separated(name, '-', false),
            KnownNamingPolicy::KebabCaseUpper => separated(name, '-', true),
        }
    }
}

/// Naming configuration consulted while building a pointer.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{KnownNamingPolicy, NamingOptions};
///
/// let options = NamingOptions::new()
///     .with_policy(KnownNamingPolicy::CamelCase)
///     .with_override("Id", "_id");
/// assert!(options.policy().is_some());
/// assert_eq!(options.override_for("Id"), Some("_id"));
/// ```
#[derive(Default)]
pub struct NamingOptions {
    policy: Option<Box<dyn NamingPolicy>>,
    overrides: HashMap<String, String>,
}

impl NamingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global naming policy, replacing any previous one.
    pub fn with_policy(mut self, policy: impl NamingPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Set the wire name of every member declared as `member`.
    pub fn with_override(mut self, member: impl Into<String>, json_name: impl Into<String>) -> Self {
        self.overrides.insert(member.into(), json_name.into());
        self
    }

    pub fn policy(&self) -> Option<&dyn NamingPolicy> {
        self.policy.as_deref()
    }

    /// Case-sensitive override lookup.
    pub fn override_for(&self, member: &str) -> Option<&str> {
        self.overrides.get(member).map(String::as_str)
    }
}

impl fmt::Debug for NamingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingOptions")
            .field("policy", &self.policy.as_ref().map(|_| ".."))
            .field("overrides", &self.overrides)
            .finish()
    }
}

/// Resolve the segment name of a member access.
///
/// The member's own wire name always wins, then a configured override, then
/// the naming policy. Without any of them the declared identifier is used.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{resolve_member_name, KnownNamingPolicy, Member, NamingOptions};
///
/// let options = NamingOptions::new().with_policy(KnownNamingPolicy::CamelCase);
/// assert_eq!(resolve_member_name(&Member::new("FirstName"), Some(&options)), "firstName");
/// assert_eq!(
///     resolve_member_name(&Member::with_json_name("FirstName", "given"), Some(&options)),
///     "given"
/// );
/// assert_eq!(resolve_member_name(&Member::new("FirstName"), None), "FirstName");
/// ```
pub fn resolve_member_name(member: &Member, options: Option<&NamingOptions>) -> String {
    if let Some(json_name) = &member.json_name {
        return json_name.clone();
    }
    let Some(options) = options else {
        return member.name.clone();
    };
    if let Some(json_name) = options.override_for(&member.name) {
        return json_name.to_string();
    }
    match options.policy() {
        Some(policy) => policy.convert_name(&member.name),
        None => member.name.clone(),
    }
}

/// Lowercase the leading run of capitals. When the run is followed by a
/// lowercase letter, its last capital starts the next word and stays.
fn camel_case(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    if !chars.first().is_some_and(|c| c.is_uppercase()) {
        return name.to_string();
    }

    for i in 0..chars.len() {
        if i == 1 && !chars[i].is_uppercase() {
            break;
        }
        if i > 0 {
            if let Some(&next) = chars.get(i + 1) {
                if !next.is_uppercase() {
                    if next == ' ' {
                        chars[i] = to_lower(chars[i]);
                    }
                    break;
                }
            }
        }
        chars[i] = to_lower(chars[i]);
    }

    chars.into_iter().collect()
}

/// Single-char case mappings. A char whose mapping expands to several chars
/// (`'İ'`, `'ß'`) keeps only the first char of the expansion.
fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Unicode `Zs` (space separator) characters.
fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        ' ' | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SeparatorState {
    NotStarted,
    Uppercase,
    LowercaseOrDigit,
    Space,
}

/// Insert `separator` between words, in lower or upper case.
///
/// Words start at an uppercase letter that follows a lowercase letter, a digit
/// or a space, and at the last capital of an uppercase run followed by a
/// lowercase letter. Spaces become a single separator between words and are
/// dropped at both ends. Any other non-alphanumeric char is written as is and
/// starts over, so `_Id` stays `_id` instead of colliding with `Id`.
fn separated(name: &str, separator: char, upper: bool) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut state = SeparatorState::NotStarted;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let split = match state {
                SeparatorState::NotStarted => false,
                SeparatorState::LowercaseOrDigit | SeparatorState::Space => true,
                // HTTPServer: the S starts a word
                SeparatorState::Uppercase => chars.get(i + 1).is_some_and(|n| n.is_lowercase()),
            };
            if split {
                out.push(separator);
            }
            out.push(if upper { c } else { to_lower(c) });
            state = SeparatorState::Uppercase;
        } else if c.is_lowercase() || c.is_ascii_digit() {
            if state == SeparatorState::Space {
                out.push(separator);
            }
            out.push(if upper { to_upper(c) } else { c });
            state = SeparatorState::LowercaseOrDigit;
        } else if is_space_separator(c) {
            if state != SeparatorState::NotStarted {
                state = SeparatorState::Space;
            }
        } else {
            out.push(c);
            state = SeparatorState::NotStarted;
        }
    }
    out
}
