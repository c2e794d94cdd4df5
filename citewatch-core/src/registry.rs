//! Citation tag registry and normalizer
//!
//! Maps heterogeneous tag spellings (`880`, `F880`, `f-0880`, `F 0880`) onto a
//! canonical registry entry keyed by prefix plus 4-digit number (`F0880`).
//!
//! Global invariants enforced:
//! - `resolve` is total: every input yields a fully populated definition
//! - The built-in registry is initialized once and shared by reference
//! - Bare numbers try the `F` prefix before `E`
//! - Empty input never reaches normalization

mod data;

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Title given to tags that are not in the registry
pub const UNKNOWN_TAG_NAME: &str = "Unknown Tag";
/// Title given to empty input
pub const NO_DEFINITION_NAME: &str = "No definition available";
/// Category of unknown and empty tags
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Bare numbers are tried against these prefixes, in order
const BARE_NUMBER_PREFIXES: [char; 2] = ['F', 'E'];

/// Reference definition of one citation tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationDefinition {
    /// Canonical display tag, e.g. `F-0880`
    pub tag: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub prefix: String,
}

/// Which path produced a resolved definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resolution", content = "definition", rename_all = "lowercase")]
pub enum TagResolution {
    Known(CitationDefinition),
    Unknown(CitationDefinition),
    Empty(CitationDefinition),
}

impl TagResolution {
    pub fn definition(&self) -> &CitationDefinition {
        match self {
            TagResolution::Known(d) | TagResolution::Unknown(d) | TagResolution::Empty(d) => d,
        }
    }

    pub fn into_definition(self) -> CitationDefinition {
        match self {
            TagResolution::Known(d) | TagResolution::Unknown(d) | TagResolution::Empty(d) => d,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, TagResolution::Known(_))
    }
}

/// Immutable set of citation definitions keyed by normalized code
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, CitationDefinition>,
}

impl Registry {
    /// The compiled-in registry, built on first use
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let definitions = data::SECTIONS.iter().flat_map(|(category, rows)| {
                rows.iter().map(move |(tag, name, description)| CitationDefinition {
                    tag: tag.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    category: category.to_string(),
                    prefix: tag.chars().take(1).collect(),
                })
            });
            let mut entries = BTreeMap::new();
            for definition in definitions {
                if let Some(key) = direct_code(&clean(&definition.tag)) {
                    entries.insert(key, definition);
                }
            }
            Registry { entries }
        })
    }

    /// Build a registry from definitions, rejecting malformed or duplicate tags
    pub fn from_definitions(definitions: Vec<CitationDefinition>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for mut definition in definitions {
            let key = match direct_code(&clean(&definition.tag)) {
                Some(key) => key,
                None => bail!(
                    "citation tag '{}' is not a letter followed by digits",
                    definition.tag
                ),
            };
            if definition.prefix.is_empty() {
                definition.prefix = key.chars().take(1).collect();
            }
            if entries.contains_key(&key) {
                bail!("duplicate citation tag '{}' (normalized {})", definition.tag, key);
            }
            entries.insert(key, definition);
        }
        Ok(Registry { entries })
    }

    /// Parse a JSON array of definitions
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definitions: Vec<CitationDefinition> =
            serde_json::from_str(json).context("failed to parse citation registry JSON")?;
        Self::from_definitions(definitions)
    }

    /// Load a registry file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read registry file: {}", path.display()))?;
        let registry = Self::from_json_str(&content)
            .with_context(|| format!("invalid registry file: {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = registry.len(), "loaded citation registry");
        Ok(registry)
    }

    /// Definition for an already-normalized key such as `F0880`
    pub fn get(&self, code: &str) -> Option<&CitationDefinition> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All definitions in key order
    pub fn definitions(&self) -> impl Iterator<Item = &CitationDefinition> {
        self.entries.values()
    }

    /// Resolve any tag spelling, never failing.
    ///
    /// Empty and whitespace-only input both return the "No definition
    /// available" placeholder; input with any other character goes through
    /// normalization and, failing a match, yields an "Unknown Tag" entry.
    pub fn resolve(&self, raw: &str) -> CitationDefinition {
        self.resolve_detailed(raw).into_definition()
    }

    /// Resolve and report which path produced the definition
    pub fn resolve_detailed(&self, raw: &str) -> TagResolution {
        if raw.trim().is_empty() {
            return TagResolution::Empty(empty_definition());
        }

        let cleaned = clean(raw);
        for code in candidate_codes(&cleaned) {
            if let Some(definition) = self.entries.get(&code) {
                return TagResolution::Known(definition.clone());
            }
        }

        tracing::debug!(raw, cleaned = %cleaned, "unknown citation tag");
        TagResolution::Unknown(unknown_definition(raw, &cleaned))
    }

    /// Normalized lookup key this registry matches `raw` to, if any
    pub fn matched_code(&self, raw: &str) -> Option<String> {
        candidate_codes(&clean(raw))
            .into_iter()
            .find(|code| self.entries.contains_key(code))
    }
}

/// Resolve against the built-in registry; whitespace-only input counts as empty
pub fn resolve(raw: &str) -> CitationDefinition {
    Registry::builtin().resolve(raw)
}

/// Resolve against the built-in registry, keeping the resolution path
pub fn resolve_detailed(raw: &str) -> TagResolution {
    Registry::builtin().resolve_detailed(raw)
}

/// Primary lookup key for `raw`: `F` is assumed for bare numbers
pub fn normalize_code(raw: &str) -> Option<String> {
    candidate_codes(&clean(raw)).into_iter().next()
}

/// Strip non-alphanumerics and uppercase
fn clean(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Lookup keys to try, in order, for cleaned input
fn candidate_codes(cleaned: &str) -> Vec<String> {
    if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
        let digits = pad_digits(cleaned);
        return BARE_NUMBER_PREFIXES
            .iter()
            .map(|prefix| format!("{}{}", prefix, digits))
            .collect();
    }
    direct_code(cleaned).into_iter().collect()
}

/// `<LETTER><DIGITS>` to its key, `None` for any other shape
fn direct_code(cleaned: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^([A-Z])([0-9]+)$").unwrap());
    let caps = re.captures(cleaned)?;
    Some(format!("{}{}", &caps[1], pad_digits(&caps[2])))
}

/// Zero-pad a digit run to 4 places; surplus leading zeros are dropped
fn pad_digits(digits: &str) -> String {
    let significant = digits.trim_start_matches('0');
    format!("{:0>4}", significant)
}

fn unknown_definition(raw: &str, cleaned: &str) -> CitationDefinition {
    let prefix = cleaned
        .chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(String::from)
        .unwrap_or_default();
    CitationDefinition {
        tag: raw.to_string(),
        name: UNKNOWN_TAG_NAME.to_string(),
        description: format!("No reference definition found for citation tag '{}'.", raw),
        category: UNKNOWN_CATEGORY.to_string(),
        prefix,
    }
}

fn empty_definition() -> CitationDefinition {
    CitationDefinition {
        tag: String::new(),
        name: NO_DEFINITION_NAME.to_string(),
        description: "No citation tag was supplied.".to_string(),
        category: UNKNOWN_CATEGORY.to_string(),
        prefix: String::new(),
    }
}
