//! Instruction profiles
//!
//! A profile is a two-level instruction lookup: baseline instructions that
//! always apply, plus extra instructions keyed by tone name. The built-in
//! profile is used unless a JSON document replaces it.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ProfileError;

/// Built-in profile used when no profile document is supplied
pub static DEFAULT_PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    base_instructions: vec![
        "Use clear and concise language".to_string(),
        "Provide examples when relevant".to_string(),
        "Structure the response in short paragraphs".to_string(),
    ],
    tone_specific: BTreeMap::from([
        ("formal".to_string(), vec!["Maintain a professional tone.".to_string()]),
        (
            "creative".to_string(),
            vec![
                "Feel free to use expressive language and imagery.".to_string(),
                "Incorporate metaphors or analogies where appropriate.".to_string(),
            ],
        ),
        (
            "informal".to_string(),
            vec!["Write in a friendly and conversational style.".to_string()],
        ),
    ]),
});

/// Baseline and tone-specific instructions
///
/// Fields absent from a document deserialize as empty. They are never
/// filled in from [`DEFAULT_PROFILE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Instructions applied to every prompt, in render order
    #[serde(default)]
    pub base_instructions: Vec<String>,

    /// Extra instructions per tone name, in render order
    #[serde(default)]
    pub tone_specific: BTreeMap<String, Vec<String>>,
}

impl Profile {
    /// Tone names this profile defines, sorted
    pub fn tones(&self) -> Vec<&str> {
        self.tone_specific.keys().map(String::as_str).collect()
    }
}

/// Read-only holder of the profile an optimizer draws instructions from
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: Profile,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ProfileStore {
    /// Create a store from the given profile, or the built-in one if `None`
    pub fn new(profile: Option<Profile>) -> Self {
        debug!(custom = profile.is_some(), "ProfileStore::new: called");
        Self {
            profile: profile.unwrap_or_else(|| DEFAULT_PROFILE.clone()),
        }
    }

    /// Load a profile from a JSON document on disk
    ///
    /// A document that is `null` or an empty object counts as no profile and
    /// yields the built-in one.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        debug!(?path, "ProfileStore::load_from_file: called");

        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ProfileError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ProfileError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let profile = parse_profile(&content).map_err(|source| ProfileError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        match &profile {
            Some(p) => info!(
                "Loaded profile from {} ({} base instructions, {} tones)",
                path.display(),
                p.base_instructions.len(),
                p.tone_specific.len()
            ),
            None => info!("Profile {} is empty, using built-in profile", path.display()),
        }

        Ok(Self::new(profile))
    }

    /// The profile this store holds
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Baseline instructions followed by the instructions for `tone`
    ///
    /// Unknown tones contribute nothing. Order is preserved and duplicates are kept.
    pub fn instructions_for(&self, tone: &str) -> Vec<&str> {
        debug!(%tone, "ProfileStore::instructions_for: called");
        let tone_specific = self
            .profile
            .tone_specific
            .get(tone)
            .map(Vec::as_slice)
            .unwrap_or_default();

        self.profile
            .base_instructions
            .iter()
            .chain(tone_specific)
            .map(String::as_str)
            .collect()
    }
}

fn parse_profile(content: &str) -> serde_json::Result<Option<Profile>> {
    let document: Value = serde_json::from_str(content)?;
    match document {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(map) => serde_json::from_value(Value::Object(map)).map(Some),
        other => Err(serde_json::Error::invalid_type(
            unexpected(&other),
            &"a profile object",
        )),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
