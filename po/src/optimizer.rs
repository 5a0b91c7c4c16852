//! Prompt optimizer
//!
//! Renders a prompt together with the instructions for a tone into the fixed
//! instruction block handed to the model.

use std::path::Path;

use tracing::debug;

use crate::error::ProfileError;
use crate::profile::ProfileStore;

/// Opening line of every optimized prompt
pub const PREAMBLE: &str = "Please respond to the following prompt with a detailed and well-structured answer.";

/// Heading above the instruction bullets
pub const INSTRUCTIONS_HEADING: &str = "Instructions for the response:";

/// Marker that starts every instruction line
pub const BULLET: &str = "- ";

const BULLET_SEPARATOR: &str = "\n- ";

const TRAILING_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Trim whitespace, then drop any run of trailing `.`, `?` or `!`
///
/// Only the outer whitespace is trimmed, so `"Why ?"` becomes `"Why "`.
pub fn clean_prompt(prompt: &str) -> &str {
    prompt.trim().trim_end_matches(TRAILING_PUNCTUATION)
}

/// Turns raw prompts into instruction blocks using one owned profile
#[derive(Debug, Clone, Default)]
pub struct PromptOptimizer {
    store: ProfileStore,
}

impl PromptOptimizer {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Create an optimizer whose profile is loaded from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        ProfileStore::load_from_file(path).map(Self::new)
    }

    /// The profile store this optimizer draws instructions from
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Render `prompt` with the baseline and `tone` instructions appended
    pub fn optimize(&self, prompt: &str, tone: &str) -> String {
        let base_prompt = clean_prompt(prompt);
        let instructions = self.store.instructions_for(tone);
        debug!(
            %tone,
            prompt_len = base_prompt.len(),
            instruction_count = instructions.len(),
            "PromptOptimizer::optimize: called"
        );

        let block = instructions.join(BULLET_SEPARATOR);
        format!("{PREAMBLE}\nPrompt: {base_prompt}.\n\n{INSTRUCTIONS_HEADING}\n{BULLET}{block}")
    }
}
