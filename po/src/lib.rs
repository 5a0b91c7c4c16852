//! promptopt - prompt optimizer for large language models
//!
//! Appends a fixed set of style and tone instructions to a prompt, producing
//! an instruction block ready to hand to a model.
//!
//! # Profiles
//!
//! Instructions come from a [`Profile`]: baseline instructions that always
//! apply plus extra instructions per tone. The built-in profile can be
//! replaced with a JSON document:
//!
//! ```text
//! {
//!   "base_instructions": ["Use clear and concise language"],
//!   "tone_specific": { "formal": ["Maintain a professional tone."] }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use promptopt::PromptOptimizer;
//!
//! let optimizer = PromptOptimizer::default();
//! let output = optimizer.optimize("What is the capital of France?", "formal");
//! assert!(output.contains("Prompt: What is the capital of France.\n"));
//! ```

pub mod cli;
pub mod config;
mod error;
mod optimizer;
mod profile;

pub use cli::Tone;
pub use error::ProfileError;
pub use optimizer::{BULLET, INSTRUCTIONS_HEADING, PREAMBLE, PromptOptimizer, clean_prompt};
pub use profile::{DEFAULT_PROFILE, Profile, ProfileStore};

/// Text shown when reading the prompt from stdin
pub const STDIN_PROMPT: &str = "Enter a prompt: ";
