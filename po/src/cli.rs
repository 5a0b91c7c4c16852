//! CLI argument parsing for promptopt

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "po")]
#[command(author, version, about = "Optimize prompts for LLMs", long_about = None)]
pub struct Cli {
    /// Prompt text. If omitted, read from stdin
    pub prompt: Option<String>,

    /// Instruction style to apply (default: formal)
    #[arg(long, value_enum)]
    pub tone: Option<Tone>,

    /// Path to JSON file with instruction profile
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Write the optimized prompt to this file
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

/// Tone whose instructions are appended after the baseline ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Creative,
    Informal,
}

impl Tone {
    /// Key used to look the tone up in a profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Creative => "creative",
            Self::Informal => "informal",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["po", "Hello"]).unwrap();
        assert_eq!(cli.prompt.as_deref(), Some("Hello"));
        assert!(cli.tone.is_none());
        assert!(cli.profile.is_none());
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "po",
            "--tone",
            "creative",
            "--profile",
            "p.json",
            "--output-file",
            "out.txt",
            "-l",
            "debug",
            "Tell me a story",
        ])
        .unwrap();
        assert_eq!(cli.tone, Some(Tone::Creative));
        assert_eq!(cli.profile, Some(PathBuf::from("p.json")));
        assert_eq!(cli.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.prompt.as_deref(), Some("Tell me a story"));
    }

    #[test]
    fn test_prompt_is_optional() {
        let cli = Cli::try_parse_from(["po", "--tone", "informal"]).unwrap();
        assert!(cli.prompt.is_none());
        assert_eq!(cli.tone, Some(Tone::Informal));
    }

    #[test]
    fn test_rejects_unknown_tone() {
        assert!(Cli::try_parse_from(["po", "--tone", "sarcastic", "Hi"]).is_err());
    }

    #[test]
    fn test_tone_keys_match_default_profile() {
        let profile = &*crate::profile::DEFAULT_PROFILE;
        for tone in Tone::value_variants() {
            assert!(profile.tone_specific.contains_key(tone.as_str()), "missing {tone}");
        }
        assert_eq!(Tone::default(), Tone::Formal);
    }
}
