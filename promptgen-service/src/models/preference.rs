use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the video's main character is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterOption {
    /// Invent a fresh character for each video.
    #[default]
    New,
    /// Keep the character consistent with earlier videos.
    Consistent,
}

impl CharacterOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterOption::New => "new",
            CharacterOption::Consistent => "consistent",
        }
    }

    /// Prompt generation treats anything other than `consistent` as `new`.
    pub fn from_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for CharacterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCharacterOption(pub String);

impl fmt::Display for UnknownCharacterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown character option '{}': expected 'new' or 'consistent'",
            self.0
        )
    }
}

impl std::error::Error for UnknownCharacterOption {}

impl FromStr for CharacterOption {
    type Err = UnknownCharacterOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "new" => Ok(CharacterOption::New),
            "consistent" => Ok(CharacterOption::Consistent),
            other => Err(UnknownCharacterOption(other.to_string())),
        }
    }
}
