//! Prompt templates.
//!
//! Every builder is a pure function of its inputs so the exact text sent to
//! the model can be unit tested without a provider.

pub mod character;
pub mod copywriting;
pub mod external;
pub mod video;

/// A prompt rendered once per output language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub id: String,
    pub en: String,
}
