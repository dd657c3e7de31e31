//! Domain models for the promptgen service.

pub mod preference;

pub use preference::CharacterOption;
