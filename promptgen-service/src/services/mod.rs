pub mod generation;
pub mod metrics;
pub mod preferences;
pub mod providers;

pub use generation::{Bilingual, Generator};
pub use preferences::{PreferenceStore, DEFAULT_USER_ID};
