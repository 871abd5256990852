pub mod cli;
pub mod config;
pub mod corrector;
pub mod dict;
pub mod logger;

pub use config::Config;
pub use corrector::SpellCorrector;
pub use logger::CorrectionLog;

/// A single committed substitution: the word as it appeared in the source
/// text and the word that replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}
