pub mod app;
pub mod config;
pub mod data;
pub mod drill;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;
pub mod vocab;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use data::{DataError, bundled_vocab, bundled_words};
pub use drill::DrillSession;
pub use models::{AppState, Script, VocabItem, WordItem};
pub use quiz::QuizSession;
pub use session::{handle_drill_input, handle_quiz_input, handle_vocab_input};
pub use vocab::VocabBrowser;
