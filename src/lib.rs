// Crate root library declaration and module exports.
pub mod config;
pub mod lexicon;
pub mod model;

pub use config::Config;
pub use lexicon::Lexicon;
pub use model::{
    CalendarEvent, EventStatus, Intent, ParsedMessage, ProgressSnapshot, Subject,
    analyze_progress, detect_intent, find_target_event, parse_message,
};
