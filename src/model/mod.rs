// File: ./src/model/mod.rs
pub mod classifier;
pub mod event;
pub mod matcher;
pub mod parser;
pub mod progress;
pub mod subject;

pub use classifier::{Intent, detect_intent};
pub use event::{CalendarEvent, EventStatus};
pub use matcher::find_target_event;
pub use parser::{ParsedMessage, parse_message};
pub use progress::{ProgressSnapshot, analyze_progress};
pub use subject::Subject;
