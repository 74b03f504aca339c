// File: ./src/model/subject.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// The school subjects the interpreter knows about. Free text is mapped onto
/// these through the alias table in [`crate::lexicon::Lexicon`]; everything
/// else (event titles, progress buckets) carries the display name as a plain
/// string so host data stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Subject {
    Matematica,
    Fisica,
    Quimica,
    Biologia,
    Historia,
    Geografia,
    Portugues,
    Ingles,
    Espanhol,
    Literatura,
    Redacao,
    Filosofia,
    Sociologia,
    Artes,
}

impl Subject {
    /// Canonical pt-BR name, accents included. This is the form stored on
    /// calendar events and shown to users.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Subject::Matematica => "Matemática",
            Subject::Fisica => "Física",
            Subject::Quimica => "Química",
            Subject::Biologia => "Biologia",
            Subject::Historia => "História",
            Subject::Geografia => "Geografia",
            Subject::Portugues => "Português",
            Subject::Ingles => "Inglês",
            Subject::Espanhol => "Espanhol",
            Subject::Literatura => "Literatura",
            Subject::Redacao => "Redação",
            Subject::Filosofia => "Filosofia",
            Subject::Sociologia => "Sociologia",
            Subject::Artes => "Artes",
        }
    }

    /// Looks a subject up by canonical name, ignoring case and accents.
    /// Used when merging host configuration, where people type "Redacao"
    /// as often as "Redação".
    pub fn from_name(name: &str) -> Option<Subject> {
        let wanted = crate::lexicon::fold(name);
        Subject::iter().find(|s| crate::lexicon::fold(s.canonical_name()) == wanted)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}
