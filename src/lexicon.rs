// File: ./src/lexicon.rs
//! Vocabulary tables driving extraction and classification.
//!
//! Every trigger word the interpreter reacts to lives here, in one
//! serde-friendly struct, so a different locale (or a host with its own
//! jargon) is a data swap rather than a code change. All entries are stored
//! pre-folded: lowercase, accents stripped (see [`fold`]). A term containing
//! a space is matched as a substring of the folded message; a single word is
//! only matched against whole tokens, so "mat" never fires inside
//! "informática".

use crate::model::subject::Subject;
use anyhow::{Context, Result, bail};
use chrono::Weekday;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Lowercases and strips the accents that pt-BR users type inconsistently.
/// "Física" and "fisica" must land on the same bytes before any table lookup.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            _ => c,
        })
        .collect()
}

/// Splits folded text into tokens with leading/trailing punctuation removed.
/// Inner punctuation survives, so "segunda-feira" stays one token.
pub(crate) fn split_tokens(folded: &str) -> Vec<String> {
    folded
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Canonical form used for whole-message tables (greetings, confirmations):
/// folded tokens re-joined with single spaces, punctuation gone.
pub(crate) fn key_phrase(raw: &str) -> String {
    split_tokens(&fold(raw)).join(" ")
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_subjects() -> Vec<(String, Subject)> {
    [
        ("matematica", Subject::Matematica),
        ("mat", Subject::Matematica),
        ("fisica", Subject::Fisica),
        ("fis", Subject::Fisica),
        ("quimica", Subject::Quimica),
        ("qui", Subject::Quimica),
        ("biologia", Subject::Biologia),
        ("bio", Subject::Biologia),
        ("historia", Subject::Historia),
        ("hist", Subject::Historia),
        ("geografia", Subject::Geografia),
        ("geo", Subject::Geografia),
        ("portugues", Subject::Portugues),
        ("port", Subject::Portugues),
        ("ingles", Subject::Ingles),
        ("ing", Subject::Ingles),
        ("espanhol", Subject::Espanhol),
        ("esp", Subject::Espanhol),
        ("literatura", Subject::Literatura),
        ("lit", Subject::Literatura),
        ("redacao", Subject::Redacao),
        ("red", Subject::Redacao),
        ("filosofia", Subject::Filosofia),
        ("fil", Subject::Filosofia),
        ("sociologia", Subject::Sociologia),
        ("soc", Subject::Sociologia),
        ("artes", Subject::Artes),
        ("arte", Subject::Artes),
    ]
    .iter()
    .map(|(alias, subject)| (alias.to_string(), *subject))
    .collect()
}

fn default_greetings() -> Vec<String> {
    words(&[
        "oi",
        "ola",
        "opa",
        "eai",
        "e ai",
        "bom dia",
        "boa tarde",
        "boa noite",
        "tudo bem",
        "tudo bom",
        "como vai",
        "oi tudo bem",
        "ola tudo bem",
        "bom dia tudo bem",
    ])
}

fn default_scheduling_verbs() -> Vec<String> {
    words(&[
        "agendar", "agende", "agenda", "criar", "crie", "cria", "marcar", "marque", "marca",
        "adicionar", "adicione", "adiciona",
    ])
}

fn default_deletion_verbs() -> Vec<String> {
    words(&[
        "excluir", "exclua", "exclui", "deletar", "delete", "deleta", "remover", "remova",
        "remove", "cancelar", "cancele", "cancela", "apagar", "apague", "apaga", "eliminar",
        "elimine", "elimina", "desmarcar", "desmarque", "desmarca",
    ])
}

fn default_purge_verbs() -> Vec<String> {
    words(&["limpar", "limpe", "limpa", "zerar", "zere", "zera"])
}

fn default_modification_verbs() -> Vec<String> {
    words(&[
        "editar",
        "edite",
        "edita",
        "alterar",
        "altere",
        "altera",
        "modificar",
        "modifique",
        "modifica",
        "mudar",
        "mude",
        "muda",
        "trocar",
        "troque",
        "troca",
        "reagendar",
        "reagende",
        "reagenda",
        "remarcar",
        "remarque",
        "remarca",
        "mover",
        "mova",
        "move",
        "transferir",
        "transfira",
        "transfere",
        "ajustar",
        "ajuste",
        "ajusta",
        "adiar",
        "adie",
        "adia",
    ])
}

fn default_confirmation_phrases() -> Vec<String> {
    words(&[
        "pode agendar",
        "pode marcar",
        "pode criar",
        "sim, agende",
        "sim agende",
        "sim, pode",
        "agende",
        "agendar",
        "confirmo",
        "confirmar",
        "fechado",
    ])
}

fn default_exact_confirmations() -> Vec<String> {
    words(&["sim", "ok", "pode", "claro", "isso", "beleza"])
}

fn default_list_phrases() -> Vec<String> {
    words(&[
        "quais",
        "que atividades",
        "o que tenho",
        "o que tem",
        "mostrar",
        "mostre",
        "listar",
        "liste",
        "me mostre",
        "agenda de hoje",
        "minha agenda",
        "meus eventos",
        "minhas atividades",
    ])
}

fn default_have_markers() -> Vec<String> {
    words(&["tenho", "tem"])
}

fn default_question_words() -> Vec<String> {
    words(&["que"])
}

fn default_query_day_markers() -> Vec<String> {
    words(&["hoje", "amanha", "no dia"])
}

fn default_totality_markers() -> Vec<String> {
    words(&["todos", "todas", "tudo", "toda a agenda", "todo o calendario"])
}

fn default_calendar_nouns() -> Vec<String> {
    words(&[
        "evento",
        "eventos",
        "atividade",
        "atividades",
        "agenda",
        "calendario",
        "compromisso",
        "compromissos",
        "tarefa",
        "tarefas",
        "aula",
        "aulas",
    ])
}

fn default_specific_date_markers() -> Vec<String> {
    words(&["do dia", "da data", "de hoje", "de amanha"])
}

fn default_week_phrases() -> Vec<String> {
    words(&[
        "da semana",
        "desta semana",
        "dessa semana",
        "essa semana",
        "esta semana",
        "semana que vem",
        "proxima semana",
    ])
}

fn default_plan_phrases() -> Vec<String> {
    words(&[
        "crie um cronograma",
        "criar um cronograma",
        "criar cronograma",
        "monte um cronograma",
        "montar um cronograma",
        "gere atividades",
        "gerar atividades",
        "monte um plano",
        "montar um plano",
        "organize minha semana",
        "organizar minha semana",
        "cronograma de estudos",
        "cronograma de estudo",
        "plano de estudos",
        "plano de estudo",
    ])
}

fn default_activity_plan_markers() -> Vec<String> {
    words(&["atividades para"])
}

fn default_horizon_markers() -> Vec<String> {
    words(&["semana", "proximos dias"])
}

fn default_progress_terms() -> Vec<String> {
    words(&[
        "progresso",
        "analise",
        "analisar",
        "desempenho",
        "rendimento",
        "estatistica",
        "estatisticas",
        "como estou",
        "como esta meu",
        "relatorio",
    ])
}

fn default_suggestion_terms() -> Vec<String> {
    words(&[
        "sugira",
        "sugerir",
        "sugere",
        "sugestao",
        "sugestoes",
        "recomende",
        "recomendar",
        "recomenda",
        "recomendacao",
        "dica",
        "dicas",
        "o que estudar",
        "que materia",
        "qual materia",
    ])
}

fn default_prepositions() -> Vec<String> {
    words(&["para", "pra", "de"])
}

fn default_day_word() -> String {
    "dia".to_string()
}

fn default_relative_days() -> Vec<(String, i64)> {
    // Longest phrase first: "depois de amanha" must win over its own
    // "amanha" suffix.
    vec![
        ("depois de amanha".to_string(), 2),
        ("hoje".to_string(), 0),
        ("amanha".to_string(), 1),
        ("ontem".to_string(), -1),
    ]
}

fn default_weekdays() -> Vec<(String, Weekday)> {
    [
        ("segunda", Weekday::Mon),
        ("segunda-feira", Weekday::Mon),
        ("terca", Weekday::Tue),
        ("terca-feira", Weekday::Tue),
        ("quarta", Weekday::Wed),
        ("quarta-feira", Weekday::Wed),
        ("quinta", Weekday::Thu),
        ("quinta-feira", Weekday::Thu),
        ("sexta", Weekday::Fri),
        ("sexta-feira", Weekday::Fri),
        ("sabado", Weekday::Sat),
        ("domingo", Weekday::Sun),
    ]
    .iter()
    .map(|(name, day)| (name.to_string(), *day))
    .collect()
}

fn default_months() -> Vec<(String, u32)> {
    [
        ("janeiro", 1),
        ("fevereiro", 2),
        ("marco", 3),
        ("abril", 4),
        ("maio", 5),
        ("junho", 6),
        ("julho", 7),
        ("agosto", 8),
        ("setembro", 9),
        ("outubro", 10),
        ("novembro", 11),
        ("dezembro", 12),
    ]
    .iter()
    .map(|(name, month)| (name.to_string(), *month))
    .collect()
}

fn default_next_markers() -> Vec<String> {
    words(&["proximo", "proxima"])
}

fn default_last_markers() -> Vec<String> {
    words(&["ultimo", "ultima"])
}

static BUILTIN: Lazy<Lexicon> = Lazy::new(Lexicon::default);

/// The complete vocabulary of the interpreter. Field order mirrors the
/// pipeline: entity tables first, then the intent trigger tables in the
/// order the classification rules consult them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Ordered alias table; the first alias found in a message decides the
    /// subject, so long/specific aliases must come before short ones.
    #[serde(default = "default_subjects")]
    pub subjects: Vec<(String, Subject)>,
    /// Whole-message greetings in [`key_phrase`] form.
    #[serde(default = "default_greetings")]
    pub greetings: Vec<String>,
    #[serde(default = "default_scheduling_verbs")]
    pub scheduling_verbs: Vec<String>,
    #[serde(default = "default_deletion_verbs")]
    pub deletion_verbs: Vec<String>,
    /// "limpar" and friends: deletion verbs that only count when aimed at a
    /// calendar noun.
    #[serde(default = "default_purge_verbs")]
    pub purge_verbs: Vec<String>,
    #[serde(default = "default_modification_verbs")]
    pub modification_verbs: Vec<String>,
    /// Substring/token confirmations ("pode agendar").
    #[serde(default = "default_confirmation_phrases")]
    pub confirmation_phrases: Vec<String>,
    /// Confirmations that must be the entire message ("sim", "ok").
    #[serde(default = "default_exact_confirmations")]
    pub exact_confirmations: Vec<String>,
    #[serde(default = "default_list_phrases")]
    pub list_phrases: Vec<String>,
    #[serde(default = "default_have_markers")]
    pub have_markers: Vec<String>,
    #[serde(default = "default_question_words")]
    pub question_words: Vec<String>,
    #[serde(default = "default_query_day_markers")]
    pub query_day_markers: Vec<String>,
    #[serde(default = "default_totality_markers")]
    pub totality_markers: Vec<String>,
    #[serde(default = "default_calendar_nouns")]
    pub calendar_nouns: Vec<String>,
    /// Phrases that pin a deletion to one date and therefore veto
    /// "delete everything".
    #[serde(default = "default_specific_date_markers")]
    pub specific_date_markers: Vec<String>,
    #[serde(default = "default_week_phrases")]
    pub week_phrases: Vec<String>,
    #[serde(default = "default_plan_phrases")]
    pub plan_phrases: Vec<String>,
    #[serde(default = "default_activity_plan_markers")]
    pub activity_plan_markers: Vec<String>,
    #[serde(default = "default_horizon_markers")]
    pub horizon_markers: Vec<String>,
    #[serde(default = "default_progress_terms")]
    pub progress_terms: Vec<String>,
    #[serde(default = "default_suggestion_terms")]
    pub suggestion_terms: Vec<String>,
    /// "para"/"de": a subject plus one of these reads as a creation request.
    #[serde(default = "default_prepositions")]
    pub prepositions: Vec<String>,
    /// The word introducing a day-of-month ("dia 15").
    #[serde(default = "default_day_word")]
    pub day_word: String,
    /// Keyword to day-offset table, longest phrases first.
    #[serde(default = "default_relative_days")]
    pub relative_days: Vec<(String, i64)>,
    #[serde(default = "default_weekdays")]
    pub weekdays: Vec<(String, Weekday)>,
    #[serde(default = "default_months")]
    pub months: Vec<(String, u32)>,
    /// "próximo": resolve against the earliest strictly-future event.
    #[serde(default = "default_next_markers")]
    pub next_markers: Vec<String>,
    /// "último": resolve against the latest event on record.
    #[serde(default = "default_last_markers")]
    pub last_markers: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            subjects: default_subjects(),
            greetings: default_greetings(),
            scheduling_verbs: default_scheduling_verbs(),
            deletion_verbs: default_deletion_verbs(),
            purge_verbs: default_purge_verbs(),
            modification_verbs: default_modification_verbs(),
            confirmation_phrases: default_confirmation_phrases(),
            exact_confirmations: default_exact_confirmations(),
            list_phrases: default_list_phrases(),
            have_markers: default_have_markers(),
            question_words: default_question_words(),
            query_day_markers: default_query_day_markers(),
            totality_markers: default_totality_markers(),
            calendar_nouns: default_calendar_nouns(),
            specific_date_markers: default_specific_date_markers(),
            week_phrases: default_week_phrases(),
            plan_phrases: default_plan_phrases(),
            activity_plan_markers: default_activity_plan_markers(),
            horizon_markers: default_horizon_markers(),
            progress_terms: default_progress_terms(),
            suggestion_terms: default_suggestion_terms(),
            prepositions: default_prepositions(),
            day_word: default_day_word(),
            relative_days: default_relative_days(),
            weekdays: default_weekdays(),
            months: default_months(),
            next_markers: default_next_markers(),
            last_markers: default_last_markers(),
        }
    }
}

impl Lexicon {
    /// The built-in pt-BR vocabulary. Shared, immutable; hosts that never
    /// configure anything use this directly.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Loads a lexicon pack from a JSON document. Missing tables fall back
    /// to the built-in pt-BR ones, so a pack only has to carry what it
    /// overrides.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon =
            serde_json::from_str(json).context("Failed to parse lexicon JSON")?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Serializes the full vocabulary, handy as a starting point for a
    /// custom pack.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize lexicon")
    }

    /// Rejects packs that would silently disable whole pipeline stages.
    pub fn validate(&self) -> Result<()> {
        if self.subjects.is_empty() {
            bail!("Lexicon has no subject aliases");
        }
        if self.weekdays.is_empty() || self.months.is_empty() {
            bail!("Lexicon is missing weekday or month names");
        }
        let blank_alias = self.subjects.iter().any(|(alias, _)| alias.trim().is_empty());
        if blank_alias {
            bail!("Lexicon contains an empty subject alias");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_case_and_accents() {
        assert_eq!(fold("FÍSICA é ótima, né?"), "fisica e otima, ne?");
        assert_eq!(fold("Redação"), "redacao");
    }

    #[test]
    fn test_split_tokens_trims_outer_punctuation_only() {
        let tokens = split_tokens("oi, tudo bem? segunda-feira!");
        assert_eq!(tokens, vec!["oi", "tudo", "bem", "segunda-feira"]);
    }

    #[test]
    fn test_key_phrase_collapses_message() {
        assert_eq!(key_phrase("  Bom DIA!!  "), "bom dia");
    }

    #[test]
    fn test_builtin_is_valid_and_round_trips() {
        let builtin = Lexicon::builtin();
        builtin.validate().unwrap();
        let json = builtin.to_json_string().unwrap();
        let reloaded = Lexicon::from_json_str(&json).unwrap();
        assert_eq!(*builtin, reloaded);
    }

    #[test]
    fn test_partial_pack_falls_back_to_builtin_tables() {
        let pack = r#"{ "greetings": ["salve"] }"#;
        let lexicon = Lexicon::from_json_str(pack).unwrap();
        assert_eq!(lexicon.greetings, vec!["salve".to_string()]);
        assert_eq!(lexicon.subjects, Lexicon::builtin().subjects);
    }

    #[test]
    fn test_empty_subject_table_is_rejected() {
        let pack = r#"{ "subjects": [] }"#;
        assert!(Lexicon::from_json_str(pack).is_err());
    }
}
