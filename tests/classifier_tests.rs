use chrono::NaiveDate;
use entendi::{Intent, Lexicon, detect_intent};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn intent(message: &str) -> Intent {
    detect_intent(message, Lexicon::builtin(), today())
}

#[test]
fn test_list_events() {
    assert_eq!(intent("Quais atividades tenho essa semana?"), Intent::ListEvents);
    assert_eq!(intent("o que tenho hoje?"), Intent::ListEvents);
    assert_eq!(intent("mostrar minha agenda"), Intent::ListEvents);
    assert_eq!(intent("tem prova amanhã?"), Intent::ListEvents);
}

#[test]
fn test_listing_outranks_every_other_intent() {
    // "mostrar" claims the message before the progress rule ever runs.
    assert_eq!(intent("mostrar meu progresso"), Intent::ListEvents);
}

#[test]
fn test_delete_all_events() {
    assert_eq!(intent("excluir todos os eventos"), Intent::DeleteAllEvents);
    assert_eq!(intent("EXCLUIR TODOS OS EVENTOS"), Intent::DeleteAllEvents);
    assert_eq!(intent("apagar tudo da agenda"), Intent::DeleteAllEvents);
    assert_eq!(intent("limpar minha agenda"), Intent::DeleteAllEvents);
}

#[test]
fn test_dated_deletions_are_never_bulk() {
    // A pinned date (marker or digit) demotes "todos" to a single deletion.
    assert_eq!(intent("excluir todos os eventos do dia 5"), Intent::DeleteEvent);
    assert_eq!(intent("excluir todos os eventos de hoje"), Intent::DeleteEvent);
    assert_eq!(intent("apagar todas as atividades do dia 12"), Intent::DeleteEvent);
}

#[test]
fn test_delete_week_events() {
    assert_eq!(intent("excluir os eventos desta semana"), Intent::DeleteWeekEvents);
    assert_eq!(intent("apague as atividades da semana"), Intent::DeleteWeekEvents);
    assert_eq!(
        intent("excluir eventos da próxima semana"),
        Intent::DeleteWeekEvents
    );
}

#[test]
fn test_totality_outranks_week_scope() {
    // "todos" satisfies the bulk rule first; the week phrase never gets
    // a say.
    assert_eq!(
        intent("excluir todos os eventos da semana"),
        Intent::DeleteAllEvents
    );
}

#[test]
fn test_delete_event() {
    assert_eq!(intent("cancele a prova de física"), Intent::DeleteEvent);
    assert_eq!(intent("delete a atividade de amanhã"), Intent::DeleteEvent);
    assert_eq!(intent("remover o simulado"), Intent::DeleteEvent);
    assert_eq!(intent("excluir o evento do dia 5"), Intent::DeleteEvent);
}

#[test]
fn test_edit_event() {
    assert_eq!(intent("mude o evento de matemática"), Intent::EditEvent);
    assert_eq!(intent("alterar a prova de química"), Intent::EditEvent);
    assert_eq!(intent("ajuste a aula de inglês"), Intent::EditEvent);
    // Modification wins over creation even with a subject and date present.
    assert_eq!(
        intent("remarcar a prova de biologia para sexta"),
        Intent::EditEvent
    );
}

#[test]
fn test_direct_create_event() {
    assert_eq!(intent("agende física para amanhã"), Intent::DirectCreateEvent);
    assert_eq!(intent("prova de matemática dia 15"), Intent::DirectCreateEvent);
    assert_eq!(
        intent("crie um evento de história para segunda"),
        Intent::DirectCreateEvent
    );
}

#[test]
fn test_schedule_event_confirmations() {
    assert_eq!(intent("pode agendar"), Intent::ScheduleEvent);
    assert_eq!(intent("sim, agende"), Intent::ScheduleEvent);
    assert_eq!(intent("sim"), Intent::ScheduleEvent);
    assert_eq!(intent("Ok!"), Intent::ScheduleEvent);
}

#[test]
fn test_bare_confirmation_requires_whole_message() {
    // "ok" buried in chatter is not a confirmation.
    assert_eq!(intent("ok vou pensar e te falo"), Intent::GeneralChat);
}

#[test]
fn test_create_schedule() {
    assert_eq!(intent("crie um cronograma de estudos"), Intent::CreateSchedule);
    assert_eq!(intent("monte um plano de estudos para mim"), Intent::CreateSchedule);
    assert_eq!(intent("gere atividades para a semana"), Intent::CreateSchedule);
}

#[test]
fn test_analyze_progress() {
    assert_eq!(intent("como está meu progresso?"), Intent::AnalyzeProgress);
    assert_eq!(intent("faça uma análise do meu desempenho"), Intent::AnalyzeProgress);
}

#[test]
fn test_suggest_activities() {
    assert_eq!(intent("sugira o que estudar"), Intent::SuggestActivities);
    assert_eq!(intent("me dê uma dica de matéria"), Intent::SuggestActivities);
    assert_eq!(intent("qual matéria devo revisar?"), Intent::SuggestActivities);
}

#[test]
fn test_general_chat_fallback() {
    assert_eq!(intent("qual é a capital da frança?"), Intent::GeneralChat);
    assert_eq!(intent("obrigado!"), Intent::GeneralChat);
    assert_eq!(intent(""), Intent::GeneralChat);
}

#[test]
fn test_greetings_are_general_chat() {
    assert_eq!(intent("oi"), Intent::GeneralChat);
    assert_eq!(intent("Bom dia!"), Intent::GeneralChat);
    assert_eq!(intent("boa tarde"), Intent::GeneralChat);
}

#[test]
fn test_deletion_sneaking_into_chatter_still_wins() {
    // Verbs are matched as whole tokens, so this really is a deletion...
    assert_eq!(intent("por favor exclua a prova"), Intent::DeleteEvent);
    // ...but lookalike words are not.
    assert_eq!(intent("conteudo exclusivo da plataforma"), Intent::GeneralChat);
}

#[test]
fn test_intent_serde_wire_names() {
    let json = serde_json::to_string(&Intent::DeleteWeekEvents).unwrap();
    assert_eq!(json, "\"delete_week_events\"");
    let back: Intent = serde_json::from_str("\"suggest_activities\"").unwrap();
    assert_eq!(back, Intent::SuggestActivities);
    assert_eq!(Intent::ListEvents.to_string(), "list_events");
}
