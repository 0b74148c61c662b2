//! Every user-facing reply text in one place.
//!
//! The bot answers in German; the wording is part of the product surface
//! and is asserted verbatim by the command tests.

/// Reply when an item was registered.
pub fn item_created(user_name: &str, item_name: &str) -> String {
    format!("{user_name} hat ein neues Item hinzugefügt: {item_name}")
}

/// Reply when the item name is already registered.
pub fn item_already_allowed(item_name: &str) -> String {
    format!("{item_name} ist bereits erlaubt.")
}

/// Reply when counting against an unregistered item.
pub fn item_not_allowed(prefix: &str, item_name: &str) -> String {
    format!(
        "Das Item \"{item_name}\" ist nicht erlaubt. Füge es erst mit {prefix}newitem <item_name> hinzu."
    )
}

/// Reply when a requested user is unknown.
pub fn user_not_found(user_name: &str) -> String {
    format!("User {user_name} nicht gefunden.")
}

/// Reply when a user has no counters yet.
pub fn empty_list(user_name: &str) -> String {
    format!("{user_name} hat keine Items auf der Liste.")
}

/// Header line of a single user's list.
pub fn list_header(user_name: &str) -> String {
    format!("{user_name} hat folgende Items auf der Liste:\n")
}

/// Reply when no counter exists anywhere.
pub const FULL_LIST_EMPTY: &str = "Es steht noch nichts auf der Liste.";

/// Header line of the aggregate list.
pub const FULL_LIST_HEADER: &str = "Die Gesamtliste sieht wie folgt aus:\n";

/// Reply after a successful count.
pub fn counter_added(user_name: &str, count: i64, item_name: &str, total: i64) -> String {
    format!("{user_name} hat {count} mal {item_name} hinzugefügt. Stand jetzt: {total}")
}

/// Fixed usage string for malformed `add` invocations.
pub fn add_usage(prefix: &str) -> String {
    format!("What? Schreibweise zum hinzufügen ist: {prefix}add <Anzahl> <Item>")
}

/// Fixed usage string for malformed `newitem` invocations.
pub fn newitem_usage(prefix: &str) -> String {
    format!("Schreibweise: {prefix}newitem <Item>")
}

/// Help text listing every command.
pub fn help(prefix: &str) -> String {
    format!(
        "Folgende Befehle sind verfügbar:\n\
         \n\
         {prefix}help - Zeigt diese Hilfe an.\n\
         {prefix}newitem <Item> - Fügt ein neues erlaubtes Item hinzu.\n\
         {prefix}showlist [<User>] - Zeigt die Liste eines Users (ohne Angabe: deine eigene).\n\
         {prefix}showfulllist - Zeigt die Gesamtliste aller User.\n\
         {prefix}add <Anzahl> <Item> - Zählt ein Item hoch.\n\
         {prefix}deletelist - Löscht die Gesamtliste (mit Bestätigung)."
    )
}

/// Confirmation prompt shown before deleting the full list.
pub const DELETE_CONFIRM_PROMPT: &str =
    "Soll wirklich die komplette Liste gelöscht werden? Du hast 60 Sekunden Zeit zu bestätigen.";

/// Label of the confirm button.
pub const DELETE_CONFIRM_LABEL: &str = "Ja, Liste löschen";

/// Label of the cancel button.
pub const DELETE_CANCEL_LABEL: &str = "Abbrechen";

/// Reply when the deletion was confirmed.
pub const DELETE_CONFIRMED: &str =
    "Bestätigung erhalten. Das Löschen der Gesamtliste ist noch nicht implementiert.";

/// Reply when the deletion was cancelled.
pub const DELETE_CANCELLED: &str = "Löschen abgebrochen, die Liste bleibt unverändert.";

/// Reply when the confirmation window elapsed.
pub const DELETE_TIMEOUT: &str =
    "Keine Bestätigung erhalten, die Liste bleibt unverändert.";
