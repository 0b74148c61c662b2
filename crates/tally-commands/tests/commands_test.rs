//! Integration tests for tally-commands crate.
//!
//! The `run_*` functions carry the whole dispatch logic, so these tests
//! drive the exact replies a Discord user would see, against an in-memory
//! store.

use tally_commands::add::run_add;
use tally_commands::messages;
use tally_commands::newitem::run_newitem;
use tally_commands::showfulllist::run_showfulllist;
use tally_commands::showlist::run_showlist;
use tally_common::test_utils::{init_test_logging, user_fixtures};
use tally_store::Store;

const PREFIX: &str = "!";

async fn test_store() -> Store {
    init_test_logging();

    let store = Store::in_memory().await.unwrap();
    store.initialize_schema().await.unwrap();
    store
}

#[tokio::test]
async fn test_newitem_then_add_accumulates() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_newitem(&store, PREFIX, &horst, "salat").await.unwrap();
    assert_eq!(reply, "horst hat ein neues Item hinzugefügt: salat");

    let reply = run_add(&store, PREFIX, &horst, 1, "salat").await.unwrap();
    assert_eq!(reply, "horst hat 1 mal salat hinzugefügt. Stand jetzt: 1");

    let reply = run_add(&store, PREFIX, &horst, 2, "salat").await.unwrap();
    assert_eq!(reply, "horst hat 2 mal salat hinzugefügt. Stand jetzt: 3");
}

#[tokio::test]
async fn test_newitem_duplicate_is_rejected() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    run_newitem(&store, PREFIX, &horst, "salat").await.unwrap();
    let reply = run_newitem(&store, PREFIX, &horst, "salat").await.unwrap();

    assert_eq!(reply, "salat ist bereits erlaubt.");
}

#[tokio::test]
async fn test_newitem_normalizes_multiword_names() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_newitem(&store, PREFIX, &horst, "  wurst   salat ")
        .await
        .unwrap();
    assert_eq!(reply, "horst hat ein neues Item hinzugefügt: wurst salat");

    let reply = run_newitem(&store, PREFIX, &horst, "wurst salat")
        .await
        .unwrap();
    assert_eq!(reply, "wurst salat ist bereits erlaubt.");
}

#[tokio::test]
async fn test_newitem_blank_name_yields_usage() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_newitem(&store, PREFIX, &horst, "   ").await.unwrap();
    assert_eq!(reply, messages::newitem_usage(PREFIX));
}

#[tokio::test]
async fn test_add_unknown_item_is_rejected() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_add(&store, PREFIX, &horst, 1, "gurke").await.unwrap();
    assert_eq!(
        reply,
        "Das Item \"gurke\" ist nicht erlaubt. Füge es erst mit !newitem <item_name> hinzu."
    );
}

#[tokio::test]
async fn test_add_non_positive_count_yields_usage_without_mutation() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    run_newitem(&store, PREFIX, &horst, "salat").await.unwrap();
    let item = store.item_by_name("salat").await.unwrap().unwrap();

    let reply = run_add(&store, PREFIX, &horst, 0, "salat").await.unwrap();
    assert_eq!(
        reply,
        "What? Schreibweise zum hinzufügen ist: !add <Anzahl> <Item>"
    );

    let reply = run_add(&store, PREFIX, &horst, -3, "salat").await.unwrap();
    assert_eq!(reply, messages::add_usage(PREFIX));

    assert_eq!(store.counter(&horst.id, item.id).await.unwrap(), 0);
    assert!(store.user_by_id(&horst.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_missing_name_yields_usage() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_add(&store, PREFIX, &horst, 2, "   ").await.unwrap();
    assert_eq!(reply, messages::add_usage(PREFIX));
}

#[tokio::test]
async fn test_showlist_empty_for_unknown_author() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_showlist(&store, &horst, None).await.unwrap();
    assert_eq!(reply, "horst hat keine Items auf der Liste.");
}

#[tokio::test]
async fn test_showlist_unknown_username_parameter() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    let reply = run_showlist(&store, &horst, Some("nobody")).await.unwrap();
    assert_eq!(reply, "User nobody nicht gefunden.");
}

#[tokio::test]
async fn test_showlist_renders_own_counters() {
    let store = test_store().await;
    let horst = user_fixtures::horst();

    run_newitem(&store, PREFIX, &horst, "salat").await.unwrap();
    run_newitem(&store, PREFIX, &horst, "apfel").await.unwrap();
    run_add(&store, PREFIX, &horst, 2, "salat").await.unwrap();
    run_add(&store, PREFIX, &horst, 1, "apfel").await.unwrap();

    let reply = run_showlist(&store, &horst, None).await.unwrap();
    assert_eq!(
        reply,
        "horst hat folgende Items auf der Liste:\n\napfel: 1\nsalat: 2"
    );
}

#[tokio::test]
async fn test_showlist_by_username_uses_stored_name() {
    let store = test_store().await;
    let horst = user_fixtures::horst();
    let anna = user_fixtures::anna();

    run_newitem(&store, PREFIX, &horst, "salat").await.unwrap();
    run_add(&store, PREFIX, &anna, 4, "salat").await.unwrap();

    let reply = run_showlist(&store, &horst, Some("anna")).await.unwrap();
    assert_eq!(reply, "anna hat folgende Items auf der Liste:\n\nsalat: 4");
}

#[tokio::test]
async fn test_showfulllist_empty() {
    let store = test_store().await;

    let reply = run_showfulllist(&store).await.unwrap();
    assert_eq!(reply, "Es steht noch nichts auf der Liste.");
}

#[tokio::test]
async fn test_showfulllist_groups_by_item_across_users() {
    let store = test_store().await;
    let anna = user_fixtures::anna();
    let bert = user_fixtures::bert();

    for name in ["A", "B", "C"] {
        run_newitem(&store, PREFIX, &anna, name).await.unwrap();
    }
    run_add(&store, PREFIX, &anna, 1, "A").await.unwrap();
    run_add(&store, PREFIX, &anna, 2, "C").await.unwrap();
    run_add(&store, PREFIX, &bert, 4, "A").await.unwrap();
    run_add(&store, PREFIX, &bert, 3, "B").await.unwrap();

    let reply = run_showfulllist(&store).await.unwrap();
    assert_eq!(
        reply,
        "Die Gesamtliste sieht wie folgt aus:\n\
         \nA:\n\tanna: 1\n\tbert: 4\
         \nC:\n\tanna: 2\
         \nB:\n\tbert: 3"
    );
}

#[test]
fn test_help_lists_every_command() {
    let help = messages::help(PREFIX);

    for command in ["!help", "!newitem", "!showlist", "!showfulllist", "!add", "!deletelist"] {
        assert!(help.contains(command), "help text is missing {command}");
    }
}
