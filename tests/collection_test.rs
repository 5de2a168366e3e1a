mod common;

use common::*;
use serde_json::json;
use std::sync::Arc;
use tps_console::domain::activity::ActivityResource;
use tps_console::domain::collection::Collection;
use tps_console::domain::error::ConsoleError;

// ── 8. new_collection_is_empty_and_points_at_root ──────────────────────────

#[test]
fn new_collection_is_empty_and_points_at_root() {
    let collection = Collection::new(ActivityResource);

    assert_eq!(collection.url(), "/tps/rest/activities");
    assert!(collection.is_empty());
    assert_eq!(collection.total(), None);
    assert!(collection.links().is_empty());
}

// ── 9. query_merges_defaults_and_skips_empty ───────────────────────────────

#[test]
fn query_merges_defaults_and_skips_empty() {
    let mut collection = Collection::with_options(
        ActivityResource,
        vec![("size".into(), "20".into()), ("filter".into(), "".into())],
    );
    assert_eq!(collection.url(), "/tps/rest/activities?size=20");

    collection
        .query(&[("start", "0"), ("filter", "user 1&2"), ("size", "5")])
        .unwrap();
    assert_eq!(
        collection.url(),
        "/tps/rest/activities?start=0&filter=user+1%262&size=5"
    );

    collection.query(&[("start", "")]).unwrap();
    assert_eq!(collection.url(), "/tps/rest/activities?size=20");
}

// ── 10. parse_normalizes_entries_and_links ─────────────────────────────────

#[test]
fn parse_normalizes_entries_and_links() {
    let mut collection = Collection::new(ActivityResource);

    collection.parse(&page(
        &[1, 2, 3],
        &[("next", "/tps/rest/activities?start=3&size=3")],
        7,
    ));
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.total(), Some(7));
    assert_eq!(collection.entries()[1].token_id(), Some("token2"));
    assert_eq!(
        collection.link("next"),
        Some("/tps/rest/activities?start=3&size=3")
    );

    // A single entry and a single link object arrive unwrapped.
    collection.parse(&json!({
        "entries": wire_activity(9),
        "Link": {"rel": "prev", "href": "/tps/rest/activities?start=0"},
    }));
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.total(), None);
    assert_eq!(collection.link("next"), None);
    assert_eq!(collection.link("prev"), Some("/tps/rest/activities?start=0"));

    // Opaque descriptors and missing entries leave an empty page.
    collection.parse(&json!({"Link": "next=..."}));
    assert!(collection.is_empty());
    assert!(collection.links().is_empty());
}

// ── 11. go_follows_known_links_only ────────────────────────────────────────

#[test]
fn go_follows_known_links_only() {
    let mut collection = Collection::new(ActivityResource);
    let next = "https://tps.example.com:8443/tps/rest/activities?start=1";
    collection.parse(&page(&[1], &[("next", next)], 2));

    assert!(!collection.go("prev"));
    assert_eq!(collection.url(), "/tps/rest/activities");

    assert!(collection.go("next"));
    assert_eq!(
        collection.url(),
        "https://tps.example.com:8443/tps/rest/activities?start=1"
    );
}

// ── 12. client_fetches_current_page ────────────────────────────────────────

#[tokio::test]
async fn client_fetches_current_page() {
    let transport = Arc::new(InMemoryTransport::new());
    transport.respond("/tps/rest/activities?size=2", page(&[1, 2], &[], 2));
    let client = activity_client(transport.clone());

    let mut collection =
        Collection::with_options(ActivityResource, vec![("size".into(), "2".into())]);
    client.fetch_page(&mut collection).await.unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(
        transport.requests(),
        vec![("GET".to_string(), "/tps/rest/activities?size=2".to_string(), None)]
    );
}

// ── 13. client_fetch_and_save_single_entry ─────────────────────────────────

#[tokio::test]
async fn client_fetch_and_save_single_entry() {
    let transport = Arc::new(InMemoryTransport::new());
    transport.respond("/tps/rest/activities/5", wire_activity(5));
    let client = activity_client(transport.clone());

    assert_eq!(client.model_url("5"), "/tps/rest/activities/5");
    let activity = client.fetch("5").await.unwrap();
    assert_eq!(activity.ip(), Some("10.0.0.5"));

    transport.respond("/tps/rest/activities/5", json!({"id": 5, "Result": "ok"}));
    let saved = client.save("5", &activity).await.unwrap();
    assert_eq!(saved.result(), Some("ok"));

    let (method, url, body) = transport.requests().pop().unwrap();
    assert_eq!(method, "PUT");
    assert_eq!(url, "/tps/rest/activities/5");
    assert_eq!(body, Some(wire_activity(5)));
}

// ── 14. client_propagates_transport_errors ─────────────────────────────────

#[tokio::test]
async fn client_propagates_transport_errors() {
    let transport = Arc::new(InMemoryTransport::new());
    let client = activity_client(transport);

    let mut collection = Collection::new(ActivityResource);
    let err = client.fetch_page(&mut collection).await.unwrap_err();

    assert!(matches!(err, ConsoleError::Status { status: 404, .. }));
    assert!(collection.is_empty());
}
