//! Roster controller flows against the in-process mock backend

use chrono::NaiveDate;
use crew_client::{ClientConfig, HttpClient};
use crew_console::core::{Roster, RosterFilter};
use crew_mock::AppState;
use shared::models::{Gender, NewEmployee};
use std::sync::Arc;
use tokio::task::JoinHandle;

async fn spawn_mock() -> (HttpClient, JoinHandle<()>) {
    let state = Arc::new(AppState::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let _ = crew_mock::serve(listener, state).await;
    });

    let client = ClientConfig::new(format!("http://{}", addr))
        .with_timeout(5)
        .build_http_client()
        .unwrap();
    (client, server)
}

fn sample(name: &str, gender: Gender, active: bool) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        gender,
        dob: NaiveDate::from_ymd_opt(1994, 6, 2).unwrap(),
        state: "Kerala".to_string(),
        active,
        image: None,
    }
}

#[tokio::test]
async fn search_narrows_the_visible_subset_without_touching_the_cache() {
    let (client, _server) = spawn_mock().await;
    for (name, gender) in [
        ("Anna", Gender::Female),
        ("Bob", Gender::Male),
        ("Annette", Gender::Female),
    ] {
        client
            .create_employee(&sample(name, gender, true))
            .await
            .unwrap();
    }

    let mut roster = Roster::new(client);
    roster.load().await.unwrap();
    assert_eq!(roster.employees().len(), 3);

    roster.set_filter(RosterFilter {
        search: "ann".to_string(),
        ..Default::default()
    });
    let mut names: Vec<&str> = roster.visible().iter().map(|e| e.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Anna", "Annette"]);
    // The source collection is untouched by filtering.
    assert_eq!(roster.employees().len(), 3);
}

#[tokio::test]
async fn changing_filters_prunes_the_selection_to_the_visible_set() {
    let (client, _server) = spawn_mock().await;
    for name in ["Anna", "Bob", "Annette"] {
        client
            .create_employee(&sample(name, Gender::Female, true))
            .await
            .unwrap();
    }

    let mut roster = Roster::new(client);
    roster.load().await.unwrap();
    roster.select_all();
    assert_eq!(roster.selection().len(), 3);

    roster.set_filter(RosterFilter {
        search: "bob".to_string(),
        ..Default::default()
    });
    let visible = roster.visible_ids();
    assert_eq!(visible.len(), 1);
    assert_eq!(roster.selection().iter().copied().collect::<Vec<_>>(), visible);
}

#[tokio::test]
async fn toggle_status_commits_and_resyncs() {
    let (client, _server) = spawn_mock().await;
    let created = client
        .create_employee(&sample("Anna", Gender::Female, true))
        .await
        .unwrap();

    let mut roster = Roster::new(client.clone());
    roster.load().await.unwrap();
    roster.toggle_status(created.id).await.unwrap();

    // Cache and backend agree after the resync.
    assert!(!roster.get(created.id).unwrap().active);
    let backend = client.list_employees().await.unwrap();
    assert!(!backend[0].active);
}

#[tokio::test]
async fn failed_toggle_rolls_the_cache_back_to_the_snapshot() {
    let (client, server) = spawn_mock().await;
    let created = client
        .create_employee(&sample("Anna", Gender::Female, true))
        .await
        .unwrap();

    let mut roster = Roster::new(client);
    roster.load().await.unwrap();

    // Kill the backend so the PUT (and the resync) fail.
    server.abort();
    let _ = server.await;

    let err = roster.toggle_status(created.id).await;
    assert!(err.is_err());
    // The pre-toggle snapshot is restored: the record is still active.
    assert!(roster.get(created.id).unwrap().active);
}

#[tokio::test]
async fn bulk_delete_removes_the_selection_and_resyncs() {
    let (client, _server) = spawn_mock().await;
    let mut ids = Vec::new();
    for name in ["Anna", "Bob", "Annette"] {
        ids.push(
            client
                .create_employee(&sample(name, Gender::Female, true))
                .await
                .unwrap()
                .id,
        );
    }

    let mut roster = Roster::new(client);
    roster.load().await.unwrap();
    roster.toggle_select(ids[0]);
    roster.toggle_select(ids[1]);

    let selected: Vec<i64> = roster.selection().iter().copied().collect();
    let deleted = roster.bulk_delete(&selected).await.unwrap();
    assert_eq!(deleted, 2);

    // The reload reflects the backend: only the unselected record remains.
    let remaining: Vec<i64> = roster.employees().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![ids[2]]);
    assert!(roster.selection().is_empty());
}

#[tokio::test]
async fn bulk_delete_with_a_missing_id_still_resyncs() {
    let (client, _server) = spawn_mock().await;
    let kept = client
        .create_employee(&sample("Anna", Gender::Female, true))
        .await
        .unwrap();
    let doomed = client
        .create_employee(&sample("Bob", Gender::Male, true))
        .await
        .unwrap();

    let mut roster = Roster::new(client);
    roster.load().await.unwrap();

    // One id no longer exists on the backend: the member DELETE 404s, the
    // error is surfaced, and the reload shows what actually succeeded.
    let result = roster.bulk_delete(&[doomed.id, 999]).await;
    assert!(result.is_err());
    let remaining: Vec<i64> = roster.employees().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![kept.id]);
}
