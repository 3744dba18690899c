mod helpers;

use chrono::NaiveDate;
use helpers::*;
use holidays_service::{
    api::{build_router, middleware::AppState},
    client::{ClientError, HolidayClient},
    models::HolidayPayload,
    services::{PageRequest, SortOrder},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Bind the service to an ephemeral port and return a client pointed at it.
async fn start_server() -> (HolidayClient, holidays_service::database::Database) {
    let db = setup_test_db().await;
    let app = build_router(AppState { db: db.clone() });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (HolidayClient::new(format!("http://{}", addr)), db)
}

#[tokio::test]
async fn test_client_crud_round_trip() {
    let (client, db) = start_server().await;

    let created = client
        .create(
            &HolidayPayload::new()
                .with_name("Christmas")
                .with_date(date(2026, 12, 25)),
        )
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Christmas");

    let fetched = client.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let patched = client
        .patch(created.id, &HolidayPayload::new().with_name("Christmas Day"))
        .await
        .unwrap();
    assert_eq!(patched.name, "Christmas Day");
    assert_eq!(patched.date, Some(date(2026, 12, 25)));

    client.delete(created.id).await.unwrap();

    let result = client.get(created.id).await;
    match result {
        Err(ClientError::NotFound(body)) => {
            assert_eq!(body.field.as_deref(), Some("id"));
            assert_eq!(body.message, "The resource does not exist");
        }
        other => panic!("Expected not found, got {:?}", other),
    }

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_client_create_with_id_maps_to_bad_request() {
    let (client, db) = start_server().await;

    let result = client
        .create(&HolidayPayload::new().with_id(1).with_name("Christmas"))
        .await;

    match result {
        Err(ClientError::BadRequest(body)) => {
            assert_eq!(body.field.as_deref(), Some("id"));
            assert_eq!(body.message, "must be null");
        }
        other => panic!("Expected bad request, got {:?}", other),
    }

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_client_paged_find_all() {
    let (client, db) = start_server().await;

    for name in ["B", "A", "C"] {
        client
            .create(&HolidayPayload::new().with_name(name))
            .await
            .unwrap();
    }

    let request = PageRequest::paged(0, 2).sorted_by(SortOrder::asc("name"));
    let page = client.find_all(Some(&request)).await.unwrap();

    let names: Vec<&str> = page.items.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_client_unpaged_find_all_sends_no_query() {
    let (client, db) = start_server().await;

    for name in ["First", "Second"] {
        client
            .create(&HolidayPayload::new().with_name(name))
            .await
            .unwrap();
    }

    let all = client.find_all(None).await.unwrap();
    assert_eq!(all.items.len(), 2);
    assert_eq!(all.total_pages, 1);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_client_unknown_sort_field_maps_to_bad_request() {
    let (client, db) = start_server().await;

    let request = PageRequest::default().sorted_by(SortOrder::asc("recurring"));
    let result = client.find_all(Some(&request)).await;

    match result {
        Err(ClientError::BadRequest(body)) => {
            assert_eq!(body.field.as_deref(), Some("sort"));
        }
        other => panic!("Expected bad request, got {:?}", other),
    }

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_non_numeric_id_maps_to_bad_request_on_id() {
    // The typed client cannot send a non-numeric id, so hit the wire directly.
    let db = setup_test_db().await;
    let app = build_router(AppState { db: db.clone() });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let response = reqwest::get(format!("http://{}/holidays/abc", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["field"], "id");

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_client_patch_missing_id_maps_to_not_found() {
    let (client, db) = start_server().await;

    let result = client
        .patch(4711, &HolidayPayload::new().with_name("Nobody"))
        .await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));

    let result = client.delete(4711).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));

    teardown_test_db(db).await;
}
