//! Compiles the checked-in generator output and runs it against the store.

#[path = "../fixtures/app.module.rs"]
mod app;

use app::candidate::{
    Candidate, CandidateModule, CandidateNotFound, CandidateRepository, CandidateService,
};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use scaffold_store::{module, record, Module, Store};
use tower::ServiceExt;

fn service(store: &Store) -> CandidateService {
    CandidateService::new(CandidateRepository::new(store.clone()))
}

// ---------------------------------------------------------------------------
// Repository and service
// ---------------------------------------------------------------------------

#[test]
fn create_then_find() {
    let store = Store::new();
    let service = service(&store);

    let ada = Candidate::new("c1", "Ada", "Backend engineer");
    assert_eq!(service.create(ada.clone()), ada);
    assert_eq!(service.find_by_id("c1"), Ok(ada.clone()));
    assert_eq!(service.find_all(), vec![ada]);

    // Rows land in the table named after the feature
    assert_eq!(store.tables(), ["candidate"]);
    assert_eq!(CandidateRepository::TABLE, "candidate");
}

#[test]
fn find_miss_raises_not_found() {
    let store = Store::new();

    let err = service(&store).find_by_id("missing").unwrap_err();
    assert_eq!(
        err,
        CandidateNotFound {
            id: "missing".to_string()
        }
    );
    assert_eq!(err.to_string(), "candidate `missing` not found");
}

#[test]
fn rows_are_stringified_on_read() {
    let store = Store::new();
    store.insert(
        CandidateRepository::TABLE,
        "c2",
        record! { "title" => 42, "description" => true },
    );

    let found = CandidateRepository::new(store).find_by_id("c2").unwrap();
    assert_eq!(found, Candidate::new("c2", "42", "true"));
}

#[test]
fn missing_fields_read_as_empty() {
    let store = Store::new();
    store.insert(CandidateRepository::TABLE, "c3", record! {});

    let all = CandidateRepository::new(store).find_all();
    assert_eq!(all, vec![Candidate::new("c3", "", "")]);
}

// ---------------------------------------------------------------------------
// Module wiring
// ---------------------------------------------------------------------------

#[test]
fn composition_root_lists_store_then_candidate() {
    assert_eq!(module::load_order(app::IMPORTS), ["store", "candidate"]);
    assert_eq!(CandidateModule.name(), "candidate");
    assert_eq!(CandidateModule.imports().len(), 1);
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

async fn send(store: &Store, request: Request<Body>) -> (StatusCode, String) {
    let response = CandidateModule::router(store.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn http_create_list_and_find() {
    let store = Store::new();

    let (status, body) = send(
        &store,
        Request::post("/candidate")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"id":"c1","title":"Ada","description":"Backend engineer"}"#,
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: Candidate = serde_json::from_str(&body).unwrap();
    assert_eq!(created, Candidate::new("c1", "Ada", "Backend engineer"));

    let (status, body) = send(&store, Request::get("/candidate").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<Candidate> = serde_json::from_str(&body).unwrap();
    assert_eq!(all, vec![created.clone()]);

    let (status, body) =
        send(&store, Request::get("/candidate/c1").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Candidate>(&body).unwrap(), created);
}

#[tokio::test]
async fn http_find_miss_is_404() {
    let store = Store::new();

    let (status, body) =
        send(&store, Request::get("/candidate/nope").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "candidate `nope` not found");
}
