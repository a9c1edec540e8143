use super::entity::Candidate;
use super::service::{CandidateNotFound, CandidateService};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

/// HTTP routes under `/candidate`.
#[derive(Debug, Clone)]
pub struct CandidateController {
    service: CandidateService,
}

impl CandidateController {
    pub fn new(service: CandidateService) -> Self {
        Self { service }
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/candidate", get(find_all).post(create))
            .route("/candidate/:id", get(find_by_id))
            .with_state(self.service)
    }
}

async fn find_by_id(
    State(service): State<CandidateService>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, CandidateNotFound> {
    service.find_by_id(&id).map(Json)
}

async fn find_all(State(service): State<CandidateService>) -> Json<Vec<Candidate>> {
    Json(service.find_all())
}

async fn create(
    State(service): State<CandidateService>,
    Json(entity): Json<Candidate>,
) -> Json<Candidate> {
    Json(service.create(entity))
}

impl IntoResponse for CandidateNotFound {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
