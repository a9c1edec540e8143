use super::entity::{{TypeName}};
use super::service::{{{TypeName}}NotFound, {{TypeName}}Service};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

/// HTTP routes under `/{{name}}`.
#[derive(Debug, Clone)]
pub struct {{TypeName}}Controller {
    service: {{TypeName}}Service,
}

impl {{TypeName}}Controller {
    pub fn new(service: {{TypeName}}Service) -> Self {
        Self { service }
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/{{name}}", get(find_all).post(create))
            .route("/{{name}}/:id", get(find_by_id))
            .with_state(self.service)
    }
}

async fn find_by_id(
    State(service): State<{{TypeName}}Service>,
    Path(id): Path<String>,
) -> Result<Json<{{TypeName}}>, {{TypeName}}NotFound> {
    service.find_by_id(&id).map(Json)
}

async fn find_all(State(service): State<{{TypeName}}Service>) -> Json<Vec<{{TypeName}}>> {
    Json(service.find_all())
}

async fn create(
    State(service): State<{{TypeName}}Service>,
    Json(entity): Json<{{TypeName}}>,
) -> Json<{{TypeName}}> {
    Json(service.create(entity))
}

impl IntoResponse for {{TypeName}}NotFound {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
