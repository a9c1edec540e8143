//! The `candidate` feature: entity, repository, service and controller.

#[path = "candidate.entity.rs"]
pub mod entity;
#[path = "candidate.repository.rs"]
pub mod repository;
#[path = "candidate.service.rs"]
pub mod service;
#[path = "candidate.controller.rs"]
pub mod controller;

pub use controller::CandidateController;
pub use entity::Candidate;
pub use repository::CandidateRepository;
pub use service::{CandidateNotFound, CandidateService};

use scaffold_store::{Module, Store, StoreModule};

#[derive(Debug, Default, Clone, Copy)]
pub struct CandidateModule;

impl CandidateModule {
    /// Wire repository, service and controller over `store`.
    pub fn router(store: Store) -> axum::Router {
        let repository = CandidateRepository::new(store);
        let service = CandidateService::new(repository);
        CandidateController::new(service).router()
    }
}

impl Module for CandidateModule {
    fn name(&self) -> &'static str {
        "candidate"
    }

    fn imports(&self) -> &'static [&'static dyn Module] {
        &[&StoreModule]
    }
}
