//! The `{{name}}` feature: entity, repository, service and controller.

#[path = "{{name}}.entity.rs"]
pub mod entity;
#[path = "{{name}}.repository.rs"]
pub mod repository;
#[path = "{{name}}.service.rs"]
pub mod service;
#[path = "{{name}}.controller.rs"]
pub mod controller;

pub use controller::{{TypeName}}Controller;
pub use entity::{{TypeName}};
pub use repository::{{TypeName}}Repository;
pub use service::{{{TypeName}}NotFound, {{TypeName}}Service};

use scaffold_store::{Module, Store, StoreModule};

#[derive(Debug, Default, Clone, Copy)]
pub struct {{TypeName}}Module;

impl {{TypeName}}Module {
    /// Wire repository, service and controller over `store`.
    pub fn router(store: Store) -> axum::Router {
        let repository = {{TypeName}}Repository::new(store);
        let service = {{TypeName}}Service::new(repository);
        {{TypeName}}Controller::new(service).router()
    }
}

impl Module for {{TypeName}}Module {
    fn name(&self) -> &'static str {
        "{{name}}"
    }

    fn imports(&self) -> &'static [&'static dyn Module] {
        &[&StoreModule]
    }
}
