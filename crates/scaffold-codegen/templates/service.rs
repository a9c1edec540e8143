use super::entity::{{TypeName}};
use super::repository::{{TypeName}}Repository;

use std::fmt;

/// No `{{name}}` row has the requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct {{TypeName}}NotFound {
    pub id: String,
}

impl fmt::Display for {{TypeName}}NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` not found", {{TypeName}}Repository::TABLE, self.id)
    }
}

impl std::error::Error for {{TypeName}}NotFound {}

#[derive(Debug, Clone)]
pub struct {{TypeName}}Service {
    repository: {{TypeName}}Repository,
}

impl {{TypeName}}Service {
    pub fn new(repository: {{TypeName}}Repository) -> Self {
        Self { repository }
    }

    pub fn find_by_id(&self, id: &str) -> Result<{{TypeName}}, {{TypeName}}NotFound> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| {{TypeName}}NotFound { id: id.to_string() })
    }

    pub fn find_all(&self) -> Vec<{{TypeName}}> {
        self.repository.find_all()
    }

    pub fn create(&self, entity: {{TypeName}}) -> {{TypeName}} {
        self.repository.create(entity)
    }
}
