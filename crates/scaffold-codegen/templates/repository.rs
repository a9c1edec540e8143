use super::entity::{{TypeName}};

use scaffold_store::{record, Record, Store};

/// Persists [`{{TypeName}}`] rows in the `{{name}}` table.
#[derive(Debug, Clone)]
pub struct {{TypeName}}Repository {
    store: Store,
}

impl {{TypeName}}Repository {
    pub const TABLE: &'static str = "{{name}}";

    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn find_by_id(&self, id: &str) -> Option<{{TypeName}}> {
        let row = self.store.find_by_id(Self::TABLE, id)?;
        Some(hydrate(id, &row))
    }

    pub fn find_all(&self) -> Vec<{{TypeName}}> {
        self.store
            .find_all(Self::TABLE)
            .iter()
            .map(|row| hydrate(&field(row, "id"), row))
            .collect()
    }

    pub fn create(&self, entity: {{TypeName}}) -> {{TypeName}} {
        self.store.insert(
            Self::TABLE,
            entity.id.clone(),
            record! {
                "id" => &entity.id,
                "title" => &entity.title,
                "description" => &entity.description,
            },
        );
        entity
    }
}

fn hydrate(id: &str, row: &Record) -> {{TypeName}} {
    {{TypeName}}::new(id, field(row, "title"), field(row, "description"))
}

fn field(row: &Record, name: &str) -> String {
    row.get(name).map(ToString::to_string).unwrap_or_default()
}
