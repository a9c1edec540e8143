use super::entity::Candidate;

use scaffold_store::{record, Record, Store};

/// Persists [`Candidate`] rows in the `candidate` table.
#[derive(Debug, Clone)]
pub struct CandidateRepository {
    store: Store,
}

impl CandidateRepository {
    pub const TABLE: &'static str = "candidate";

    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn find_by_id(&self, id: &str) -> Option<Candidate> {
        let row = self.store.find_by_id(Self::TABLE, id)?;
        Some(hydrate(id, &row))
    }

    pub fn find_all(&self) -> Vec<Candidate> {
        self.store
            .find_all(Self::TABLE)
            .iter()
            .map(|row| hydrate(&field(row, "id"), row))
            .collect()
    }

    pub fn create(&self, entity: Candidate) -> Candidate {
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

fn hydrate(id: &str, row: &Record) -> Candidate {
    Candidate::new(id, field(row, "title"), field(row, "description"))
}

fn field(row: &Record, name: &str) -> String {
    row.get(name).map(ToString::to_string).unwrap_or_default()
}
