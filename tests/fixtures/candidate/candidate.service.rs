use super::entity::Candidate;
use super::repository::CandidateRepository;

use std::fmt;

/// No `candidate` row has the requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNotFound {
    pub id: String,
}

impl fmt::Display for CandidateNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` not found", CandidateRepository::TABLE, self.id)
    }
}

impl std::error::Error for CandidateNotFound {}

#[derive(Debug, Clone)]
pub struct CandidateService {
    repository: CandidateRepository,
}

impl CandidateService {
    pub fn new(repository: CandidateRepository) -> Self {
        Self { repository }
    }

    pub fn find_by_id(&self, id: &str) -> Result<Candidate, CandidateNotFound> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| CandidateNotFound { id: id.to_string() })
    }

    pub fn find_all(&self) -> Vec<Candidate> {
        self.repository.find_all()
    }

    pub fn create(&self, entity: Candidate) -> Candidate {
        self.repository.create(entity)
    }
}
