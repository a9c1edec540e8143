//! Application composition root.
//!
//! Feature modules are registered here by `scaffold generate`.

use scaffold_store::{Module, StoreModule};

#[path = "candidate/candidate.module.rs"]
pub mod candidate;
use candidate::CandidateModule;

pub static IMPORTS: &[&dyn Module] = &[&StoreModule, &CandidateModule];
