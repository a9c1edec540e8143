//! Application composition root.
//!
//! Feature modules are registered here by `scaffold generate`.

use scaffold_store::{Module, StoreModule};

pub static IMPORTS: &[&dyn Module] = &[&StoreModule];
