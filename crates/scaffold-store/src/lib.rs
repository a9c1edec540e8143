#[macro_use]
mod macros;

pub mod module;
pub use module::{Module, StoreModule};

mod store;
pub use store::Store;

pub mod value;
pub use value::{Record, Value};
