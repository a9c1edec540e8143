use serde::{Deserialize, Serialize};

/// A `{{name}}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct {{TypeName}} {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl {{TypeName}} {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
