use serde::{Deserialize, Serialize};

/// Owner id recorded on every list. There are no sessions, so no real owner
/// is ever known at list-creation time.
pub const PLACEHOLDER_OWNER_ID: i64 = 1;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A row of the `lists` table as returned by a full scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: i64,
    pub store: String,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: i64, store: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            store: store.into(),
        }
    }
}

/// A list joined with its products at read time. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub list_name: String,
    pub products: Vec<Product>,
}
