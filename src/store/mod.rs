mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// Every call is a single blocking statement against the shared connection.
/// Nothing is retried and nothing spans more than one statement.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // User operations
    fn find_username_by_credentials(&self, email: &str, password: &str) -> Result<Option<String>>;
    fn email_exists(&self, email: &str) -> Result<bool>;
    fn insert_user(&self, user: &NewUser) -> Result<()>;

    // List operations
    fn list_name_exists(&self, name: &str) -> Result<bool>;
    fn insert_list(&self, owner_id: i64, name: &str) -> Result<i64>;
    fn fetch_all_lists(&self) -> Result<Vec<ListSummary>>;

    // Product operations (one-to-many with lists)
    fn insert_product(&self, list_id: i64, product: &Product) -> Result<()>;
    fn fetch_products_for_list(&self, list_id: i64) -> Result<Vec<Product>>;

    fn close(&self) -> Result<()>;
}
