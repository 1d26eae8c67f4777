use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }

    fn count(&self, sql: &str, value: &str) -> Result<bool> {
        let count: i64 = self.conn().query_row(sql, params![value], |row| row.get(0))?;
        Ok(count > 0)
    }
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // User operations

    fn find_username_by_credentials(&self, email: &str, password: &str) -> Result<Option<String>> {
        self.conn()
            .query_row(
                "SELECT name FROM users WHERE email = ?1 AND password = ?2",
                params![email, password],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        self.count("SELECT COUNT(*) FROM users WHERE email = ?1", email)
    }

    fn insert_user(&self, user: &NewUser) -> Result<()> {
        self.conn().execute(
            "INSERT INTO users (name, email, password) VALUES (?1, ?2, ?3)",
            params![user.name, user.email, user.password],
        )?;
        Ok(())
    }

    // List operations

    fn list_name_exists(&self, name: &str) -> Result<bool> {
        self.count("SELECT COUNT(*) FROM lists WHERE name = ?1", name)
    }

    fn insert_list(&self, owner_id: i64, name: &str) -> Result<i64> {
        // The rowid must be read under the same guard as the insert.
        let conn = self.conn();
        conn.execute(
            "INSERT INTO lists (user_id, name) VALUES (?1, ?2)",
            params![owner_id, name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn fetch_all_lists(&self) -> Result<Vec<ListSummary>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, name FROM lists ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(ListSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Product operations

    fn insert_product(&self, list_id: i64, product: &Product) -> Result<()> {
        self.conn().execute(
            "INSERT INTO products (list_id, name, quantity, store) VALUES (?1, ?2, ?3, ?4)",
            params![list_id, product.name, product.quantity, product.store],
        )?;
        Ok(())
    }

    fn fetch_products_for_list(&self, list_id: i64) -> Result<Vec<Product>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT name, quantity, store FROM products WHERE list_id = ?1 ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![list_id], |row| {
            Ok(Product {
                name: row.get(0)?,
                quantity: row.get(1)?,
                store: row.get(2)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn close(&self) -> Result<()> {
        self.conn()
            .query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))?;
        Ok(())
    }
}
