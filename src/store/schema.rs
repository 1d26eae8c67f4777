pub const SCHEMA: &str = r#"
-- Accounts; passwords are stored as submitted
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

-- List names are unique across all owners
CREATE TABLE IF NOT EXISTS lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    name TEXT NOT NULL UNIQUE
);

-- No cascade: nothing in the application deletes lists
CREATE TABLE IF NOT EXISTS products (
    list_id INTEGER NOT NULL REFERENCES lists(id),
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    store TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_products_list ON products(list_id);
"#;
