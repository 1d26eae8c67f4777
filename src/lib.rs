//! # Shoplist
//!
//! A small shopping-list web application, usable both as a standalone binary
//! and as a library.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::path::PathBuf;
//! use shoplist::server::{AppState, create_router};
//! use shoplist::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new(&PathBuf::from("./data/shoplist.db")).unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store), PathBuf::from("./static")));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `shoplist` binary. Disable with `default-features = false`.

pub mod config;
pub mod error;
pub mod flow;
pub mod server;
pub mod store;
pub mod types;
