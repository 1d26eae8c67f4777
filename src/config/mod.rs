mod server;

pub use server::{ConfigLayer, ServerConfig, db_path};
