mod account;
pub mod dto;
mod lists;
pub mod pages;
pub mod response;
mod router;
pub mod validation;

pub use router::{AppState, create_router};
