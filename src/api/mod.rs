//! API module for the browser page and JSON endpoints

pub mod http;
pub mod page;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
