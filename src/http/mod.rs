//! HTTP server module backing the dashboard front end.
//!
//! A thin axum layer: handlers parse the request, delegate to the fetch
//! layer and the analytics functions, and serialize flat JSON records the
//! browser charts consume directly. No business logic lives here.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
