//! HTTP API module for the Balance Engine.
//!
//! A host page posts its attendance rows and receives the balance report or
//! the rendered banner.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BalanceRequest, RowRequest};
pub use response::ApiError;
pub use state::AppState;
