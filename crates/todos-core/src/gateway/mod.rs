//! Gateway Layer
//!
//! Remote access to the todo collection.

mod error;
mod http;
mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{GatewayError, GatewayResult};
pub use http::HttpTodoGateway;
pub use traits::TodoGateway;
