//! HTTP request/response core.
//!
//! Every handler is a fallible async operation over these types; the `?`
//! operator forwards any failure to the centralized error renderer in the
//! server layer.

pub mod form_data;
pub mod handler;
pub mod request;
pub mod response;

pub use form_data::FormData;
pub use handler::{Handler, Middleware, MiddlewareChain};
pub use request::Request;
pub use response::Response;
