//! Request middleware: method override, sessions, request logging.

pub mod logging;
pub mod method_override;
pub mod session;

pub use logging::RequestLogMiddleware;
pub use method_override::MethodOverrideMiddleware;
pub use session::SessionMiddleware;
