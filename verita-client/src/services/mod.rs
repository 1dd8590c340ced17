pub mod api_client;
pub mod endpoints;
pub mod request;
pub mod session;

pub use api_client::{ApiClient, AuthEvent};
pub use request::{FilePart, PendingRequest, RequestBody};
pub use session::{Session, SessionState};
