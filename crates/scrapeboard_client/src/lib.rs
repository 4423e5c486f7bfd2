//! Scrapeboard client: request execution against the scraping service and
//! the background bridge that delivers completions to a synchronous caller.
mod bridge;
mod decode;
mod transport;
mod types;

pub use bridge::ClientHandle;
pub use transport::{ClientSettings, ReqwestTransport, Transport, DEFAULT_BASE_URL};
pub use types::{ApiError, ApiErrorKind, ClientEvent};
