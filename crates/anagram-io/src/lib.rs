pub mod http;
pub mod transport;

pub use http::{ApiError, RouterOptions, SharedIndex, create_router};
pub use transport::{TcpTransport, Transport, TransportError};
