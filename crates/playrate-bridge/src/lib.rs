pub mod controller;
pub mod dispatch;
pub mod transport;

pub use controller::{ControllerError, RemoteController};
pub use dispatch::{dispatch, handle_raw};
pub use transport::{channel, serve, ChannelTransport, Transport, TransportError};
