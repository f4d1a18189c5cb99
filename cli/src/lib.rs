//! Host side of the terminal client: performs the HTTP round-trips that
//! `todo-core` describes.

pub mod transport;

pub use transport::UreqTransport;
