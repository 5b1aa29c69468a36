//! Remote control endpoint
//!
//! Request text in, response text out. The firmware owns the connection;
//! this module only decides what a request does to the lot and renders
//! the answer.

pub mod endpoint;
pub mod view;

pub use endpoint::{RemoteEndpoint, Reply};
pub use view::slot_view;
