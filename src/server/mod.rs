//! The multiplexing core: one event loop over the listener and every
//! tracked client connection.

pub mod event_loop;
pub mod table;

pub use event_loop::{Server, run};
