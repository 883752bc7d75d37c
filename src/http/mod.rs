//! HTTP-like protocol layer.
//!
//! One request per connection, one response, then close. There is no
//! keep-alive and no header handling; the wire format is the status line,
//! a blank line, and the body.
//!
//! # Submodules
//!
//! - **`request`**: interprets raw request bytes into a method and a path
//! - **`response`**: status codes and response serialization
//! - **`handler`**: request-to-response translation with the file fallbacks
//! - **`writer`**: writes a response and half-closes the connection
//!
//! # Connection lifecycle
//!
//! Every client connection moves through the same states, all terminal
//! states releasing its slot in the connection table:
//!
//! ```text
//! ACCEPTED → AWAITING_READ ─┬─ READ_OK → RESPONDING → CLOSED
//!                           ├─ READ_EOF → CLOSED
//!                           └─ READ_ERROR → CLOSED
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod writer;
