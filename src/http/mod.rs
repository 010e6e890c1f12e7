//! HTTP/1.0 protocol implementation.
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: drives one request/response cycle over an accepted socket
//! - **`parser`**: reads the request line and header block off the stream
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content-type lookup from the mime rules file
//!
//! Each connection carries exactly one HTTP/1.0 request: read it, answer
//! it, close the socket. There is no keep-alive and no pipelining.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
