//! Spindle - HTTP/1.0 static file and CGI server
//!
//! Core library for the request lifecycle: parsing a request off the
//! socket, resolving it to a file inside the configured root, and
//! answering with a directory listing, the file contents, or the output
//! of a CGI script.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
