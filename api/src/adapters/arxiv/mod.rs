//! arXiv adapter
//!
//! Paper search backed by the arXiv Atom query API.

pub mod client;

pub use client::ArxivClient;
