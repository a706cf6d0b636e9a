//! Services the widget runtime is assembled from.
//!
//! This module contains:
//! - Responders that classify text and look up canned replies
//! - Presentation hosts (terminal, HTML rendering)
//! - The in-memory session transcript
//!
//! Responders and hosts are defined as generic traits with concrete
//! implementations, allowing for extensibility and easy testing.

pub mod host;
pub mod responder;
pub mod transcript;
