//! Core components, types, and utilities for the support widget.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Built-in response texts and their markup rendering.
//! - Common types and result handling.

pub mod config;
pub mod markup;
pub mod responses;
pub mod types;
