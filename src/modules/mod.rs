//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for resources outside the application, like the on-disk
//! page cache.

pub mod cache;
