//! Modules layer - Infrastructure components for local integrations
//!
//! Contains adapters that are not tied to a single feature, such as loading
//! image attachments from the filesystem.

pub mod attachments;
