//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own query construction and validation so route handlers
//! stay focused on protocol translation.

pub mod listing;
pub mod maps;
