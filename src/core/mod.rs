//! Core domain logic for doccheck
//!
//! This module contains the pure coverage and markup logic. Filesystem access
//! goes through the port traits so the services can be tested without a disk.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Pairing, CoverageIssue, MarkupHit, Marker)
//! - `services/` - Set comparison and hit filtering
//! - `ports/` - Trait definitions for directory listing and tree search
//! - `error` - Setup errors that stop a check from running

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::CheckError;
