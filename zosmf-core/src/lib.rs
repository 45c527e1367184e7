//! z/OSMF SDK Core
//!
//! Core types and abstractions for the z/OSMF SDK.
//!
//! This crate contains:
//! - Domain types: z/OSMF job and spool entities as returned by the REST API
//! - DTOs: request bodies and query parameters for the job REST services
//! - Profiles: team-configuration discovery and connection-profile loading
//! - Errors: the shared error taxonomy for profile and configuration handling

pub mod domain;
pub mod dto;
pub mod error;
pub mod profile;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use profile::{Profile, ProfileManager, ZosmfProfile};
