//! Cloud Run services for Skyline
//!
//! Lists deployed services through the `gcloud` CLI and normalizes each
//! one into a [`ServiceRecord`](skyline_core::ServiceRecord) joined
//! against the [`MappingTable`](skyline_core::MappingTable).
//!
//! # Requirements
//!
//! - `gcloud` CLI must be installed, authenticated and pointed at the
//!   target project

pub mod error;
pub mod gcloud;

pub use error::{CloudRunError, Result};
pub use gcloud::{Condition, Gcloud, ServiceDescriptor, fetch_services, fetch_services_or_empty};
