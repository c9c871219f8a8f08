//! Skyline core
//!
//! Shared building blocks for the dashboard data refresh:
//!
//! - [`MappingTable`]: the compiled-in association between Cloud Run
//!   services and the GitHub repositories that produce them
//! - [`ServiceRecord`], [`RepoRecord`], [`MetaRecord`]: the records written
//!   to the dashboard snapshot files
//! - [`CommandRunner`]: execution of the external listing CLIs with a
//!   bounded runtime
//!
//! # Example
//!
//! ```ignore
//! use skyline_core::{CommandSpec, CommandRunner, MappingTable, SystemRunner};
//!
//! let mapping = MappingTable::builtin();
//! assert_eq!(mapping.repo_for("seyca"), Some("seyca_produccion"));
//!
//! let runner = SystemRunner::default();
//! let stdout = runner.run(&CommandSpec::new("gh", ["repo", "list"])).await?;
//! ```

pub mod error;
pub mod mapping;
pub mod model;
pub mod runner;

pub use error::{Result, RunError};
pub use mapping::{GITHUB_ORG, MappingTable, PROJECT_NAME};
pub use model::{MetaRecord, RepoRecord, ServiceRecord};
pub use runner::{CommandRunner, CommandSpec, DEFAULT_TIMEOUT, SystemRunner};
