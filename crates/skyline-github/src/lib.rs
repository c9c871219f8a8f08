//! GitHub repositories for Skyline
//!
//! Lists repositories through the `gh` CLI and annotates each one with
//! the Cloud Run service it deploys, if any.
//!
//! # Requirements
//!
//! - `gh` CLI must be installed and authenticated (`gh auth login`)

pub mod error;
pub mod gh;

pub use error::{GithubError, Result};
pub use gh::{Gh, REPO_LIMIT, RepoDescriptor, fetch_repos, fetch_repos_or_empty};
