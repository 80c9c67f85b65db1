//! Result storage in version control

pub mod git;

pub use git::{GitCli, VersionControl};
