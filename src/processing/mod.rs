//! Run-and-publish pipeline

pub mod publish;

pub use publish::{FailurePolicy, PublishError, PublishReport, PublishTask};
