//! Commands module - service layer for role setup and bucket listing

mod list;
pub(crate) mod service;
mod setup;

pub use list::{list_buckets, BucketSelection};
pub use service::StorageToolService;
pub use setup::{PolicyReconciler, INLINE_POLICY_NAME, ROLE_DESCRIPTION};
