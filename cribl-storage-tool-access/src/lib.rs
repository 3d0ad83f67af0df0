//! This crate provides the core business logic for the Cribl storage tool:
//! - Cross-account IAM role reconciliation (trust policy + S3 inline policy)
//! - S3 bucket listing with substring, regex, or explicit-list narrowing
//! - Bucket-file and worker ARN parsing
//!

mod aws;
pub mod commands;
mod error;
mod parsing;
mod synthesis;
mod types;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports for a small, focused public API
pub use aws::arn::{extract_account_from_arn, parse_worker_arn, WorkerIdentity};
pub use aws::config::{load_sdk_config, AwsSettings};
pub use aws::iam_client::AwsIamClient;
pub use aws::s3_client::AwsS3Client;
pub use aws::{AwsError, AwsResult, ObjectStore, RoleStore};
pub use commands::{
    list_buckets, BucketSelection, PolicyReconciler, StorageToolService, INLINE_POLICY_NAME,
    ROLE_DESCRIPTION,
};
pub use error::{RoleOperation, StorageToolError, StorageToolResult};
pub use parsing::{load_bucket_file, parse_bucket_names};
pub use synthesis::{
    build_inline_policy, build_trust_policy, principal_arn, AwsPrincipal, InlinePolicyDocument,
    PermissionStatement, TrustCondition, TrustConvention, TrustPolicyDocument, TrustStatement,
    POLICY_VERSION,
};
pub use types::{
    Bucket, ReconcileOutcome, RoleChange, RoleInfo, RoleSetupRequest, DEFAULT_ACTION,
    DEFAULT_ROLE_NAME, DEFAULT_WORKER_GROUP, DEFAULT_WORKSPACE, SEARCH_ACTION,
};
