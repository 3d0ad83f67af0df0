//! AWS SDK integration: store capabilities, IAM/S3 client wrappers, config
//! loading and ARN parsing.

pub mod arn;
pub mod config;
pub(crate) mod iam_client;
pub(crate) mod s3_client;

use crate::types::{Bucket, RoleInfo};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("AWS configuration error: {0}")]
    ConfigError(String),
    #[error("IAM client error: {0}")]
    IamError(String),
    #[error("S3 client error: {0}")]
    S3Error(String),
}

pub type AwsResult<T> = Result<T, AwsError>;

/// Identity-management backend holding roles and their policies.
///
/// Policy documents cross this boundary as serialized JSON.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// `Ok(None)` when the role does not exist.
    async fn get_role(&self, role_name: &str) -> AwsResult<Option<RoleInfo>>;

    async fn create_role(
        &self,
        role_name: &str,
        trust_policy: &str,
        description: &str,
    ) -> AwsResult<()>;

    async fn update_trust_policy(&self, role_name: &str, trust_policy: &str) -> AwsResult<()>;

    /// Create-or-replace the inline policy `policy_name` on the role.
    async fn put_inline_policy(
        &self,
        role_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> AwsResult<()>;
}

/// Object storage backend that can enumerate buckets.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Buckets in backend order.
    async fn list_buckets(&self) -> AwsResult<Vec<Bucket>>;
}
