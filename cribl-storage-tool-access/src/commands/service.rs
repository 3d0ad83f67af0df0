//! Storage Tool Service Layer
//!
//! This module provides the main service interface that holds the AWS clients
//! and exposes the high-level operations (role setup, bucket listing) used by
//! the CLI.

use crate::aws::config::{load_sdk_config, AwsSettings};
use crate::aws::AwsError;
use crate::aws::iam_client::AwsIamClient;
use crate::aws::s3_client::AwsS3Client;
use crate::commands::list::{list_buckets, BucketSelection};
use crate::commands::setup::PolicyReconciler;
use crate::error::{StorageToolError, StorageToolResult};
use crate::types::{Bucket, ReconcileOutcome, RoleSetupRequest};
use aws_sdk_iam::Client as IamClient;
use aws_sdk_s3::Client as S3Client;

/// Main service struct that holds AWS clients and provides business logic operations
pub struct StorageToolService {
    pub(crate) iam_client: AwsIamClient,
    pub(crate) s3_client: AwsS3Client,
}

impl StorageToolService {
    /// Create a new service instance with AWS clients
    ///
    /// The configuration is loaded using the default credential provider chain,
    /// narrowed by the optional profile and region in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageToolError::Config`] if no region or credentials
    /// provider can be resolved.
    pub async fn new(settings: &AwsSettings) -> StorageToolResult<Self> {
        let config = load_sdk_config(settings)
            .await
            .map_err(|e| match e {
                AwsError::ConfigError(message) => StorageToolError::config(message),
                other => StorageToolError::config(other.to_string()),
            })?;

        Ok(Self {
            iam_client: AwsIamClient::new(IamClient::new(&config)),
            s3_client: AwsS3Client::new(S3Client::new(&config)),
        })
    }

    /// Create or update the role and attach the bucket policy.
    pub async fn setup_role(&self, request: &RoleSetupRequest) -> StorageToolResult<ReconcileOutcome> {
        PolicyReconciler::new(&self.iam_client).reconcile(request).await
    }

    /// List buckets visible to the configured credentials.
    pub async fn list_buckets(&self, selection: &BucketSelection) -> StorageToolResult<Vec<Bucket>> {
        list_buckets(&self.s3_client, selection).await
    }
}
