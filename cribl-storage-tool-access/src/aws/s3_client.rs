//! AWS S3 client wrapper for bucket enumeration

use crate::aws::{AwsError, AwsResult, ObjectStore};
use crate::types::Bucket;
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;

pub struct AwsS3Client {
    client: S3Client,
}

impl AwsS3Client {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for AwsS3Client {
    // Single ListBuckets call; continuation tokens are not followed.
    async fn list_buckets(&self) -> AwsResult<Vec<Bucket>> {
        let output = self.client.list_buckets().send().await.map_err(|e| {
            AwsError::S3Error(format!(
                "Failed to list buckets: {}",
                DisplayErrorContext(&e)
            ))
        })?;

        Ok(output
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name())
            .map(Bucket::new)
            .collect())
    }
}
