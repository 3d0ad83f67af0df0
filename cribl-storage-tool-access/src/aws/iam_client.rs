//! AWS IAM client wrapper for role and inline policy operations

use crate::aws::{AwsError, AwsResult, RoleStore};
use crate::types::RoleInfo;
use async_trait::async_trait;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::operation::get_role::GetRoleError;
use aws_sdk_iam::Client as IamClient;

pub struct AwsIamClient {
    client: IamClient,
}

impl AwsIamClient {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoleStore for AwsIamClient {
    async fn get_role(&self, role_name: &str) -> AwsResult<Option<RoleInfo>> {
        match self.client.get_role().role_name(role_name).send().await {
            Ok(output) => Ok(Some(RoleInfo {
                name: role_name.to_string(),
                arn: output.role().map(|role| role.arn().to_string()),
            })),
            Err(e)
                if e.as_service_error()
                    .is_some_and(GetRoleError::is_no_such_entity_exception) =>
            {
                Ok(None)
            }
            Err(e) => Err(AwsError::IamError(format!(
                "Failed to get role '{role_name}': {}",
                DisplayErrorContext(&e)
            ))),
        }
    }

    async fn create_role(
        &self,
        role_name: &str,
        trust_policy: &str,
        description: &str,
    ) -> AwsResult<()> {
        self.client
            .create_role()
            .role_name(role_name)
            .assume_role_policy_document(trust_policy)
            .description(description)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "Failed to create role '{role_name}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }

    async fn update_trust_policy(&self, role_name: &str, trust_policy: &str) -> AwsResult<()> {
        self.client
            .update_assume_role_policy()
            .role_name(role_name)
            .policy_document(trust_policy)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "Failed to update trust policy for role '{role_name}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }

    async fn put_inline_policy(
        &self,
        role_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> AwsResult<()> {
        self.client
            .put_role_policy()
            .role_name(role_name)
            .policy_name(policy_name)
            .policy_document(policy_document)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "Failed to put role policy '{policy_name}' on role '{role_name}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }
}
