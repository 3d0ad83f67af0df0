//! Role setup: converge a role's trust policy and S3 inline policy.

use crate::aws::RoleStore;
use crate::error::{RoleOperation, StorageToolError, StorageToolResult};
use crate::synthesis::{build_inline_policy, build_trust_policy, principal_arn};
use crate::types::{ReconcileOutcome, RoleChange, RoleSetupRequest};
use log::{debug, info};
use serde::Serialize;

/// Name of the inline policy that carries the bucket permissions.
pub const INLINE_POLICY_NAME: &str = "CrossAccountAccessPolicy";

pub const ROLE_DESCRIPTION: &str = "Role for cross-account access to S3";

/// Drives a [`RoleStore`] to the state described by a [`RoleSetupRequest`].
///
/// Both documents are rebuilt from the request on every run and written as a
/// full replacement, so running the same request again converges a role left
/// half-configured by an earlier failure. Nothing is rolled back on error.
pub struct PolicyReconciler<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RoleStore + ?Sized> PolicyReconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn reconcile(&self, request: &RoleSetupRequest) -> StorageToolResult<ReconcileOutcome> {
        let request = request.normalized()?;
        let role_name = request.role_name.as_str();

        let principal = principal_arn(
            &request.action,
            &request.trusted_account_id,
            &request.workspace,
            &request.worker_group,
        );
        let trust_policy = to_json(
            &build_trust_policy(&principal, request.external_id.as_deref()),
            "trust policy",
        )?;
        debug!("Trust policy for role '{}': {}", role_name, trust_policy);

        let role_change = self.ensure_role_exists(role_name, &trust_policy).await?;

        let inline_policy = build_inline_policy(&request.bucket_names);
        let resource_count = inline_policy.resource_count();
        let inline_policy = to_json(&inline_policy, "inline policy")?;
        debug!("Inline policy for role '{}': {}", role_name, inline_policy);

        self.store
            .put_inline_policy(role_name, INLINE_POLICY_NAME, &inline_policy)
            .await
            .map_err(|e| {
                StorageToolError::role_store_after(
                    role_name,
                    RoleOperation::PutInlinePolicy,
                    role_change,
                    e,
                )
            })?;
        info!("PutRolePolicy '{}' succeeded for '{}'", INLINE_POLICY_NAME, role_name);

        Ok(ReconcileOutcome {
            role_name: role_name.to_string(),
            role_change,
            principal_arn: principal,
            policy_name: INLINE_POLICY_NAME.to_string(),
            resource_count,
        })
    }

    async fn ensure_role_exists(
        &self,
        role_name: &str,
        trust_policy: &str,
    ) -> StorageToolResult<RoleChange> {
        let existing = self
            .store
            .get_role(role_name)
            .await
            .map_err(|e| StorageToolError::role_store(role_name, RoleOperation::GetRole, e))?;

        if existing.is_some() {
            self.store
                .update_trust_policy(role_name, trust_policy)
                .await
                .map_err(|e| {
                    StorageToolError::role_store(role_name, RoleOperation::UpdateTrustPolicy, e)
                })?;
            info!("UpdateAssumeRolePolicy succeeded for '{}'", role_name);
            Ok(RoleChange::Updated)
        } else {
            self.store
                .create_role(role_name, trust_policy, ROLE_DESCRIPTION)
                .await
                .map_err(|e| StorageToolError::role_store(role_name, RoleOperation::CreateRole, e))?;
            info!("CreateRole succeeded for '{}'", role_name);
            Ok(RoleChange::Created)
        }
    }
}

fn to_json<T: Serialize>(document: &T, context: &str) -> StorageToolResult<String> {
    serde_json::to_string(document).map_err(|source| StorageToolError::Serialization {
        context: context.to_string(),
        source,
    })
}
