//! Request and result types shared by the reconciler, the lister and the CLI.

use crate::error::{StorageToolError, StorageToolResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE_NAME: &str = "CrossAccountAccessRole";
pub const DEFAULT_WORKSPACE: &str = "main";
pub const DEFAULT_WORKER_GROUP: &str = "default";
pub const SEARCH_ACTION: &str = "search";
pub const DEFAULT_ACTION: &str = SEARCH_ACTION;

/// Desired state for one cross-account role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSetupRequest {
    pub role_name: String,
    pub trusted_account_id: String,
    /// Empty or `None` means no external-id condition.
    pub external_id: Option<String>,
    pub workspace: String,
    pub worker_group: String,
    pub action: String,
    pub bucket_names: Vec<String>,
}

impl RoleSetupRequest {
    pub fn new(
        role_name: impl Into<String>,
        trusted_account_id: impl Into<String>,
        bucket_names: Vec<String>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            trusted_account_id: trusted_account_id.into(),
            external_id: None,
            workspace: DEFAULT_WORKSPACE.to_string(),
            worker_group: DEFAULT_WORKER_GROUP.to_string(),
            action: DEFAULT_ACTION.to_string(),
            bucket_names,
        }
    }

    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    #[must_use]
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = workspace.into();
        self
    }

    #[must_use]
    pub fn with_worker_group(mut self, worker_group: impl Into<String>) -> Self {
        self.worker_group = worker_group.into();
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Validate required fields and return a copy with empty optional fields
    /// replaced by their defaults.
    pub fn normalized(&self) -> StorageToolResult<Self> {
        if self.role_name.trim().is_empty() {
            return Err(StorageToolError::invalid_input("roleName cannot be empty"));
        }
        if self.trusted_account_id.trim().is_empty() {
            return Err(StorageToolError::invalid_input(
                "trustedAccountId cannot be empty",
            ));
        }
        if self.bucket_names.is_empty() {
            return Err(StorageToolError::invalid_input(
                "at least one bucket name must be provided",
            ));
        }

        Ok(Self {
            role_name: self.role_name.clone(),
            trusted_account_id: self.trusted_account_id.clone(),
            external_id: self
                .external_id
                .clone()
                .filter(|id| !id.is_empty()),
            workspace: or_default(&self.workspace, DEFAULT_WORKSPACE),
            worker_group: or_default(&self.worker_group, DEFAULT_WORKER_GROUP),
            action: or_default(&self.action, DEFAULT_ACTION),
            bucket_names: self.bucket_names.clone(),
        })
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// An S3 bucket, serialized as `{"name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
}

impl Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// What the Role Store knows about an existing role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    pub name: String,
    pub arn: Option<String>,
}

/// What [`crate::PolicyReconciler`] did to the role before attaching its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    Created,
    Updated,
}

/// Summary of a successful reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub role_name: String,
    pub role_change: RoleChange,
    pub principal_arn: String,
    pub policy_name: String,
    pub resource_count: usize,
}
