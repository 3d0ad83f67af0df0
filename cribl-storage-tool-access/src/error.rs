//! Error handling module

use crate::aws::AwsError;
use crate::types::RoleChange;
use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail with [`StorageToolError`]
pub type StorageToolResult<T> = Result<T, StorageToolError>;

/// The Role Store call that failed during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOperation {
    GetRole,
    CreateRole,
    UpdateTrustPolicy,
    PutInlinePolicy,
}

impl fmt::Display for RoleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::GetRole => "look up IAM role",
            Self::CreateRole => "create IAM role",
            Self::UpdateTrustPolicy => "update trust policy",
            Self::PutInlinePolicy => "put inline policy",
        };
        f.write_str(text)
    }
}

fn prior_change_note(prior_change: &Option<RoleChange>) -> &'static str {
    match prior_change {
        None => "",
        Some(RoleChange::Created) => " after the role was created; rerun to converge",
        Some(RoleChange::Updated) => " after its trust policy was updated; rerun to converge",
    }
}

/// Error type for every operation exposed by this crate.
#[derive(Error, Debug)]
pub enum StorageToolError {
    /// Missing required field, conflicting flags, malformed bucket file or ARN
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Detailed validation error message
        message: String,
    },

    /// Role lookup/create/update/policy-put failure other than not-found
    #[error(
        "Failed to {operation} for role '{role_name}'{}",
        prior_change_note(.prior_change)
    )]
    RoleStore {
        /// Role the operation targeted
        role_name: String,
        /// Which store call failed
        operation: RoleOperation,
        /// Change already applied to the role when the call failed
        prior_change: Option<RoleChange>,
        #[source]
        source: AwsError,
    },

    /// Bucket listing failure
    #[error("Failed to list S3 buckets")]
    ObjectStore {
        #[source]
        source: AwsError,
    },

    /// Credential or region resolution failure
    #[error("AWS configuration error: {message}")]
    Config { message: String },

    /// Policy document encoding failure
    #[error("Failed to serialize {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageToolError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn role_store(
        role_name: impl Into<String>,
        operation: RoleOperation,
        source: AwsError,
    ) -> Self {
        Self::RoleStore {
            role_name: role_name.into(),
            operation,
            prior_change: None,
            source,
        }
    }

    /// A store failure that left the role partially converged.
    pub fn role_store_after(
        role_name: impl Into<String>,
        operation: RoleOperation,
        prior_change: RoleChange,
        source: AwsError,
    ) -> Self {
        Self::RoleStore {
            role_name: role_name.into(),
            operation,
            prior_change: Some(prior_change),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than AWS.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_role_store_error_names_role_and_operation() {
        let err = StorageToolError::role_store(
            "CrossAccountAccessRole",
            RoleOperation::UpdateTrustPolicy,
            AwsError::IamError("throttled".to_string()),
        );
        let text = err.to_string();
        assert!(text.contains("update trust policy"), "{text}");
        assert!(text.contains("'CrossAccountAccessRole'"), "{text}");
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("throttled"), "{source}");
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_role_store_error_reports_prior_change() {
        let err = StorageToolError::role_store_after(
            "CrossAccountAccessRole",
            RoleOperation::PutInlinePolicy,
            RoleChange::Created,
            AwsError::IamError("throttled".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Failed to put inline policy for role 'CrossAccountAccessRole' after the role was created; rerun to converge"
        );
    }

    #[test]
    fn test_invalid_input_helper() {
        let err = StorageToolError::invalid_input("roleName cannot be empty");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: roleName cannot be empty");
    }
}
