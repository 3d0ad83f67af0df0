//! ARN helpers: account extraction and worker role ARN parsing.

use crate::error::{StorageToolError, StorageToolResult};

/// Account, workspace and worker group encoded in a worker role ARN of the
/// form `arn:aws:iam::ACCOUNT:role/WORKSPACE-WORKERGROUP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerIdentity {
    pub account_id: String,
    pub workspace: String,
    pub worker_group: String,
}

/// Extract 12-digit account ID from ARN (field 5 in colon-delimited format)
pub fn extract_account_from_arn(arn: &str) -> Option<String> {
    let parts: Vec<&str> = arn.split(':').collect();
    if parts.len() >= 6 {
        let account_id = parts[4];
        if account_id.len() == 12 && account_id.chars().all(|c| c.is_ascii_digit()) {
            return Some(account_id.to_string());
        }
    }
    None
}

/// Parse a worker role ARN into its account, workspace and worker group.
///
/// The role name is split at its first `-`; anything after it, dashes
/// included, is the worker group. A role path before the name is ignored.
pub fn parse_worker_arn(arn: &str) -> StorageToolResult<WorkerIdentity> {
    let malformed = |reason: &str| {
        StorageToolError::invalid_input(format!(
            "malformed worker ARN '{arn}': {reason} (expected arn:aws:iam::ACCOUNT:role/WORKSPACE-WORKERGROUP)"
        ))
    };

    let parts: Vec<&str> = arn.splitn(6, ':').collect();
    if parts.len() != 6 || parts[0] != "arn" || parts[1].is_empty() {
        return Err(malformed("not an ARN"));
    }
    if parts[2] != "iam" {
        return Err(malformed("not an IAM ARN"));
    }

    let account_id =
        extract_account_from_arn(arn).ok_or_else(|| malformed("account must be 12 digits"))?;

    let role_path = parts[5]
        .strip_prefix("role/")
        .ok_or_else(|| malformed("resource is not a role"))?;
    let role_name = role_path.rsplit('/').next().unwrap_or(role_path);

    match role_name.split_once('-') {
        Some((workspace, worker_group)) if !workspace.is_empty() && !worker_group.is_empty() => {
            Ok(WorkerIdentity {
                account_id,
                workspace: workspace.to_string(),
                worker_group: worker_group.to_string(),
            })
        }
        _ => Err(malformed("role name must be WORKSPACE-WORKERGROUP")),
    }
}
