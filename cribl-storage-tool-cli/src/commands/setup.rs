//! `iam setup`

use crate::cli::SetupArgs;
use crate::output;
use anyhow::{Context, Result};
use cribl_storage_tool_access::{
    load_bucket_file, parse_worker_arn, AwsSettings, RoleSetupRequest, StorageToolResult,
    StorageToolService,
};
use log::debug;

pub(crate) async fn run(args: SetupArgs) -> Result<()> {
    // Validate before any AWS configuration is loaded.
    let request = build_request(&args)?;
    debug!(
        "Setting up role '{}' for account {} ({} buckets)",
        request.role_name,
        request.trusted_account_id,
        request.bucket_names.len()
    );

    let settings = AwsSettings::new(args.profile, args.region);
    let service = StorageToolService::new(&settings)
        .await
        .context("Unable to load AWS SDK config")?;

    let outcome = service
        .setup_role(&request)
        .await
        .context("Error setting up IAM trust relationship")?;

    output::print_setup_outcome(&outcome)
}

/// Assemble the validated request from flags, the worker ARN and the bucket file.
pub(crate) fn build_request(args: &SetupArgs) -> StorageToolResult<RoleSetupRequest> {
    let (account, workspace, worker_group) = match args.worker_arn.as_deref() {
        Some(arn) => {
            let identity = parse_worker_arn(arn)?;
            (identity.account_id, identity.workspace, identity.worker_group)
        }
        None => (
            args.account.clone().unwrap_or_default(),
            args.workspace().to_string(),
            args.workergroup().to_string(),
        ),
    };

    let mut buckets: Vec<String> = args
        .buckets
        .iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect();
    if let Some(path) = args.bucket_file.as_deref() {
        buckets.extend(load_bucket_file(path)?);
    }

    let mut request = RoleSetupRequest::new(args.role.clone(), account, buckets)
        .with_workspace(workspace)
        .with_worker_group(worker_group)
        .with_action(args.action.clone());
    if let Some(external_id) = args.external_id.as_deref() {
        request = request.with_external_id(external_id);
    }
    request.normalized()
}
