//! `s3 list`

use crate::cli::ListArgs;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use cribl_storage_tool_access::{AwsSettings, BucketSelection, StorageToolService};

pub(crate) async fn run(args: ListArgs) -> Result<()> {
    // Flag conflicts and bucket-file problems surface before AWS is touched.
    let selection = BucketSelection::from_options(
        args.filter.as_deref(),
        args.regex.as_deref(),
        args.bucket_file.as_deref(),
    )?;
    let format = OutputFormat::from_name(&args.output);

    if let Some(buckets) = selection.supplied_buckets() {
        return output::print_buckets(&buckets, format);
    }

    let settings = AwsSettings::new(args.profile, args.region);
    let service = StorageToolService::new(&settings)
        .await
        .context("Unable to load AWS SDK config")?;

    let buckets = service
        .list_buckets(&selection)
        .await
        .context("Error listing S3 buckets")?;

    output::print_buckets(&buckets, format)
}
