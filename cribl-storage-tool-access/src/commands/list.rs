//! Bucket listing with optional narrowing.

use crate::aws::ObjectStore;
use crate::error::{StorageToolError, StorageToolResult};
use crate::parsing::load_bucket_file;
use crate::types::Bucket;
use log::debug;
use regex::Regex;
use std::path::Path;

/// How the bucket listing is narrowed. At most one mode applies.
#[derive(Debug, Clone)]
pub enum BucketSelection {
    All,
    /// Names containing the substring
    Substring(String),
    /// Names matching the pattern anywhere
    Pattern(Regex),
    /// Names supplied by the caller; the store is not asked
    Explicit(Vec<String>),
}

impl BucketSelection {
    /// Build a selection from the optional filter, regex, and bucket-file
    /// inputs. Empty values count as absent; more than one present value is an
    /// error. The bucket file is only read once the inputs are known to be
    /// consistent.
    pub fn from_options(
        filter: Option<&str>,
        regex: Option<&str>,
        bucket_file: Option<&Path>,
    ) -> StorageToolResult<Self> {
        let filter = filter.filter(|f| !f.is_empty());
        let regex = regex.filter(|r| !r.is_empty());
        let bucket_file = bucket_file.filter(|p| !p.as_os_str().is_empty());

        let given = [filter.is_some(), regex.is_some(), bucket_file.is_some()]
            .into_iter()
            .filter(|present| *present)
            .count();
        if given > 1 {
            return Err(StorageToolError::invalid_input(
                "--filter, --regex, and --bucket-file cannot be used together; use only one",
            ));
        }

        if let Some(filter) = filter {
            return Ok(Self::Substring(filter.to_string()));
        }
        if let Some(pattern) = regex {
            let compiled = Regex::new(pattern).map_err(|e| {
                StorageToolError::invalid_input(format!("invalid regex pattern '{pattern}': {e}"))
            })?;
            return Ok(Self::Pattern(compiled));
        }
        if let Some(path) = bucket_file {
            return Ok(Self::Explicit(load_bucket_file(path)?));
        }
        Ok(Self::All)
    }

    /// Buckets named directly by the caller, if this is an explicit selection.
    pub fn supplied_buckets(&self) -> Option<Vec<Bucket>> {
        match self {
            Self::Explicit(names) => Some(names.iter().map(Bucket::new).collect()),
            _ => None,
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::All | Self::Explicit(_) => true,
            Self::Substring(needle) => name.contains(needle.as_str()),
            Self::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

/// List buckets from `store` narrowed by `selection`, keeping backend order.
pub async fn list_buckets<S: ObjectStore + ?Sized>(
    store: &S,
    selection: &BucketSelection,
) -> StorageToolResult<Vec<Bucket>> {
    if let Some(buckets) = selection.supplied_buckets() {
        debug!("Using {} buckets supplied by the caller", buckets.len());
        return Ok(buckets);
    }

    let buckets = store
        .list_buckets()
        .await
        .map_err(|source| StorageToolError::ObjectStore { source })?;
    let total = buckets.len();

    let selected: Vec<Bucket> = buckets
        .into_iter()
        .filter(|bucket| selection.matches(&bucket.name))
        .collect();
    debug!("Selected {} of {} buckets", selected.len(), total);
    Ok(selected)
}
