use anyhow::{Context, Result};
use cribl_storage_tool_access::{Bucket, ReconcileOutcome, RoleChange};
use log::debug;
use std::io::{self, Write};

/// Bucket listing output formats; unknown names fall back to [`OutputFormat::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Names,
}

impl OutputFormat {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            "names" => Self::Names,
            "text" => Self::Text,
            other => {
                debug!("Unknown output format '{}', using text", other);
                Self::Text
            }
        }
    }
}

pub(crate) fn error(msg: &str) {
    let _ = writeln!(io::stderr(), "cribl-storage-tool: error: {}", msg);
}

pub(crate) fn render_buckets(buckets: &[Bucket], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(buckets)
                .context("Failed to serialize buckets to JSON")?;
            Ok(json + "\n")
        }
        OutputFormat::Names => Ok(buckets.iter().map(|b| format!("{}\n", b.name)).collect()),
        OutputFormat::Text => {
            let mut out = String::from("Listing S3 Buckets:\n");
            for bucket in buckets {
                out.push_str(&format!(" - {}\n", bucket.name));
            }
            Ok(out)
        }
    }
}

/// Write the bucket listing to stdout
pub(crate) fn print_buckets(buckets: &[Bucket], format: OutputFormat) -> Result<()> {
    let rendered = render_buckets(buckets, format)?;
    let stdout = io::stdout();
    let mut w = stdout.lock();
    w.write_all(rendered.as_bytes())
        .context("Failed to write bucket listing")?;
    w.flush().context("Failed to flush stdout")
}

pub(crate) fn render_setup_outcome(outcome: &ReconcileOutcome) -> String {
    let role_line = match outcome.role_change {
        RoleChange::Created => format!(
            "Created IAM role '{}' with trust relationship.",
            outcome.role_name
        ),
        RoleChange::Updated => format!(
            "Updated trust relationship for IAM role '{}'.",
            outcome.role_name
        ),
    };
    format!(
        "{role_line}\nTrusted principal: {}\nAttached policy '{}' to IAM role '{}' ({} resources).\n\nIAM trust relationship setup completed successfully.\n",
        outcome.principal_arn, outcome.policy_name, outcome.role_name, outcome.resource_count
    )
}

pub(crate) fn print_setup_outcome(outcome: &ReconcileOutcome) -> Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    w.write_all(render_setup_outcome(outcome).as_bytes())
        .context("Failed to write setup summary")?;
    w.flush().context("Failed to flush stdout")
}
