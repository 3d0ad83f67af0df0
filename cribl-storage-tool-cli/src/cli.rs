//! Command tree for `cribl-storage-tool`.

use clap::{ArgAction, Args, Parser, Subcommand};
use cribl_storage_tool_access::{
    DEFAULT_ACTION, DEFAULT_ROLE_NAME, DEFAULT_WORKER_GROUP, DEFAULT_WORKSPACE,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cribl-storage-tool",
    version,
    about = "A CLI tool to manage Cribl storage",
    long_about = "Cribl Storage Tool sets up cross-account IAM roles for Cribl workloads and lists the S3 buckets they can reach."
)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Manage IAM resources
    Iam {
        #[command(subcommand)]
        command: IamCommands,
    },
    /// Manage S3 resources
    S3 {
        #[command(subcommand)]
        command: S3Commands,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum IamCommands {
    /// Setup IAM role for cross-account access
    Setup(SetupArgs),
}

#[derive(Subcommand, Debug)]
pub(crate) enum S3Commands {
    /// List all S3 buckets
    List(ListArgs),
}

#[derive(Args, Debug)]
pub(crate) struct SetupArgs {
    /// Name of the IAM role to create or update
    #[arg(short = 'r', long, default_value = DEFAULT_ROLE_NAME)]
    pub role: String,

    /// AWS account ID to trust
    #[arg(short = 'a', long, required_unless_present = "worker_arn")]
    pub account: Option<String>,

    /// Worker role ARN (arn:aws:iam::ACCOUNT:role/WORKSPACE-WORKERGROUP) to derive account, workspace and worker group from
    #[arg(long, conflicts_with_all = ["account", "workspace", "workergroup"])]
    pub worker_arn: Option<String>,

    /// External ID for the trust relationship
    #[arg(short = 'e', long)]
    pub external_id: Option<String>,

    /// Workspace name
    #[arg(short = 'w', long)]
    pub workspace: Option<String>,

    /// Worker group name
    #[arg(short = 'g', long)]
    pub workergroup: Option<String>,

    /// Action type for the IAM role ("search" trusts search-exec-WORKSPACE)
    #[arg(short = 's', long, default_value = DEFAULT_ACTION)]
    pub action: String,

    /// S3 bucket to grant access to (repeatable or comma-separated)
    #[arg(short = 'b', long = "bucket", value_delimiter = ',')]
    pub buckets: Vec<String>,

    /// File with S3 bucket names (JSON array, JSON objects with "name", or one per line)
    #[arg(short = 'f', long)]
    pub bucket_file: Option<PathBuf>,

    /// AWS profile to use for authentication
    #[arg(short = 'p', long)]
    pub profile: Option<String>,

    /// AWS region to target
    #[arg(short = 'z', long)]
    pub region: Option<String>,
}

impl SetupArgs {
    pub fn workspace(&self) -> &str {
        self.workspace.as_deref().unwrap_or(DEFAULT_WORKSPACE)
    }

    pub fn workergroup(&self) -> &str {
        self.workergroup.as_deref().unwrap_or(DEFAULT_WORKER_GROUP)
    }
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Output format: text, json, or names
    #[arg(short = 'o', long, default_value = "text")]
    pub output: String,

    /// Filter bucket names containing the specified substring
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Filter bucket names matching the specified regular expression
    #[arg(short = 'x', long)]
    pub regex: Option<String>,

    /// File with S3 bucket names to list instead of querying S3
    #[arg(short = 'b', long)]
    pub bucket_file: Option<PathBuf>,

    /// AWS profile to use for authentication
    #[arg(short = 'p', long)]
    pub profile: Option<String>,

    /// AWS region to target
    #[arg(short = 'r', long)]
    pub region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_setup_defaults() {
        let cli = Cli::parse_from([
            "cribl-storage-tool",
            "iam",
            "setup",
            "-a",
            "111122223333",
            "-b",
            "logs,metrics",
            "-b",
            "archive",
        ]);
        let Commands::Iam {
            command: IamCommands::Setup(args),
        } = cli.command
        else {
            panic!("expected iam setup");
        };
        assert_eq!(args.role, "CrossAccountAccessRole");
        assert_eq!(args.action, "search");
        assert_eq!(args.workspace(), "main");
        assert_eq!(args.workergroup(), "default");
        assert_eq!(args.buckets, vec!["logs", "metrics", "archive"]);
    }

    #[test]
    fn test_worker_arn_conflicts_with_account() {
        let result = Cli::try_parse_from([
            "cribl-storage-tool",
            "iam",
            "setup",
            "-a",
            "111122223333",
            "--worker-arn",
            "arn:aws:iam::111122223333:role/main-default",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_account_required_without_worker_arn() {
        let result = Cli::try_parse_from(["cribl-storage-tool", "iam", "setup", "-b", "logs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::parse_from([
            "cribl-storage-tool",
            "s3",
            "list",
            "-o",
            "names",
            "-x",
            "^prod-",
            "-r",
            "us-east-1",
        ]);
        let Commands::S3 {
            command: S3Commands::List(args),
        } = cli.command
        else {
            panic!("expected s3 list");
        };
        assert_eq!(args.output, "names");
        assert_eq!(args.regex.as_deref(), Some("^prod-"));
        assert_eq!(args.region.as_deref(), Some("us-east-1"));
    }
}
