//! Trusted principal selection.
//!
//! Search workloads assume the role from a per-workspace execution role,
//! every other workload from a `{workspace}-{workerGroup}` role.

use crate::types::SEARCH_ACTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustConvention {
    /// `role/search-exec-{workspace}`
    SearchExecution,
    /// `role/{workspace}-{workerGroup}`
    WorkerGroup,
}

impl TrustConvention {
    pub fn for_action(action: &str) -> Self {
        if action == SEARCH_ACTION {
            Self::SearchExecution
        } else {
            Self::WorkerGroup
        }
    }

    fn role_name(self, workspace: &str, worker_group: &str) -> String {
        match self {
            Self::SearchExecution => format!("search-exec-{workspace}"),
            Self::WorkerGroup => format!("{workspace}-{worker_group}"),
        }
    }
}

/// Build the ARN of the role allowed to assume the target role.
pub fn principal_arn(action: &str, account_id: &str, workspace: &str, worker_group: &str) -> String {
    let role = TrustConvention::for_action(action).role_name(workspace, worker_group);
    format!("arn:aws:iam::{account_id}:role/{role}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_convention_for_action() {
        assert_eq!(
            TrustConvention::for_action("search"),
            TrustConvention::SearchExecution
        );
        assert_eq!(
            TrustConvention::for_action("stream"),
            TrustConvention::WorkerGroup
        );
        // matching is exact
        assert_eq!(
            TrustConvention::for_action("Search"),
            TrustConvention::WorkerGroup
        );
    }

    #[test]
    fn test_worker_group_principal() {
        assert_eq!(
            principal_arn("stream", "111122223333", "main", "default"),
            "arn:aws:iam::111122223333:role/main-default"
        );
    }

    proptest! {
        #[test]
        fn search_principal_ignores_worker_group(
            account in "[0-9]{12}",
            workspace in "[a-z][a-z0-9]{0,15}",
            group_a in "[a-z0-9-]{1,16}",
            group_b in "[a-z0-9-]{1,16}",
        ) {
            let a = principal_arn("search", &account, &workspace, &group_a);
            let b = principal_arn("search", &account, &workspace, &group_b);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a, format!("arn:aws:iam::{account}:role/search-exec-{workspace}"));
        }

        #[test]
        fn worker_principal_joins_workspace_and_group(
            action in "[a-z]{1,10}".prop_filter("not search", |a| a != "search"),
            account in "[0-9]{12}",
            workspace in "[a-z][a-z0-9]{0,15}",
            group in "[a-z0-9-]{1,16}",
        ) {
            prop_assert_eq!(
                principal_arn(&action, &account, &workspace, &group),
                format!("arn:aws:iam::{account}:role/{workspace}-{group}")
            );
        }
    }
}
