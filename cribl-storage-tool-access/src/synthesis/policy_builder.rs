//! Trust and inline policy document builders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const POLICY_VERSION: &str = "2012-10-17";

const TRUST_ACTIONS: [&str; 3] = ["sts:AssumeRole", "sts:TagSession", "sts:SetSourceIdentity"];

const BUCKET_ACTIONS: [&str; 4] = [
    "s3:ListBucket",
    "s3:GetObject",
    "s3:PutObject",
    "s3:GetBucketLocation",
];

const EXTERNAL_ID_KEY: &str = "sts:ExternalId";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrustPolicyDocument {
    pub version: String,
    pub statement: Vec<TrustStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrustStatement {
    pub effect: String,
    pub principal: AwsPrincipal,
    pub action: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub condition: Option<TrustCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsPrincipal {
    #[serde(rename = "AWS")]
    pub aws: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustCondition {
    #[serde(rename = "StringEquals")]
    pub string_equals: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InlinePolicyDocument {
    pub version: String,
    pub statement: Vec<PermissionStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionStatement {
    pub effect: String,
    pub action: Vec<String>,
    pub resource: Vec<String>,
}

impl TrustPolicyDocument {
    /// The single trusted principal ARN.
    pub fn principal(&self) -> Option<&str> {
        self.statement.first().map(|s| s.principal.aws.as_str())
    }
}

impl InlinePolicyDocument {
    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.statement
            .iter()
            .flat_map(|s| s.resource.iter().map(String::as_str))
    }

    pub fn resource_count(&self) -> usize {
        self.statement.iter().map(|s| s.resource.len()).sum()
    }
}

/// Build the trust policy for `principal_arn`; an empty or absent external id
/// leaves out the `Condition` block.
pub fn build_trust_policy(principal_arn: &str, external_id: Option<&str>) -> TrustPolicyDocument {
    let condition = external_id.filter(|id| !id.is_empty()).map(|id| TrustCondition {
        string_equals: BTreeMap::from([(EXTERNAL_ID_KEY.to_string(), id.to_string())]),
    });

    TrustPolicyDocument {
        version: POLICY_VERSION.to_string(),
        statement: vec![TrustStatement {
            effect: "Allow".to_string(),
            principal: AwsPrincipal {
                aws: principal_arn.to_string(),
            },
            action: TRUST_ACTIONS.iter().map(|a| (*a).to_string()).collect(),
            condition,
        }],
    }
}

/// Build the S3 permission policy. Every bucket contributes its bucket ARN and
/// its object ARN, in input order; duplicates are kept.
pub fn build_inline_policy(bucket_names: &[String]) -> InlinePolicyDocument {
    let resource = bucket_names
        .iter()
        .flat_map(|bucket| [format!("arn:aws:s3:::{bucket}"), format!("arn:aws:s3:::{bucket}/*")])
        .collect();

    InlinePolicyDocument {
        version: POLICY_VERSION.to_string(),
        statement: vec![PermissionStatement {
            effect: "Allow".to_string(),
            action: BUCKET_ACTIONS.iter().map(|a| (*a).to_string()).collect(),
            resource,
        }],
    }
}
