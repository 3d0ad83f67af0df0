//! Policy synthesis (deterministic JSON generation)

pub mod policy_builder;
pub mod principal;

pub use policy_builder::{
    build_inline_policy, build_trust_policy, AwsPrincipal, InlinePolicyDocument,
    PermissionStatement, TrustCondition, TrustPolicyDocument, TrustStatement, POLICY_VERSION,
};
pub use principal::{principal_arn, TrustConvention};
