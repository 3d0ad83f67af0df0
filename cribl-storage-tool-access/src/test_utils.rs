//! In-memory store fakes for unit tests.

use crate::aws::{AwsError, AwsResult, ObjectStore, RoleStore};
use crate::error::RoleOperation;
use crate::types::{Bucket, RoleInfo};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StoredRole {
    pub trust_policy: String,
    pub description: Option<String>,
    pub inline_policies: BTreeMap<String, String>,
}

#[derive(Default)]
pub(crate) struct MemoryRoleStore {
    roles: Mutex<HashMap<String, StoredRole>>,
    calls: Mutex<Vec<RoleOperation>>,
    fail_on: Option<RoleOperation>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(self, role_name: &str, trust_policy: &str) -> Self {
        self.roles.lock().expect("roles lock").insert(
            role_name.to_string(),
            StoredRole {
                trust_policy: trust_policy.to_string(),
                ..StoredRole::default()
            },
        );
        self
    }

    pub fn failing_on(mut self, operation: RoleOperation) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn seed_inline_policy(&self, role_name: &str, policy_name: &str, document: &str) {
        if let Some(role) = self.roles.lock().expect("roles lock").get_mut(role_name) {
            role.inline_policies
                .insert(policy_name.to_string(), document.to_string());
        }
    }

    pub fn role(&self, role_name: &str) -> Option<StoredRole> {
        self.roles.lock().expect("roles lock").get(role_name).cloned()
    }

    pub fn calls(&self) -> Vec<RoleOperation> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, operation: RoleOperation) -> AwsResult<()> {
        self.calls.lock().expect("calls lock").push(operation);
        if self.fail_on == Some(operation) {
            return Err(AwsError::IamError(format!("injected {operation} failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn get_role(&self, role_name: &str) -> AwsResult<Option<RoleInfo>> {
        self.record(RoleOperation::GetRole)?;
        Ok(self
            .roles
            .lock()
            .expect("roles lock")
            .get(role_name)
            .map(|_| RoleInfo {
                name: role_name.to_string(),
                arn: Some(format!("arn:aws:iam::999988887777:role/{role_name}")),
            }))
    }

    async fn create_role(
        &self,
        role_name: &str,
        trust_policy: &str,
        description: &str,
    ) -> AwsResult<()> {
        self.record(RoleOperation::CreateRole)?;
        self.roles.lock().expect("roles lock").insert(
            role_name.to_string(),
            StoredRole {
                trust_policy: trust_policy.to_string(),
                description: Some(description.to_string()),
                inline_policies: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn update_trust_policy(&self, role_name: &str, trust_policy: &str) -> AwsResult<()> {
        self.record(RoleOperation::UpdateTrustPolicy)?;
        match self.roles.lock().expect("roles lock").get_mut(role_name) {
            Some(role) => {
                role.trust_policy = trust_policy.to_string();
                Ok(())
            }
            None => Err(AwsError::IamError(format!("NoSuchEntity: {role_name}"))),
        }
    }

    async fn put_inline_policy(
        &self,
        role_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> AwsResult<()> {
        self.record(RoleOperation::PutInlinePolicy)?;
        match self.roles.lock().expect("roles lock").get_mut(role_name) {
            Some(role) => {
                role.inline_policies
                    .insert(policy_name.to_string(), policy_document.to_string());
                Ok(())
            }
            None => Err(AwsError::IamError(format!("NoSuchEntity: {role_name}"))),
        }
    }
}

/// Returns a fixed bucket list and counts how often it was asked.
pub(crate) struct MemoryObjectStore {
    buckets: Vec<Bucket>,
    list_calls: AtomicUsize,
    fail: bool,
}

impl MemoryObjectStore {
    pub fn new(names: &[&str]) -> Self {
        Self {
            buckets: names.iter().map(|name| Bucket::new(*name)).collect(),
            list_calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn list_buckets(&self) -> AwsResult<Vec<Bucket>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AwsError::S3Error("AccessDenied".to_string()));
        }
        Ok(self.buckets.clone())
    }
}
