//! Metadata of one entity, as a delegated sub-client.

use crate::catalog::{
    DELETE_METADATA_ENTRY, GET_METADATA, GET_METADATA_VALUE, MERGE_METADATA, SET_METADATA_VALUE,
};
use crate::client::Session;
use crate::error::VcdResult;
use crate::href::ResourceHandle;
use crate::types::{Metadata, MetadataValue, Task};

/// Metadata operations bound to a parent entity (`{parent}/metadata`).
///
/// Shares the parent client's session, so it never authenticates on its own.
#[derive(Clone)]
pub struct MetadataClient {
    session: Session,
    parent: ResourceHandle,
}

impl MetadataClient {
    pub fn new(session: Session, parent: ResourceHandle) -> Self {
        Self { session, parent }
    }

    pub fn parent(&self) -> &ResourceHandle {
        &self.parent
    }

    /// All entries.
    pub async fn get(&self) -> VcdResult<Metadata> {
        self.session.value(&GET_METADATA, &self.parent).await
    }

    /// Add or replace the given entries, keeping the others.
    pub async fn merge(&self, metadata: &Metadata) -> VcdResult<Task> {
        self.session
            .task_with(&MERGE_METADATA, &self.parent, metadata)
            .await
    }

    pub async fn get_value(&self, key: &str) -> VcdResult<MetadataValue> {
        let entry = self.entry(key)?;
        self.session.value(&GET_METADATA_VALUE, &entry).await
    }

    pub async fn set_value(&self, key: &str, value: &MetadataValue) -> VcdResult<Task> {
        let entry = self.entry(key)?;
        self.session
            .task_with(&SET_METADATA_VALUE, &entry, value)
            .await
    }

    pub async fn delete_entry(&self, key: &str) -> VcdResult<Task> {
        let entry = self.entry(key)?;
        self.session.task(&DELETE_METADATA_ENTRY, &entry).await
    }

    fn entry(&self, key: &str) -> VcdResult<ResourceHandle> {
        self.parent.resolve("metadata")?.child(key)
    }
}
