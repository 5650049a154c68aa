//! Client facade.
//!
//! A [`Session`] is the pair every operation needs: the shared dispatcher and
//! the auth context. Sub-clients (vApp, tasks, metadata) each hold a clone of
//! it, so a delegated client authenticates exactly like its parent.

use crate::auth::AuthProvider;
use crate::config::VcdConfig;
use crate::descriptor::OperationDescriptor;
use crate::dispatcher::{Dispatcher, NO_BODY};
use crate::error::VcdResult;
use crate::href::ResourceHandle;
use crate::task::TaskTracker;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::Task;
use crate::vapp::VAppClient;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Dispatcher + auth context shared by all sub-clients.
#[derive(Clone)]
pub struct Session {
    dispatcher: Arc<Dispatcher>,
    auth: Arc<dyn AuthProvider>,
}

impl Session {
    pub fn new(dispatcher: Arc<Dispatcher>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { dispatcher, auth }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn auth(&self) -> &dyn AuthProvider {
        self.auth.as_ref()
    }

    // ── Typed helpers ───────────────────────────────────────────────

    pub async fn value<T: DeserializeOwned>(
        &self,
        op: &OperationDescriptor,
        handle: &ResourceHandle,
    ) -> VcdResult<T> {
        self.dispatcher
            .execute::<(), T>(self.auth(), op, handle, NO_BODY)
            .await?
            .into_value(op)
    }

    pub async fn value_with<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        op: &OperationDescriptor,
        handle: &ResourceHandle,
        body: &B,
    ) -> VcdResult<T> {
        self.dispatcher
            .execute::<B, T>(self.auth(), op, handle, Some(body))
            .await?
            .into_value(op)
    }

    pub async fn task(&self, op: &OperationDescriptor, handle: &ResourceHandle) -> VcdResult<Task> {
        self.dispatcher
            .execute::<(), ()>(self.auth(), op, handle, NO_BODY)
            .await?
            .into_task(op)
    }

    pub async fn task_with<B: Serialize + ?Sized>(
        &self,
        op: &OperationDescriptor,
        handle: &ResourceHandle,
        body: &B,
    ) -> VcdResult<Task> {
        self.dispatcher
            .execute::<B, ()>(self.auth(), op, handle, Some(body))
            .await?
            .into_task(op)
    }

    pub async fn unit(&self, op: &OperationDescriptor, handle: &ResourceHandle) -> VcdResult<()> {
        self.dispatcher
            .execute::<(), ()>(self.auth(), op, handle, NO_BODY)
            .await?
            .into_unit(op)
    }

    pub async fn unit_with<B: Serialize + ?Sized>(
        &self,
        op: &OperationDescriptor,
        handle: &ResourceHandle,
        body: &B,
    ) -> VcdResult<()> {
        self.dispatcher
            .execute::<B, ()>(self.auth(), op, handle, Some(body))
            .await?
            .into_unit(op)
    }

    pub async fn bytes(&self, op: &OperationDescriptor, handle: &ResourceHandle) -> VcdResult<Bytes> {
        self.dispatcher
            .execute::<(), ()>(self.auth(), op, handle, NO_BODY)
            .await?
            .into_bytes(op)
    }
}

/// Entry point: one connection to a vCloud Director cell.
#[derive(Clone)]
pub struct VcdClient {
    session: Session,
}

impl VcdClient {
    /// Build a client over the default reqwest transport.
    pub fn new(config: &VcdConfig, auth: Arc<dyn AuthProvider>) -> VcdResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        let dispatcher = Dispatcher::new(Arc::new(transport)).with_api_version(&config.api_version);
        log::info!(
            "vCloud client for {}:{} (API {}, auth {})",
            config.host,
            config.port,
            config.api_version,
            auth.name()
        );
        Ok(Self {
            session: Session::new(Arc::new(dispatcher), auth),
        })
    }

    /// Build a client over any transport (proxies, recording, tests).
    pub fn with_transport(transport: Arc<dyn Transport>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            session: Session::new(Arc::new(Dispatcher::new(transport)), auth),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn vapp(&self) -> VAppClient {
        VAppClient::new(self.session.clone())
    }

    pub fn tasks(&self) -> TaskTracker {
        TaskTracker::new(self.session.clone())
    }
}
