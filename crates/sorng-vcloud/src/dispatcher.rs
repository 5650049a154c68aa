//! Request dispatcher: executes one [`OperationDescriptor`] against one handle.
//!
//! Stateless between calls. Every invocation resolves the target, encodes the
//! body, asks the auth provider for a fresh attachment, performs exactly one
//! exchange and shapes the outcome by the descriptor's [`ResultKind`].

use crate::auth::AuthProvider;
use crate::codec;
use crate::descriptor::{OperationDescriptor, ResultKind};
use crate::error::{CodecDirection, VcdError, VcdResult};
use crate::href::ResourceHandle;
use crate::media;
use crate::transport::{HttpRequest, Transport};
use crate::translate::translate;
use crate::types::Task;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Use as the `body` argument of [`Dispatcher::execute`] for body-less operations.
pub const NO_BODY: Option<&()> = None;

/// Outcome of a successful exchange, shaped by the descriptor's result kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Unit,
    Value(T),
    Task(Task),
    Bytes(Bytes),
}

impl<T> Reply<T> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Value(_) => "value",
            Self::Task(_) => "task",
            Self::Bytes(_) => "bytes",
        }
    }

    pub fn into_value(self, op: &OperationDescriptor) -> VcdResult<T> {
        match self {
            Self::Value(v) => Ok(v),
            other => Err(mismatch(op, "value", other.kind())),
        }
    }

    pub fn into_task(self, op: &OperationDescriptor) -> VcdResult<Task> {
        match self {
            Self::Task(t) => Ok(t),
            other => Err(mismatch(op, "task", other.kind())),
        }
    }

    pub fn into_unit(self, op: &OperationDescriptor) -> VcdResult<()> {
        match self {
            Self::Unit => Ok(()),
            other => Err(mismatch(op, "unit", other.kind())),
        }
    }

    pub fn into_bytes(self, op: &OperationDescriptor) -> VcdResult<Bytes> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Err(mismatch(op, "bytes", other.kind())),
        }
    }
}

fn mismatch(op: &OperationDescriptor, wanted: &str, got: &str) -> VcdError {
    VcdError::usage(op.name, format!("expected a {wanted} result, operation yields {got}"))
}

/// Shared executor for every catalog entry.
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    api_version: Option<String>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_version: None,
        }
    }

    /// Pin the API version: `;version={v}` is appended to every XML `Accept`.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Execute `op` on `handle`.
    ///
    /// `body` must be `Some` exactly when the descriptor declares a request
    /// type. Transport failures are returned as-is (no retry here).
    pub async fn execute<B, T>(
        &self,
        auth: &dyn AuthProvider,
        op: &OperationDescriptor,
        handle: &ResourceHandle,
        body: Option<&B>,
    ) -> VcdResult<Reply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let target = handle.resolve(op.path)?;

        let mut headers = Vec::with_capacity(3);
        let payload = match (op.request_type, body) {
            (Some(media_type), Some(value)) => {
                headers.push(("Content-Type".to_string(), media_type.to_string()));
                Some(codec::encode(value, media_type)?)
            }
            (None, None) => None,
            (Some(media_type), None) => {
                return Err(VcdError::usage(
                    op.name,
                    format!("a `{media_type}` body is required"),
                ))
            }
            (None, Some(_)) => {
                return Err(VcdError::usage(op.name, "operation does not take a body"))
            }
        };
        if let Some(accept) = op.response_type {
            let accept = match &self.api_version {
                Some(v) if media::is_xml(accept) => format!("{accept};version={v}"),
                _ => accept.to_string(),
            };
            headers.push(("Accept".to_string(), accept));
        }
        let attachment = auth.attachment().await?;
        headers.push((attachment.header, attachment.value));

        log::debug!("{} {} {}", op.name, op.method, target);

        let resp = self
            .transport
            .send(HttpRequest {
                method: op.method,
                url: target.as_url().clone(),
                headers,
                body: payload,
            })
            .await
            .map_err(|e| {
                log::debug!("{} {} failed: {e}", op.method, target);
                e
            })?;

        log::debug!("{} {} -> {}", op.method, target, resp.status);

        if !resp.is_success() {
            return Err(translate(resp.status, &resp.body));
        }

        match op.result {
            ResultKind::Unit => Ok(Reply::Unit),
            ResultKind::Bytes => {
                if resp.body.is_empty() {
                    return Err(VcdError::codec(
                        CodecDirection::Decode,
                        op.response_type.unwrap_or(media::ANY_IMAGE),
                        0,
                        "missing body",
                    ));
                }
                Ok(Reply::Bytes(resp.body))
            }
            ResultKind::Task => {
                let media_type = op.response_type.unwrap_or(media::TASK);
                Ok(Reply::Task(codec::decode(&resp.body, media_type)?))
            }
            ResultKind::Value(_) => {
                let media_type = op.response_type.ok_or_else(|| {
                    VcdError::usage(op.name, "value result without a response type")
                })?;
                Ok(Reply::Value(codec::decode(&resp.body, media_type)?))
            }
        }
    }
}
