//! Operation descriptors: one declarative record per remote operation.
//!
//! A descriptor says *how* to talk to the server (method, relative path,
//! media types) and *what* a success yields. The dispatcher executes any
//! descriptor; typed wrappers only pick which one.

use crate::error::{VcdError, VcdResult};
use crate::media;
use crate::transport::HttpMethod;

use std::collections::HashSet;

/// What a successful response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// A [`crate::types::Task`] handle for a long-running job.
    Task,
    /// A decoded value; the string names its type for diagnostics.
    Value(&'static str),
    /// Nothing; any body is ignored.
    Unit,
    /// Raw bytes (screen captures).
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Relative to the handle the operation is invoked on; `""` is the handle itself.
    pub path: &'static str,
    pub request_type: Option<&'static str>,
    pub response_type: Option<&'static str>,
    pub result: ResultKind,
}

impl OperationDescriptor {
    /// `GET` returning a decoded value.
    pub const fn read(
        name: &'static str,
        path: &'static str,
        response_type: &'static str,
        type_name: &'static str,
    ) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            request_type: None,
            response_type: Some(response_type),
            result: ResultKind::Value(type_name),
        }
    }

    /// Operation answered with a task.
    pub const fn task(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        request_type: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            method,
            path,
            request_type,
            response_type: Some(media::TASK),
            result: ResultKind::Task,
        }
    }

    /// Operation answered with no content.
    pub const fn unit(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        request_type: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            method,
            path,
            request_type,
            response_type: None,
            result: ResultKind::Unit,
        }
    }

    /// Non-GET operation returning a decoded value.
    pub const fn call(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        request_type: Option<&'static str>,
        response_type: &'static str,
        type_name: &'static str,
    ) -> Self {
        Self {
            name,
            method,
            path,
            request_type,
            response_type: Some(response_type),
            result: ResultKind::Value(type_name),
        }
    }

    /// `GET` returning raw bytes of an image type.
    pub const fn bytes(name: &'static str, path: &'static str, accept: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            request_type: None,
            response_type: Some(accept),
            result: ResultKind::Bytes,
        }
    }

    /// Check this entry on its own.
    pub fn validate(&self) -> VcdResult<()> {
        let fail = |reason: String| Err(VcdError::catalog(self.name, reason));

        if self.name.is_empty() {
            return Err(VcdError::catalog("<unnamed>", "operation name is empty"));
        }
        if self.path.starts_with('/') || self.path.contains(['?', '#']) {
            return fail(format!("path `{}` must be a plain relative suffix", self.path));
        }
        if let Some(req) = self.request_type {
            if !media::is_xml(req) {
                return fail(format!("request type `{req}` has no encoder"));
            }
            if matches!(self.method, HttpMethod::Get | HttpMethod::Delete) {
                return fail(format!("{} cannot carry a request body", self.method));
            }
        }

        match (self.result, self.response_type) {
            (ResultKind::Task, Some(media::TASK)) => {}
            (ResultKind::Task, other) => {
                return fail(format!("task result needs the task media type, got {other:?}"))
            }
            (ResultKind::Unit, None) => {}
            (ResultKind::Unit, Some(rsp)) => {
                return fail(format!("unit result must not declare a response type (`{rsp}`)"))
            }
            (ResultKind::Bytes, Some(rsp)) if media::is_image(rsp) => {}
            (ResultKind::Bytes, other) => {
                return fail(format!("byte result needs an image type, got {other:?}"))
            }
            (ResultKind::Value(_), Some(media::TASK)) => {
                return fail("task media type declared for a value result".into())
            }
            (ResultKind::Value(_), Some(rsp)) if media::is_xml(rsp) => {}
            (ResultKind::Value(_), other) => {
                return fail(format!("value result needs an XML response type, got {other:?}"))
            }
        }

        // A section representation only ever travels to and from its own
        // location: `…Section` types must name the last path segment.
        let representation = self.request_type.or(match self.result {
            ResultKind::Value(_) => self.response_type,
            _ => None,
        });
        if let Some(stem) = representation.and_then(media::stem) {
            if stem.ends_with("Section") {
                let last = self.path.rsplit('/').next().unwrap_or_default();
                if last != stem {
                    return fail(format!(
                        "`{stem}` payload addressed to `{}`",
                        if self.path.is_empty() { "<self>" } else { self.path }
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Validate a whole catalog: every entry on its own, plus unique names and
/// unique (method, path) routes.
pub fn validate_catalog(entries: &[&OperationDescriptor]) -> VcdResult<()> {
    let mut names = HashSet::new();
    let mut routes = HashSet::new();

    for entry in entries {
        entry.validate()?;
        if !names.insert(entry.name) {
            return Err(VcdError::catalog(entry.name, "duplicate operation name"));
        }
        if !routes.insert((entry.method, entry.path)) {
            return Err(VcdError::catalog(
                entry.name,
                format!("route {} `{}` already used by another entry", entry.method, entry.path),
            ));
        }
    }
    Ok(())
}
