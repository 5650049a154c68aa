//! # SortOfRemote NG – vCloud Director vApp Management
//!
//! Client for the vCloud Director 1.5 vApp API. Every remote operation is a
//! declarative catalog entry executed by one shared dispatcher; long-running
//! operations hand back a task that the task tracker follows to completion.
//!
//! ## Modules
//!
//! - **types** — vApp, section, hardware, metadata and task representations
//! - **error** — Crate-specific error types
//! - **href** — Absolute resource handles and child-location resolution
//! - **media** — vCloud media types
//! - **codec** — XML payload encoding / decoding
//! - **transport** — HTTP transport seam + reqwest implementation
//! - **auth** — Session token providers
//! - **descriptor** — Operation descriptors and catalog validation
//! - **catalog** — vApp, task and metadata operation tables
//! - **dispatcher** — Executes one descriptor against one handle
//! - **translate** — Non-success responses → typed errors
//! - **task** — Task polling, completion waiting, cancel
//! - **vapp** — Typed vApp operations (power, deploy, sections, hardware)
//! - **metadata** — Metadata sub-client sharing the parent's session
//! - **retry** — Opt-in retry for reads
//! - **config** — Connection configuration
//! - **client** — `VcdClient` facade + shared `Session`

pub mod types;
pub mod error;
pub mod href;
pub mod media;
pub mod codec;
pub mod transport;
pub mod auth;
pub mod descriptor;
pub mod catalog;
pub mod dispatcher;
pub mod translate;
pub mod task;
pub mod vapp;
pub mod metadata;
pub mod retry;
pub mod config;
pub mod client;

pub use client::{Session, VcdClient};
pub use error::{VcdError, VcdResult};
pub use href::ResourceHandle;
