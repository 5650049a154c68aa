#![allow(dead_code)]

use sorng_vcloud::auth::{AuthAttachment, AuthProvider};
use sorng_vcloud::error::{TransportErrorKind, VcdError, VcdResult};
use sorng_vcloud::transport::{HttpRequest, HttpResponse, Transport};
use sorng_vcloud::{ResourceHandle, VcdClient};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "f2a1c3d4-session";
pub const VAPP: &str = "https://vcd.example.com/api/vApp/vapp-42";
pub const TASK: &str = "https://vcd.example.com/api/task/t-1";

/// Transport answering from a script and recording every request.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<VcdResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(HttpResponse::new(status, body.to_string())))
    }

    pub fn fail(&self, kind: TransportErrorKind, message: &str) -> &Self {
        self.push(Err(VcdError::transport(kind, message)))
    }

    pub fn push(&self, reply: VcdResult<HttpResponse>) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> VcdResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(VcdError::transport(TransportErrorKind::Other, "script exhausted")))
    }
}

/// Static token that counts how often it was asked for.
#[derive(Default)]
pub struct CountingAuth {
    calls: AtomicUsize,
}

impl CountingAuth {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AuthProvider for CountingAuth {
    fn name(&self) -> &str {
        "counting"
    }

    async fn attachment(&self) -> VcdResult<AuthAttachment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AuthAttachment::new("x-vcloud-authorization", TOKEN))
    }
}

pub fn client(transport: &Arc<MockTransport>, auth: &Arc<CountingAuth>) -> VcdClient {
    VcdClient::with_transport(transport.clone(), auth.clone())
}

pub fn vapp() -> ResourceHandle {
    ResourceHandle::parse(VAPP).unwrap()
}

pub fn task_xml(status: &str) -> String {
    task_xml_with(status, "")
}

pub fn task_xml_with(status: &str, children: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Task xmlns="http://www.vmware.com/vcloud/v1.5" status="{status}" operationName="vappPowerOff"
      operation="Stopping vApp web" href="{TASK}" type="application/vnd.vmware.vcloud.task+xml">
  <Link rel="task:cancel" href="{TASK}/action/cancel"/>
  <Owner type="application/vnd.vmware.vcloud.vApp+xml" name="web" href="{VAPP}"/>
  {children}
</Task>"#
    )
}

pub fn error_xml(code: u16, minor: &str, message: &str) -> String {
    format!(
        r#"<Error xmlns="http://www.vmware.com/vcloud/v1.5" majorErrorCode="{code}" minorErrorCode="{minor}" message="{message}"/>"#
    )
}
