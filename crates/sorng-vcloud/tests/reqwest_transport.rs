mod common;

use common::{error_xml, CountingAuth, TOKEN};
use sorng_vcloud::config::VcdConfig;
use sorng_vcloud::media;
use sorng_vcloud::transport::ReqwestTransport;
use sorng_vcloud::types::{DeployVAppParams, TaskStatus};
use sorng_vcloud::{ResourceHandle, VcdClient, VcdError};

use std::sync::Arc;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_body(server: &MockServer, status: &str) -> String {
    format!(
        r#"<Task xmlns="http://www.vmware.com/vcloud/v1.5" status="{status}" href="{}/api/task/t-9"/>"#,
        server.uri()
    )
}

fn vcd() -> VcdClient {
    let transport = ReqwestTransport::new(&VcdConfig::new("127.0.0.1")).unwrap();
    VcdClient::with_transport(Arc::new(transport), CountingAuth::new())
}

#[tokio::test]
async fn deploy_round_trip_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/vApp/vapp-1/action/deploy"))
        .and(header("Content-Type", media::DEPLOY_VAPP_PARAMS))
        .and(header("Accept", media::TASK))
        .and(header("x-vcloud-authorization", TOKEN))
        .and(body_string_contains(r#"powerOn="true""#))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_raw(task_body(&server, "queued"), media::TASK),
        )
        .expect(1)
        .mount(&server)
        .await;

    let vapp = ResourceHandle::parse(&format!("{}/api/vApp/vapp-1", server.uri())).unwrap();
    let task = vcd()
        .vapp()
        .deploy(&vapp, &DeployVAppParams::new().power_on(true))
        .await
        .unwrap();

    assert_eq!(task.status, TaskStatus::Queued);
    assert_eq!(task.href.as_str(), format!("{}/api/task/t-9", server.uri()));
}

#[tokio::test]
async fn error_status_is_translated_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vApp/vapp-1/owner"))
        .respond_with(
            ResponseTemplate::new(403).set_body_raw(
                error_xml(403, "ACCESS_TO_RESOURCE_IS_FORBIDDEN", "Access is forbidden"),
                media::ERROR,
            ),
        )
        .mount(&server)
        .await;

    let vapp = ResourceHandle::parse(&format!("{}/api/vApp/vapp-1", server.uri())).unwrap();
    let err = vcd().vapp().get_owner(&vapp).await.unwrap_err();

    match err {
        VcdError::ClientRequest { status, detail } => {
            assert_eq!(status, 403);
            assert_eq!(detail.message, "Access is forbidden");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let server = MockServer::start().await;
    let vapp = ResourceHandle::parse(&format!("{}/api/vApp/vapp-1", server.uri())).unwrap();
    drop(server);

    let err = vcd().vapp().power_on(&vapp).await.unwrap_err();

    assert!(err.is_retryable(), "{err:?}");
}
