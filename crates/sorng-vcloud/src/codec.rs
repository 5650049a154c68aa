//! Payload codec: typed values ⇄ XML bytes under a declared media type.
//!
//! Encoding writes the vCloud default namespace and the OVF / CIM prefixes on
//! the root element. Decoding matches by local name, so prefixes chosen by the
//! server do not matter and unknown elements are skipped.

use crate::error::{CodecDirection, VcdError, VcdResult};
use crate::media;

use bytes::Bytes;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Namespace declarations put on every encoded root element.
const NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "http://www.vmware.com/vcloud/v1.5"),
    ("xmlns:vcloud", "http://www.vmware.com/vcloud/v1.5"),
    ("xmlns:ovf", "http://schemas.dmtf.org/ovf/envelope/1"),
    (
        "xmlns:rasd",
        "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ResourceAllocationSettingData",
    ),
    (
        "xmlns:vssd",
        "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_VirtualSystemSettingData",
    ),
    ("xmlns:vmw", "http://www.vmware.com/schema/ovf"),
];

/// Serialize `value` into the wire form of `media_type`.
pub fn encode<T: Serialize + ?Sized>(value: &T, media_type: &str) -> VcdResult<Bytes> {
    if !media::is_xml(media_type) {
        return Err(VcdError::codec(
            CodecDirection::Encode,
            media_type,
            0,
            "no encoder for this media type",
        ));
    }
    let xml = quick_xml::se::to_string(value)
        .map_err(|e| VcdError::codec(CodecDirection::Encode, media_type, 0, e.to_string()))?;
    let out = declare_namespaces(&xml)
        .map_err(|e| VcdError::codec(CodecDirection::Encode, media_type, xml.len(), e))?;
    Ok(Bytes::from(out))
}

/// Deserialize `bytes` declared as `media_type` into `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], media_type: &str) -> VcdResult<T> {
    let fail = |reason: String| VcdError::codec(CodecDirection::Decode, media_type, bytes.len(), reason);

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(fail("missing body".into()));
    }
    if !media::is_xml(media_type) {
        return Err(fail("no decoder for this media type".into()));
    }
    let text = std::str::from_utf8(bytes).map_err(|e| fail(format!("invalid UTF-8: {e}")))?;
    quick_xml::de::from_str(text).map_err(|e| fail(e.to_string()))
}

// ── Namespace rewriting ─────────────────────────────────────────────

/// Re-emit `xml` with the namespace declarations added to its root start tag.
/// Declarations already present on the root are left as they are.
fn declare_namespaces(xml: &str) -> Result<Vec<u8>, String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len() + 512));
    let mut root_seen = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        let event = match event {
            Event::Eof => break,
            Event::Start(start) if !root_seen => {
                root_seen = true;
                Event::Start(with_namespaces(start))
            }
            Event::Empty(start) if !root_seen => {
                root_seen = true;
                Event::Empty(with_namespaces(start))
            }
            other => other,
        };
        writer.write_event(event).map_err(|e| e.to_string())?;
    }

    Ok(writer.into_inner())
}

fn with_namespaces(mut start: BytesStart<'_>) -> BytesStart<'_> {
    let declared: Vec<Vec<u8>> = start
        .attributes()
        .flatten()
        .map(|a| a.key.as_ref().to_vec())
        .collect();
    for (name, uri) in NAMESPACES {
        if !declared.iter().any(|k| k.as_slice() == name.as_bytes()) {
            start.push_attribute((*name, *uri));
        }
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::href::ResourceHandle;
    use crate::types::*;

    use chrono::{DateTime, Utc};
    use std::fmt::Debug;

    fn as_str(bytes: &Bytes) -> &str {
        std::str::from_utf8(bytes).unwrap()
    }

    #[test]
    fn encode_declares_namespaces_on_root() {
        let body = encode(&DeployVAppParams::new().power_on(true), media::DEPLOY_VAPP_PARAMS).unwrap();
        let xml = as_str(&body);
        assert!(xml.starts_with("<DeployVAppParams"));
        assert!(xml.contains(r#"xmlns="http://www.vmware.com/vcloud/v1.5""#));
        assert!(xml.contains(r#"xmlns:ovf="http://schemas.dmtf.org/ovf/envelope/1""#));
        assert!(xml.contains(r#"powerOn="true""#));
        assert_eq!(xml.matches("xmlns=").count(), 1);
    }

    #[test]
    fn encode_uses_prefixed_ovf_names() {
        let section = OperatingSystemSection::new(101, "OS").with_os_type("ubuntu64Guest");
        let body = encode(&section, media::OPERATING_SYSTEM_SECTION).unwrap();
        let xml = as_str(&body);
        assert!(xml.starts_with("<ovf:OperatingSystemSection"));
        assert!(xml.contains(r#"ovf:id="101""#));
        assert!(xml.contains(r#"vmw:osType="ubuntu64Guest""#));
        assert!(xml.contains("<ovf:Info>OS</ovf:Info>"));
    }

    #[test]
    fn undeploy_action_is_element_text() {
        let body = encode(
            &UndeployVAppParams::new(UndeployPowerAction::Shutdown),
            media::UNDEPLOY_VAPP_PARAMS,
        )
        .unwrap();
        assert!(as_str(&body).contains("<UndeployPowerAction>shutdown</UndeployPowerAction>"));
    }

    #[test]
    fn encode_rejects_non_xml_media_type() {
        let err = encode(&MetadataValue::new("x"), "application/json").unwrap_err();
        assert!(matches!(
            err,
            VcdError::Codec { direction: CodecDirection::Encode, .. }
        ));
    }

    #[test]
    fn decode_server_task_with_prefixes_and_unknown_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<Task xmlns="http://www.vmware.com/vcloud/v1.5" status="running" startTime="2012-03-01T12:00:00.000Z"
      operationName="vappPowerOff" operation="Stopping vApp web"
      href="https://vcd.example.com/api/task/t-1" type="application/vnd.vmware.vcloud.task+xml">
  <Link rel="task:cancel" href="https://vcd.example.com/api/task/t-1/action/cancel"/>
  <Owner type="application/vnd.vmware.vcloud.vApp+xml" name="web" href="https://vcd.example.com/api/vApp/vapp-42"/>
  <User href="https://vcd.example.com/api/admin/user/u-1" name="ops"/>
  <Progress>40</Progress>
</Task>"#;
        let task: Task = decode(xml.as_bytes(), media::TASK).unwrap();
        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(task.progress, Some(40));
        assert_eq!(task.operation_name.as_deref(), Some("vappPowerOff"));
        assert!(task.cancel_link().is_some());
        assert_eq!(
            task.owner.unwrap().href,
            ResourceHandle::parse("https://vcd.example.com/api/vApp/vapp-42").unwrap()
        );
        assert!(task.start_time.is_some());
    }

    #[test]
    fn decode_network_connection_section_ignores_prefix() {
        let xml = r#"<NetworkConnectionSection xmlns="http://www.vmware.com/vcloud/v1.5"
    xmlns:ovf="http://schemas.dmtf.org/ovf/envelope/1">
  <ovf:Info>Specifies the available VM network connections</ovf:Info>
  <PrimaryNetworkConnectionIndex>0</PrimaryNetworkConnectionIndex>
  <NetworkConnection network="backend" needsCustomization="false">
    <NetworkConnectionIndex>0</NetworkConnectionIndex>
    <IpAddress>10.0.0.12</IpAddress>
    <IsConnected>true</IsConnected>
    <MACAddress>00:50:56:01:02:03</MACAddress>
    <IpAddressAllocationMode>POOL</IpAddressAllocationMode>
  </NetworkConnection>
</NetworkConnectionSection>"#;
        let section: NetworkConnectionSection = decode(xml.as_bytes(), media::NETWORK_CONNECTION_SECTION).unwrap();
        assert_eq!(section.primary_network_connection_index, Some(0));
        assert_eq!(
            section.network_connections,
            vec![NetworkConnection {
                network: "backend".into(),
                needs_customization: Some(false),
                network_connection_index: 0,
                ip_address: Some("10.0.0.12".into()),
                external_ip_address: None,
                is_connected: true,
                mac_address: Some("00:50:56:01:02:03".into()),
                ip_address_allocation_mode: "POOL".into(),
            }]
        );
    }

    #[test]
    fn encoded_section_decodes_to_equal_value() {
        let section = OperatingSystemSection::new(94, "Guest OS").with_os_type("centos64Guest");
        let body = encode(&section, media::OPERATING_SYSTEM_SECTION).unwrap();
        let back: OperatingSystemSection = decode(&body, media::OPERATING_SYSTEM_SECTION).unwrap();
        assert_eq!(back, section);
    }

    fn href(path: &str) -> ResourceHandle {
        ResourceHandle::parse(&format!("https://vcd.example.com/api/{path}")).unwrap()
    }

    fn link(rel: &str, path: &str, media_type: &str) -> Link {
        Link {
            rel: rel.into(),
            href: href(path),
            media_type: Some(media_type.into()),
            name: None,
        }
    }

    fn at(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn assert_round_trip<T>(value: &T, media_type: &str)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let body = encode(value, media_type).unwrap();
        let back: T = decode(&body, media_type)
            .unwrap_or_else(|e| panic!("{media_type}: {e}\n{}", as_str(&body)));
        assert_eq!(&back, value, "{media_type}");
    }

    fn disk_item() -> Rasd {
        let mut disk = Rasd::new(2000, resource_type::DISK_DRIVE, "Hard disk 1");
        disk.href = Some(href("vApp/vm-7/virtualHardwareSection/disks"));
        disk.address_on_parent = Some("0".into());
        disk.parent = Some(2);
        disk.resource_sub_type = Some("lsilogic".into());
        disk.host_resources.push(RasdHostResource {
            capacity: Some(16384),
            bus_type: Some("6".into()),
            bus_sub_type: Some("lsilogic".into()),
            value: "disk-2000".into(),
        });
        disk
    }

    fn nic_item() -> Rasd {
        let mut nic = Rasd::new(1, resource_type::ETHERNET_ADAPTER, "Network adapter 0");
        nic.address = Some("00:50:56:01:02:03".into());
        nic.automatic_allocation = Some(true);
        nic.resource_sub_type = Some("E1000".into());
        nic.description = Some("E1000 ethernet adapter".into());
        nic.connections.push(RasdConnection {
            ip_addressing_mode: Some("POOL".into()),
            ip_address: Some("10.0.0.12".into()),
            primary_network_connection: Some(true),
            network: "backend".into(),
        });
        nic
    }

    #[test]
    fn every_representation_survives_encode_then_decode() {
        let user = Reference::new(href("admin/user/u-1"))
            .with_name("ops")
            .with_type("application/vnd.vmware.admin.user+xml");

        let mut vapp = VApp::new("web").with_description("Front tier");
        vapp.href = Some(href("vApp/vapp-42"));
        vapp.id = Some("urn:vcloud:vapp:42".into());
        vapp.media_type = Some(media::VAPP.into());
        vapp.status = Some(8);
        vapp.deployed = Some(false);
        vapp.ovf_descriptor_uploaded = Some(true);
        vapp.links.push(link("power:powerOn", "vApp/vapp-42/power/action/powerOn", media::TASK));
        vapp.owner = Some(Owner::new(user.clone()));
        vapp.in_maintenance_mode = Some(false);
        assert_round_trip(&vapp, media::VAPP);

        let mut owner = Owner::new(user.clone());
        owner.href = Some(href("vApp/vapp-42/owner"));
        owner.media_type = Some(media::OWNER.into());
        assert_round_trip(&owner, media::OWNER);

        let detail = ErrorDetail::new("The VM is busy")
            .with_major_code(500)
            .with_minor_code("INTERNAL_SERVER_ERROR");
        assert_round_trip(&detail, media::ERROR);

        let mut task = Task::new(href("task/t-1"), TaskStatus::Error);
        task.operation_name = Some("vappDeploy".into());
        task.start_time = Some(at("2012-03-01T12:00:00Z"));
        task.end_time = Some(at("2012-03-01T12:05:30Z"));
        task.links.push(link("up", "vApp/vapp-42", media::VAPP));
        task.owner = Some(Reference::new(href("vApp/vapp-42")).with_name("web"));
        task.error = Some(detail);
        task.progress = Some(100);
        assert_round_trip(&task, media::TASK);

        let access = ControlAccessParams::shared("ReadOnly").with_access(user.clone(), "FullControl");
        assert_round_trip(&access, media::CONTROL_ACCESS);

        let deploy = DeployVAppParams::new()
            .power_on(true)
            .deployment_lease_seconds(3600)
            .force_customization(false);
        assert_round_trip(&deploy, media::DEPLOY_VAPP_PARAMS);
        assert_round_trip(
            &UndeployVAppParams::new(UndeployPowerAction::PowerOff),
            media::UNDEPLOY_VAPP_PARAMS,
        );

        let mut recompose = RecomposeVAppParams::new()
            .add_item(Reference::new(href("vAppTemplate/vm-3")).with_name("db"))
            .delete_item(Reference::new(href("vApp/vm-9")))
            .accept_eulas();
        recompose.name = Some("web".into());
        recompose.description = Some("Swap the database VM".into());
        assert_round_trip(&recompose, media::RECOMPOSE_VAPP_PARAMS);

        assert_round_trip(
            &RelocateParams { datastore: Reference::new(href("admin/extension/datastore/ds-1")) },
            media::RELOCATE_VM_PARAMS,
        );
        assert_round_trip(
            &MediaInsertOrEjectParams {
                media: Reference::new(href("media/m-1")).with_name("ubuntu.iso"),
            },
            media::MEDIA_PARAMS,
        );

        let mut guest = GuestCustomizationSection::new("Guest customization");
        guest.href = Some(href("vApp/vm-7/guestCustomizationSection"));
        guest.enabled = Some(true);
        guest.change_sid = Some(false);
        guest.virtual_machine_id = Some("vm-7".into());
        guest.join_domain_enabled = Some(false);
        guest.admin_password_enabled = Some(true);
        guest.admin_password_auto = Some(false);
        guest.admin_password = Some("s3cret".into());
        guest.reset_password_required = Some(false);
        guest.customization_script = Some("echo ready".into());
        guest.computer_name = Some("web-01".into());
        guest.links.push(link("edit", "vApp/vm-7/guestCustomizationSection", media::GUEST_CUSTOMIZATION_SECTION));
        assert_round_trip(&guest, media::GUEST_CUSTOMIZATION_SECTION);

        let mut lease = LeaseSettingsSection::new("Lease settings");
        lease.deployment_lease_in_seconds = Some(604800);
        lease.storage_lease_in_seconds = Some(2592000);
        lease.deployment_lease_expiration = Some(at("2012-03-08T12:00:00Z"));
        lease.storage_lease_expiration = Some(at("2012-03-31T12:00:00Z"));
        assert_round_trip(&lease, media::LEASE_SETTINGS_SECTION);

        let net_config = NetworkConfigSection {
            href: Some(href("vApp/vapp-42/networkConfigSection")),
            media_type: Some(media::NETWORK_CONFIG_SECTION.into()),
            info: "Configuration parameters for logical networks".into(),
            links: Vec::new(),
            network_config: vec![VAppNetworkConfiguration {
                network_name: "backend".into(),
                description: Some("Back-end network".into()),
                configuration: Some(NetworkConfiguration {
                    parent_network: Some(Reference::new(href("network/n-1")).with_name("org-net")),
                    fence_mode: "bridged".into(),
                    retain_net_info_across_deployments: Some(false),
                }),
                is_deployed: Some(true),
            }],
        };
        assert_round_trip(&net_config, media::NETWORK_CONFIG_SECTION);

        let connections = NetworkConnectionSection {
            href: None,
            media_type: None,
            info: "Specifies the available VM network connections".into(),
            primary_network_connection_index: Some(0),
            network_connections: vec![NetworkConnection {
                network: "backend".into(),
                needs_customization: Some(false),
                network_connection_index: 0,
                ip_address: Some("10.0.0.12".into()),
                external_ip_address: Some("203.0.113.7".into()),
                is_connected: true,
                mac_address: Some("00:50:56:01:02:03".into()),
                ip_address_allocation_mode: "POOL".into(),
            }],
            links: vec![link("edit", "vApp/vm-7/networkConnectionSection", media::NETWORK_CONNECTION_SECTION)],
        };
        assert_round_trip(&connections, media::NETWORK_CONNECTION_SECTION);

        let networks = NetworkSection {
            href: Some(href("vApp/vapp-42/networkSection")),
            info: "The list of logical networks".into(),
            networks: vec![OvfNetwork {
                name: "backend".into(),
                description: Some("Back-end network".into()),
            }],
        };
        assert_round_trip(&networks, media::NETWORK_SECTION);

        let mut os = OperatingSystemSection::new(94, "Guest OS").with_os_type("centos64Guest");
        os.description = Some("CentOS 4/5/6 (64-bit)".into());
        assert_round_trip(&os, media::OPERATING_SYSTEM_SECTION);

        let products = ProductSectionList {
            href: Some(href("vApp/vapp-42/productSections")),
            media_type: Some(media::PRODUCT_SECTION_LIST.into()),
            links: Vec::new(),
            product_sections: vec![ProductSection {
                class: Some("com.example".into()),
                instance: Some("web".into()),
                info: "Application settings".into(),
                product: Some("Shop".into()),
                vendor: Some("Example".into()),
                version: Some("2.1".into()),
                properties: vec![ProductProperty {
                    key: "port".into(),
                    value_type: "int".into(),
                    value: Some("8080".into()),
                    user_configurable: Some(true),
                    label: Some("HTTP port".into()),
                    description: Some("Listening port".into()),
                }],
            }],
        };
        assert_round_trip(&products, media::PRODUCT_SECTION_LIST);

        let runtime = RuntimeInfoSection {
            href: Some(href("vApp/vm-7/runtimeInfoSection")),
            info: "Specifies Runtime info".into(),
            vmware_tools: Some(VmwareTools { version: "8389".into() }),
        };
        assert_round_trip(&runtime, media::RUNTIME_INFO_SECTION);

        let startup = StartupSection {
            href: Some(href("vApp/vapp-42/startupSection")),
            info: "VApp startup section".into(),
            items: vec![StartupItem {
                id: "web-01".into(),
                order: 0,
                start_action: "powerOn".into(),
                start_delay: 30,
                stop_action: "guestShutdown".into(),
                stop_delay: 60,
            }],
            links: Vec::new(),
        };
        assert_round_trip(&startup, media::STARTUP_SECTION);

        let hardware = VirtualHardwareSection {
            href: Some(href("vApp/vm-7/virtualHardwareSection")),
            media_type: Some(media::VIRTUAL_HARDWARE_SECTION.into()),
            info: "Virtual hardware requirements".into(),
            system: Some(VirtualSystemSettingData {
                element_name: "Virtual Hardware Family".into(),
                instance_id: 0,
                virtual_system_identifier: Some("web-01".into()),
                virtual_system_type: Some("vmx-07".into()),
            }),
            items: vec![
                Rasd::new(3, resource_type::MEMORY, "2048 MB of memory").with_quantity(2048, "byte * 2^20"),
                nic_item(),
                disk_item(),
            ],
            links: vec![link("edit", "vApp/vm-7/virtualHardwareSection", media::VIRTUAL_HARDWARE_SECTION)],
        };
        assert_round_trip(&hardware, media::VIRTUAL_HARDWARE_SECTION);

        assert_round_trip(&nic_item(), media::OVF_RASD_ITEM);
        let mut disks = RasdItemsList::new(vec![disk_item()]);
        disks.href = Some(href("vApp/vm-7/virtualHardwareSection/disks"));
        disks.media_type = Some(media::OVF_RASD_ITEMS_LIST.into());
        assert_round_trip(&disks, media::OVF_RASD_ITEMS_LIST);

        let question = VmPendingQuestion {
            href: Some(href("vApp/vm-7/question")),
            links: Vec::new(),
            question: "Did you move or copy it?".into(),
            question_id: "q-7".into(),
            choices: vec![
                VmQuestionAnswerChoice { id: 0, text: "Cancel".into() },
                VmQuestionAnswerChoice { id: 2, text: "I copied it".into() },
            ],
        };
        assert_round_trip(&question, media::VM_PENDING_QUESTION);
        assert_round_trip(&VmQuestionAnswer::new(2, "q-7"), media::VM_PENDING_ANSWER);

        assert_round_trip(
            &ScreenTicket { value: "mks://10.0.0.5/vm-7/ticket-abc123".into() },
            media::SCREEN_TICKET,
        );

        let mut metadata = Metadata::new().entry("owner", "platform").entry("tier", "web");
        metadata.href = Some(href("vApp/vapp-42/metadata"));
        assert_round_trip(&metadata, media::METADATA);
        assert_round_trip(&MetadataValue::new("eu-42"), media::METADATA_VALUE);
    }

    #[test]
    fn decode_memory_item_by_local_names() {
        let xml = r#"<Item xmlns="http://www.vmware.com/vcloud/v1.5"
      xmlns:rasd="http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ResourceAllocationSettingData"
      xmlns:vcloud="http://www.vmware.com/vcloud/v1.5"
      vcloud:href="https://vcd.example.com/api/vApp/vm-7/virtualHardwareSection/memory"
      vcloud:type="application/vnd.vmware.vcloud.rasdItem+xml">
  <rasd:AllocationUnits>byte * 2^20</rasd:AllocationUnits>
  <rasd:Description>Memory Size</rasd:Description>
  <rasd:ElementName>2048 MB of memory</rasd:ElementName>
  <rasd:InstanceID>5</rasd:InstanceID>
  <rasd:Reservation>0</rasd:Reservation>
  <rasd:ResourceType>4</rasd:ResourceType>
  <rasd:VirtualQuantity>2048</rasd:VirtualQuantity>
</Item>"#;
        let item: Rasd = decode(xml.as_bytes(), media::OVF_RASD_ITEM).unwrap();
        assert_eq!(item.resource_type, resource_type::MEMORY);
        assert_eq!(item.virtual_quantity, Some(2048));
        assert_eq!(item.instance_id, 5);
        assert!(item.href.is_some());
    }

    #[test]
    fn encode_rasd_uses_cim_prefix() {
        let item = Rasd::new(4, resource_type::PROCESSOR, "2 virtual CPU(s)")
            .with_quantity(2, "hertz * 10^6");
        let body = encode(&item, media::OVF_RASD_ITEM).unwrap();
        let xml = as_str(&body);
        assert!(xml.starts_with("<Item"));
        assert!(xml.contains("<rasd:ResourceType>3</rasd:ResourceType>"));
        assert!(xml.contains("<rasd:VirtualQuantity>2</rasd:VirtualQuantity>"));
        assert!(xml.contains("xmlns:rasd="));
    }

    #[test]
    fn empty_body_is_missing_body_error() {
        let err = decode::<Task>(b"", media::TASK).unwrap_err();
        match err {
            VcdError::Codec { direction, media_type, len, reason } => {
                assert_eq!(direction, CodecDirection::Decode);
                assert_eq!(media_type, media::TASK);
                assert_eq!(len, 0);
                assert_eq!(reason, "missing body");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_body_reports_length_and_type() {
        let raw = b"<Task status=";
        let err = decode::<Task>(raw, media::TASK).unwrap_err();
        match err {
            VcdError::Codec { len, media_type, .. } => {
                assert_eq!(len, raw.len());
                assert_eq!(media_type, media::TASK);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_codec_error() {
        let err = decode::<Task>(&[0x3c, 0xff, 0xfe, 0x3e], media::TASK).unwrap_err();
        assert!(matches!(err, VcdError::Codec { len: 4, .. }));
    }
}
