//! Operation catalog: every remote operation as a [`OperationDescriptor`].
//!
//! vApp entries are relative to a vApp (or VM) href, task entries to a task
//! href, metadata entries to the owning entity (collection) or to one
//! metadata entry.

use crate::descriptor::OperationDescriptor as Op;
use crate::media;
use crate::transport::HttpMethod::{Delete, Get, Post, Put};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  vApp
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const GET_VAPP: Op = Op::read("get_vapp", "", media::VAPP, "VApp");
pub const MODIFY_VAPP: Op = Op::task("modify_vapp", Put, "", Some(media::VAPP));
pub const DELETE_VAPP: Op = Op::task("delete_vapp", Delete, "", None);

pub const CONSOLIDATE: Op = Op::task("consolidate", Post, "action/consolidate", None);
pub const CONTROL_ACCESS: Op = Op::call(
    "control_access",
    Post,
    "action/controlAccess",
    Some(media::CONTROL_ACCESS),
    media::CONTROL_ACCESS,
    "ControlAccessParams",
);
pub const DEPLOY: Op = Op::task("deploy", Post, "action/deploy", Some(media::DEPLOY_VAPP_PARAMS));
pub const DISCARD_SUSPENDED_STATE: Op =
    Op::task("discard_suspended_state", Post, "action/discardSuspendedState", None);
pub const ENTER_MAINTENANCE_MODE: Op =
    Op::unit("enter_maintenance_mode", Post, "action/enterMaintenanceMode", None);
pub const EXIT_MAINTENANCE_MODE: Op =
    Op::unit("exit_maintenance_mode", Post, "action/exitMaintenanceMode", None);
pub const INSTALL_VMWARE_TOOLS: Op =
    Op::task("install_vmware_tools", Post, "action/installVMwareTools", None);
pub const RECOMPOSE: Op = Op::task(
    "recompose",
    Post,
    "action/recomposeVApp",
    Some(media::RECOMPOSE_VAPP_PARAMS),
);
pub const RELOCATE: Op = Op::task("relocate", Post, "action/relocate", Some(media::RELOCATE_VM_PARAMS));
pub const UNDEPLOY: Op = Op::task("undeploy", Post, "action/undeploy", Some(media::UNDEPLOY_VAPP_PARAMS));
pub const UPGRADE_HARDWARE_VERSION: Op =
    Op::task("upgrade_hardware_version", Post, "action/upgradeHardwareVersion", None);
pub const GET_CONTROL_ACCESS: Op = Op::read(
    "get_control_access",
    "controlAccess",
    media::CONTROL_ACCESS,
    "ControlAccessParams",
);

// ── Power ───────────────────────────────────────────────────────────

pub const POWER_OFF: Op = Op::task("power_off", Post, "power/action/powerOff", None);
pub const POWER_ON: Op = Op::task("power_on", Post, "power/action/powerOn", None);
pub const REBOOT: Op = Op::task("reboot", Post, "power/action/reboot", None);
pub const RESET: Op = Op::task("reset", Post, "power/action/reset", None);
pub const SHUTDOWN: Op = Op::task("shutdown", Post, "power/action/shutdown", None);
pub const SUSPEND: Op = Op::task("suspend", Post, "power/action/suspend", None);

// ── Sections ────────────────────────────────────────────────────────

pub const GET_GUEST_CUSTOMIZATION_SECTION: Op = Op::read(
    "get_guest_customization_section",
    "guestCustomizationSection",
    media::GUEST_CUSTOMIZATION_SECTION,
    "GuestCustomizationSection",
);
pub const MODIFY_GUEST_CUSTOMIZATION_SECTION: Op = Op::task(
    "modify_guest_customization_section",
    Put,
    "guestCustomizationSection",
    Some(media::GUEST_CUSTOMIZATION_SECTION),
);
pub const GET_LEASE_SETTINGS_SECTION: Op = Op::read(
    "get_lease_settings_section",
    "leaseSettingsSection",
    media::LEASE_SETTINGS_SECTION,
    "LeaseSettingsSection",
);
pub const MODIFY_LEASE_SETTINGS_SECTION: Op = Op::task(
    "modify_lease_settings_section",
    Put,
    "leaseSettingsSection",
    Some(media::LEASE_SETTINGS_SECTION),
);
pub const GET_NETWORK_CONFIG_SECTION: Op = Op::read(
    "get_network_config_section",
    "networkConfigSection",
    media::NETWORK_CONFIG_SECTION,
    "NetworkConfigSection",
);
pub const MODIFY_NETWORK_CONFIG_SECTION: Op = Op::task(
    "modify_network_config_section",
    Put,
    "networkConfigSection",
    Some(media::NETWORK_CONFIG_SECTION),
);
pub const GET_NETWORK_CONNECTION_SECTION: Op = Op::read(
    "get_network_connection_section",
    "networkConnectionSection",
    media::NETWORK_CONNECTION_SECTION,
    "NetworkConnectionSection",
);
pub const MODIFY_NETWORK_CONNECTION_SECTION: Op = Op::task(
    "modify_network_connection_section",
    Put,
    "networkConnectionSection",
    Some(media::NETWORK_CONNECTION_SECTION),
);
pub const GET_NETWORK_SECTION: Op = Op::read(
    "get_network_section",
    "networkSection",
    media::NETWORK_SECTION,
    "NetworkSection",
);
pub const GET_OPERATING_SYSTEM_SECTION: Op = Op::read(
    "get_operating_system_section",
    "operatingSystemSection",
    media::OPERATING_SYSTEM_SECTION,
    "OperatingSystemSection",
);
pub const MODIFY_OPERATING_SYSTEM_SECTION: Op = Op::task(
    "modify_operating_system_section",
    Put,
    "operatingSystemSection",
    Some(media::OPERATING_SYSTEM_SECTION),
);
pub const GET_RUNTIME_INFO_SECTION: Op = Op::read(
    "get_runtime_info_section",
    "runtimeInfoSection",
    media::RUNTIME_INFO_SECTION,
    "RuntimeInfoSection",
);
pub const GET_STARTUP_SECTION: Op = Op::read(
    "get_startup_section",
    "startupSection",
    media::STARTUP_SECTION,
    "StartupSection",
);
pub const MODIFY_STARTUP_SECTION: Op = Op::task(
    "modify_startup_section",
    Put,
    "startupSection",
    Some(media::STARTUP_SECTION),
);

// ── Media / owner / product sections ────────────────────────────────

pub const EJECT_MEDIA: Op = Op::task(
    "eject_media",
    Post,
    "media/action/ejectMedia",
    Some(media::MEDIA_PARAMS),
);
pub const INSERT_MEDIA: Op = Op::task(
    "insert_media",
    Post,
    "media/action/insertMedia",
    Some(media::MEDIA_PARAMS),
);
pub const GET_OWNER: Op = Op::read("get_owner", "owner", media::OWNER, "Owner");
pub const MODIFY_OWNER: Op = Op::task("modify_owner", Put, "owner", Some(media::OWNER));
pub const GET_PRODUCT_SECTIONS: Op = Op::read(
    "get_product_sections",
    "productSections",
    media::PRODUCT_SECTION_LIST,
    "ProductSectionList",
);
pub const MODIFY_PRODUCT_SECTIONS: Op = Op::task(
    "modify_product_sections",
    Put,
    "productSections",
    Some(media::PRODUCT_SECTION_LIST),
);

// ── Questions / console ─────────────────────────────────────────────

pub const GET_PENDING_QUESTION: Op = Op::read(
    "get_pending_question",
    "question",
    media::VM_PENDING_QUESTION,
    "VmPendingQuestion",
);
pub const ANSWER_QUESTION: Op = Op::unit(
    "answer_question",
    Put,
    "question/action/answer",
    Some(media::VM_PENDING_ANSWER),
);
pub const GET_SCREEN_IMAGE: Op = Op::bytes("get_screen_image", "screen", media::ANY_IMAGE);
pub const GET_SCREEN_TICKET: Op = Op::call(
    "get_screen_ticket",
    Post,
    "screen/action/acquireTicket",
    None,
    media::SCREEN_TICKET,
    "ScreenTicket",
);

// ── Virtual hardware ────────────────────────────────────────────────

pub const GET_VIRTUAL_HARDWARE_SECTION: Op = Op::read(
    "get_virtual_hardware_section",
    "virtualHardwareSection",
    media::VIRTUAL_HARDWARE_SECTION,
    "VirtualHardwareSection",
);
pub const MODIFY_VIRTUAL_HARDWARE_SECTION: Op = Op::task(
    "modify_virtual_hardware_section",
    Put,
    "virtualHardwareSection",
    Some(media::VIRTUAL_HARDWARE_SECTION),
);
pub const GET_VIRTUAL_HARDWARE_SECTION_CPU: Op = Op::read(
    "get_virtual_hardware_section_cpu",
    "virtualHardwareSection/cpu",
    media::OVF_RASD_ITEM,
    "Rasd",
);
pub const MODIFY_VIRTUAL_HARDWARE_SECTION_CPU: Op = Op::task(
    "modify_virtual_hardware_section_cpu",
    Put,
    "virtualHardwareSection/cpu",
    Some(media::OVF_RASD_ITEM),
);
pub const GET_VIRTUAL_HARDWARE_SECTION_DISKS: Op = Op::read(
    "get_virtual_hardware_section_disks",
    "virtualHardwareSection/disks",
    media::OVF_RASD_ITEMS_LIST,
    "RasdItemsList",
);
pub const MODIFY_VIRTUAL_HARDWARE_SECTION_DISKS: Op = Op::task(
    "modify_virtual_hardware_section_disks",
    Put,
    "virtualHardwareSection/disks",
    Some(media::OVF_RASD_ITEMS_LIST),
);
pub const GET_VIRTUAL_HARDWARE_SECTION_MEDIA: Op = Op::read(
    "get_virtual_hardware_section_media",
    "virtualHardwareSection/media",
    media::OVF_RASD_ITEMS_LIST,
    "RasdItemsList",
);
pub const GET_VIRTUAL_HARDWARE_SECTION_MEMORY: Op = Op::read(
    "get_virtual_hardware_section_memory",
    "virtualHardwareSection/memory",
    media::OVF_RASD_ITEM,
    "Rasd",
);
pub const MODIFY_VIRTUAL_HARDWARE_SECTION_MEMORY: Op = Op::task(
    "modify_virtual_hardware_section_memory",
    Put,
    "virtualHardwareSection/memory",
    Some(media::OVF_RASD_ITEM),
);
pub const GET_VIRTUAL_HARDWARE_SECTION_NETWORK_CARDS: Op = Op::read(
    "get_virtual_hardware_section_network_cards",
    "virtualHardwareSection/networkCards",
    media::OVF_RASD_ITEMS_LIST,
    "RasdItemsList",
);
pub const MODIFY_VIRTUAL_HARDWARE_SECTION_NETWORK_CARDS: Op = Op::task(
    "modify_virtual_hardware_section_network_cards",
    Put,
    "virtualHardwareSection/networkCards",
    Some(media::OVF_RASD_ITEMS_LIST),
);
pub const GET_VIRTUAL_HARDWARE_SECTION_SERIAL_PORTS: Op = Op::read(
    "get_virtual_hardware_section_serial_ports",
    "virtualHardwareSection/serialPorts",
    media::OVF_RASD_ITEMS_LIST,
    "RasdItemsList",
);
pub const MODIFY_VIRTUAL_HARDWARE_SECTION_SERIAL_PORTS: Op = Op::task(
    "modify_virtual_hardware_section_serial_ports",
    Put,
    "virtualHardwareSection/serialPorts",
    Some(media::OVF_RASD_ITEMS_LIST),
);

/// Every vApp operation.
pub const VAPP_OPERATIONS: &[&Op] = &[
    &GET_VAPP,
    &MODIFY_VAPP,
    &DELETE_VAPP,
    &CONSOLIDATE,
    &CONTROL_ACCESS,
    &DEPLOY,
    &DISCARD_SUSPENDED_STATE,
    &ENTER_MAINTENANCE_MODE,
    &EXIT_MAINTENANCE_MODE,
    &INSTALL_VMWARE_TOOLS,
    &RECOMPOSE,
    &RELOCATE,
    &UNDEPLOY,
    &UPGRADE_HARDWARE_VERSION,
    &GET_CONTROL_ACCESS,
    &POWER_OFF,
    &POWER_ON,
    &REBOOT,
    &RESET,
    &SHUTDOWN,
    &SUSPEND,
    &GET_GUEST_CUSTOMIZATION_SECTION,
    &MODIFY_GUEST_CUSTOMIZATION_SECTION,
    &GET_LEASE_SETTINGS_SECTION,
    &MODIFY_LEASE_SETTINGS_SECTION,
    &EJECT_MEDIA,
    &INSERT_MEDIA,
    &GET_NETWORK_CONFIG_SECTION,
    &MODIFY_NETWORK_CONFIG_SECTION,
    &GET_NETWORK_CONNECTION_SECTION,
    &MODIFY_NETWORK_CONNECTION_SECTION,
    &GET_NETWORK_SECTION,
    &GET_OPERATING_SYSTEM_SECTION,
    &MODIFY_OPERATING_SYSTEM_SECTION,
    &GET_OWNER,
    &MODIFY_OWNER,
    &GET_PRODUCT_SECTIONS,
    &MODIFY_PRODUCT_SECTIONS,
    &GET_PENDING_QUESTION,
    &ANSWER_QUESTION,
    &GET_RUNTIME_INFO_SECTION,
    &GET_SCREEN_IMAGE,
    &GET_SCREEN_TICKET,
    &GET_STARTUP_SECTION,
    &MODIFY_STARTUP_SECTION,
    &GET_VIRTUAL_HARDWARE_SECTION,
    &MODIFY_VIRTUAL_HARDWARE_SECTION,
    &GET_VIRTUAL_HARDWARE_SECTION_CPU,
    &MODIFY_VIRTUAL_HARDWARE_SECTION_CPU,
    &GET_VIRTUAL_HARDWARE_SECTION_DISKS,
    &MODIFY_VIRTUAL_HARDWARE_SECTION_DISKS,
    &GET_VIRTUAL_HARDWARE_SECTION_MEDIA,
    &GET_VIRTUAL_HARDWARE_SECTION_MEMORY,
    &MODIFY_VIRTUAL_HARDWARE_SECTION_MEMORY,
    &GET_VIRTUAL_HARDWARE_SECTION_NETWORK_CARDS,
    &MODIFY_VIRTUAL_HARDWARE_SECTION_NETWORK_CARDS,
    &GET_VIRTUAL_HARDWARE_SECTION_SERIAL_PORTS,
    &MODIFY_VIRTUAL_HARDWARE_SECTION_SERIAL_PORTS,
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Tasks
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const GET_TASK: Op = Op::task("get_task", Get, "", None);
pub const CANCEL_TASK: Op = Op::unit("cancel_task", Post, "action/cancel", None);

pub const TASK_OPERATIONS: &[&Op] = &[&GET_TASK, &CANCEL_TASK];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Metadata
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Relative to the owning entity.
pub const GET_METADATA: Op = Op::read("get_metadata", "metadata", media::METADATA, "Metadata");
/// Relative to the owning entity.
pub const MERGE_METADATA: Op = Op::task("merge_metadata", Post, "metadata", Some(media::METADATA));
/// Relative to `{entity}/metadata/{key}`.
pub const GET_METADATA_VALUE: Op =
    Op::read("get_metadata_value", "", media::METADATA_VALUE, "MetadataValue");
/// Relative to `{entity}/metadata/{key}`.
pub const SET_METADATA_VALUE: Op =
    Op::task("set_metadata_value", Put, "", Some(media::METADATA_VALUE));
/// Relative to `{entity}/metadata/{key}`.
pub const DELETE_METADATA_ENTRY: Op = Op::task("delete_metadata_entry", Delete, "", None);

pub const METADATA_OPERATIONS: &[&Op] = &[
    &GET_METADATA,
    &MERGE_METADATA,
    &GET_METADATA_VALUE,
    &SET_METADATA_VALUE,
    &DELETE_METADATA_ENTRY,
];
