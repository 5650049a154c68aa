//! vCloud Director 1.5 media types.

pub const VAPP: &str = "application/vnd.vmware.vcloud.vApp+xml";
pub const TASK: &str = "application/vnd.vmware.vcloud.task+xml";
pub const ERROR: &str = "application/vnd.vmware.vcloud.error+xml";
pub const CONTROL_ACCESS: &str = "application/vnd.vmware.vcloud.controlAccess+xml";
pub const DEPLOY_VAPP_PARAMS: &str = "application/vnd.vmware.vcloud.deployVAppParams+xml";
pub const UNDEPLOY_VAPP_PARAMS: &str = "application/vnd.vmware.vcloud.undeployVAppParams+xml";
pub const RECOMPOSE_VAPP_PARAMS: &str = "application/vnd.vmware.vcloud.recomposeVAppParams+xml";
pub const RELOCATE_VM_PARAMS: &str = "application/vnd.vmware.vcloud.relocateVmParams+xml";
pub const MEDIA_PARAMS: &str = "application/vnd.vmware.vcloud.mediaInsertOrEjectParams+xml";
pub const GUEST_CUSTOMIZATION_SECTION: &str =
    "application/vnd.vmware.vcloud.guestCustomizationSection+xml";
pub const LEASE_SETTINGS_SECTION: &str = "application/vnd.vmware.vcloud.leaseSettingsSection+xml";
pub const NETWORK_CONFIG_SECTION: &str = "application/vnd.vmware.vcloud.networkConfigSection+xml";
pub const NETWORK_CONNECTION_SECTION: &str =
    "application/vnd.vmware.vcloud.networkConnectionSection+xml";
pub const NETWORK_SECTION: &str = "application/vnd.vmware.vcloud.networkSection+xml";
pub const OPERATING_SYSTEM_SECTION: &str =
    "application/vnd.vmware.vcloud.operatingSystemSection+xml";
pub const OWNER: &str = "application/vnd.vmware.vcloud.owner+xml";
pub const PRODUCT_SECTION_LIST: &str = "application/vnd.vmware.vcloud.productSections+xml";
pub const VM_PENDING_QUESTION: &str = "application/vnd.vmware.vcloud.vmPendingQuestion+xml";
pub const VM_PENDING_ANSWER: &str = "application/vnd.vmware.vcloud.vmPendingAnswer+xml";
pub const RUNTIME_INFO_SECTION: &str = "application/vnd.vmware.vcloud.runtimeInfoSection+xml";
pub const SCREEN_TICKET: &str = "application/vnd.vmware.vcloud.screenTicket+xml";
pub const STARTUP_SECTION: &str = "application/vnd.vmware.vcloud.startupSection+xml";
pub const VIRTUAL_HARDWARE_SECTION: &str =
    "application/vnd.vmware.vcloud.virtualHardwareSection+xml";
pub const OVF_RASD_ITEM: &str = "application/vnd.vmware.vcloud.rasdItem+xml";
pub const OVF_RASD_ITEMS_LIST: &str = "application/vnd.vmware.vcloud.rasdItemsList+xml";
pub const METADATA: &str = "application/vnd.vmware.vcloud.metadata+xml";
pub const METADATA_VALUE: &str = "application/vnd.vmware.vcloud.metadata.value+xml";
pub const ANY_IMAGE: &str = "image/*";

/// Whether payloads of this media type travel as XML.
pub fn is_xml(media_type: &str) -> bool {
    let essence = essence(media_type);
    essence.ends_with("+xml") || essence.ends_with("/xml")
}

/// Whether this media type names an image (screen captures).
pub fn is_image(media_type: &str) -> bool {
    essence(media_type).starts_with("image/")
}

/// The subtype stem of a vCloud media type, e.g. `networkConnectionSection`
/// for `application/vnd.vmware.vcloud.networkConnectionSection+xml`.
pub fn stem(media_type: &str) -> Option<&str> {
    essence(media_type)
        .strip_prefix("application/vnd.vmware.vcloud.")?
        .strip_suffix("+xml")
}

/// Media type without parameters (`;version=1.5` and the like).
fn essence(media_type: &str) -> &str {
    media_type.split(';').next().unwrap_or(media_type).trim()
}
