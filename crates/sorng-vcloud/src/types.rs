//! Shared types for vCloud Director vApp management.
//!
//! Every struct mirrors one server-side XML representation. Attributes are
//! mapped with `@name`, elements with their schema name; OVF / RASD elements
//! are written with their namespace prefix and read back by local name.

use crate::href::ResourceHandle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  References / Links
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Pointer to another entity (`<User href=… name=… type=…/>` and friends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "@href")]
    pub href: ResourceHandle,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Reference {
    pub fn new(href: ResourceHandle) -> Self {
        Self {
            href,
            id: None,
            media_type: None,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Hypermedia link advertised by a representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "@rel")]
    pub rel: String,
    #[serde(rename = "@href")]
    pub href: ResourceHandle,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Errors / Tasks
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `<Error>` body returned with 4xx/5xx responses and embedded in failed tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Error")]
pub struct ErrorDetail {
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@majorErrorCode", default, skip_serializing_if = "Option::is_none")]
    pub major_error_code: Option<u16>,
    #[serde(rename = "@minorErrorCode", default, skip_serializing_if = "Option::is_none")]
    pub minor_error_code: Option<String>,
    #[serde(
        rename = "@vendorSpecificErrorCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vendor_specific_error_code: Option<String>,
    #[serde(rename = "@stackTrace", default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            major_error_code: None,
            minor_error_code: None,
            vendor_specific_error_code: None,
            stack_trace: None,
        }
    }

    pub fn with_major_code(mut self, code: u16) -> Self {
        self.major_error_code = Some(code);
        self
    }

    pub fn with_minor_code(mut self, code: impl Into<String>) -> Self {
        self.minor_error_code = Some(code.into());
        self
    }
}

/// Lifecycle of a server-side job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Queued,
    PreRunning,
    Running,
    Success,
    Error,
    Canceled,
    Aborted,
    /// A status this client does not know; treated as still in flight.
    Unknown,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::PreRunning => "preRunning",
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
            Self::Canceled => "canceled",
            Self::Aborted => "aborted",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "queued" => Self::Queued,
            "preRunning" => Self::PreRunning,
            "running" => Self::Running,
            "success" => Self::Success,
            "error" => Self::Error,
            "canceled" => Self::Canceled,
            "aborted" => Self::Aborted,
            _ => Self::Unknown,
        }
    }

    /// No transition follows a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Success | Self::Error | Self::Canceled | Self::Aborted
        )
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Snapshot of an asynchronous job. Only the server mutates task state;
/// the client re-reads it through [`crate::task::TaskTracker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Task")]
pub struct Task {
    #[serde(rename = "@href")]
    pub href: ResourceHandle,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@status")]
    pub status: TaskStatus,
    #[serde(rename = "@operation", default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(rename = "@operationName", default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(rename = "@startTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "@endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "@expiryTime", default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// The entity the job acts on.
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    /// Percent complete, when the server reports it.
    #[serde(rename = "Progress", default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl Task {
    pub fn new(href: ResourceHandle, status: TaskStatus) -> Self {
        Self {
            href,
            id: None,
            media_type: None,
            name: None,
            status,
            operation: None,
            operation_name: None,
            start_time: None,
            end_time: None,
            expiry_time: None,
            links: Vec::new(),
            owner: None,
            error: None,
            progress: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_success(&self) -> bool {
        self.status == TaskStatus::Success
    }

    /// The `task:cancel` link, present while the server still accepts a cancel.
    pub fn cancel_link(&self) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == "task:cancel")
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  vApp / Owner / Access control
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "VApp")]
pub struct VApp {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Numeric vCloud entity status (4 = powered on, 8 = powered off, …).
    #[serde(rename = "@status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(rename = "@deployed", default, skip_serializing_if = "Option::is_none")]
    pub deployed: Option<bool>,
    #[serde(
        rename = "@ovfDescriptorUploaded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ovf_descriptor_uploaded: Option<bool>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(rename = "InMaintenanceMode", default, skip_serializing_if = "Option::is_none")]
    pub in_maintenance_mode: Option<bool>,
}

impl VApp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
            id: None,
            media_type: None,
            status: None,
            deployed: None,
            ovf_descriptor_uploaded: None,
            links: Vec::new(),
            description: None,
            owner: None,
            in_maintenance_mode: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Owner")]
pub struct Owner {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "User")]
    pub user: Reference,
}

impl Owner {
    pub fn new(user: Reference) -> Self {
        Self {
            href: None,
            media_type: None,
            links: Vec::new(),
            user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "ControlAccessParams")]
pub struct ControlAccessParams {
    #[serde(rename = "IsSharedToEveryone")]
    pub is_shared_to_everyone: bool,
    #[serde(rename = "EveryoneAccessLevel", default, skip_serializing_if = "Option::is_none")]
    pub everyone_access_level: Option<String>,
    #[serde(rename = "AccessSettings", default, skip_serializing_if = "Option::is_none")]
    pub access_settings: Option<AccessSettings>,
}

impl ControlAccessParams {
    /// Private vApp: nobody but the explicitly listed subjects.
    pub fn private() -> Self {
        Self {
            is_shared_to_everyone: false,
            everyone_access_level: None,
            access_settings: None,
        }
    }

    /// Shared with the whole organisation at `level` (`ReadOnly`, `Change`, `FullControl`).
    pub fn shared(level: impl Into<String>) -> Self {
        Self {
            is_shared_to_everyone: true,
            everyone_access_level: Some(level.into()),
            access_settings: None,
        }
    }

    pub fn with_access(mut self, subject: Reference, level: impl Into<String>) -> Self {
        let settings = self.access_settings.get_or_insert_with(|| AccessSettings {
            access_setting: Vec::new(),
        });
        settings.access_setting.push(AccessSetting {
            subject,
            access_level: level.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessSettings {
    #[serde(rename = "AccessSetting", default)]
    pub access_setting: Vec<AccessSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessSetting {
    #[serde(rename = "Subject")]
    pub subject: Reference,
    #[serde(rename = "AccessLevel")]
    pub access_level: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Action parameters
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "DeployVAppParams")]
pub struct DeployVAppParams {
    #[serde(rename = "@powerOn", default, skip_serializing_if = "Option::is_none")]
    pub power_on: Option<bool>,
    #[serde(
        rename = "@deploymentLeaseSeconds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deployment_lease_seconds: Option<i32>,
    #[serde(rename = "@forceCustomization", default, skip_serializing_if = "Option::is_none")]
    pub force_customization: Option<bool>,
}

impl DeployVAppParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn power_on(mut self, power_on: bool) -> Self {
        self.power_on = Some(power_on);
        self
    }

    pub fn deployment_lease_seconds(mut self, seconds: i32) -> Self {
        self.deployment_lease_seconds = Some(seconds);
        self
    }

    pub fn force_customization(mut self, force: bool) -> Self {
        self.force_customization = Some(force);
        self
    }
}

/// What to do with running VMs when undeploying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndeployPowerAction {
    PowerOff,
    Suspend,
    Shutdown,
    Force,
    Default,
}

impl UndeployPowerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PowerOff => "powerOff",
            Self::Suspend => "suspend",
            Self::Shutdown => "shutdown",
            Self::Force => "force",
            Self::Default => "default",
        }
    }
}

impl Serialize for UndeployPowerAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UndeployPowerAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "powerOff" => Ok(Self::PowerOff),
            "suspend" => Ok(Self::Suspend),
            "shutdown" => Ok(Self::Shutdown),
            "force" => Ok(Self::Force),
            "default" => Ok(Self::Default),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["powerOff", "suspend", "shutdown", "force", "default"],
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "UndeployVAppParams")]
pub struct UndeployVAppParams {
    #[serde(rename = "UndeployPowerAction", default, skip_serializing_if = "Option::is_none")]
    pub undeploy_power_action: Option<UndeployPowerAction>,
}

impl UndeployVAppParams {
    pub fn new(action: UndeployPowerAction) -> Self {
        Self {
            undeploy_power_action: Some(action),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "RecomposeVAppParams")]
pub struct RecomposeVAppParams {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "SourcedItem", default, skip_serializing_if = "Vec::is_empty")]
    pub sourced_items: Vec<SourcedCompositionItem>,
    #[serde(rename = "AllEULAsAccepted", default, skip_serializing_if = "Option::is_none")]
    pub all_eulas_accepted: Option<bool>,
    #[serde(rename = "DeleteItem", default, skip_serializing_if = "Vec::is_empty")]
    pub delete_items: Vec<Reference>,
}

impl RecomposeVAppParams {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            sourced_items: Vec::new(),
            all_eulas_accepted: None,
            delete_items: Vec::new(),
        }
    }

    pub fn add_item(mut self, source: Reference) -> Self {
        self.sourced_items.push(SourcedCompositionItem { source });
        self
    }

    pub fn delete_item(mut self, item: Reference) -> Self {
        self.delete_items.push(item);
        self
    }

    pub fn accept_eulas(mut self) -> Self {
        self.all_eulas_accepted = Some(true);
        self
    }
}

impl Default for RecomposeVAppParams {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedCompositionItem {
    #[serde(rename = "Source")]
    pub source: Reference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "RelocateParams")]
pub struct RelocateParams {
    #[serde(rename = "Datastore")]
    pub datastore: Reference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "MediaInsertOrEjectParams")]
pub struct MediaInsertOrEjectParams {
    #[serde(rename = "Media")]
    pub media: Reference,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Sections
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "GuestCustomizationSection")]
pub struct GuestCustomizationSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "ChangeSid", default, skip_serializing_if = "Option::is_none")]
    pub change_sid: Option<bool>,
    #[serde(rename = "VirtualMachineId", default, skip_serializing_if = "Option::is_none")]
    pub virtual_machine_id: Option<String>,
    #[serde(rename = "JoinDomainEnabled", default, skip_serializing_if = "Option::is_none")]
    pub join_domain_enabled: Option<bool>,
    #[serde(rename = "DomainName", default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "AdminPasswordEnabled", default, skip_serializing_if = "Option::is_none")]
    pub admin_password_enabled: Option<bool>,
    #[serde(rename = "AdminPasswordAuto", default, skip_serializing_if = "Option::is_none")]
    pub admin_password_auto: Option<bool>,
    #[serde(rename = "AdminPassword", default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    #[serde(rename = "ResetPasswordRequired", default, skip_serializing_if = "Option::is_none")]
    pub reset_password_required: Option<bool>,
    #[serde(rename = "CustomizationScript", default, skip_serializing_if = "Option::is_none")]
    pub customization_script: Option<String>,
    #[serde(rename = "ComputerName", default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl GuestCustomizationSection {
    pub fn new(info: impl Into<String>) -> Self {
        Self {
            href: None,
            media_type: None,
            info: info.into(),
            enabled: None,
            change_sid: None,
            virtual_machine_id: None,
            join_domain_enabled: None,
            domain_name: None,
            admin_password_enabled: None,
            admin_password_auto: None,
            admin_password: None,
            reset_password_required: None,
            customization_script: None,
            computer_name: None,
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "LeaseSettingsSection")]
pub struct LeaseSettingsSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "DeploymentLeaseInSeconds", default, skip_serializing_if = "Option::is_none")]
    pub deployment_lease_in_seconds: Option<i64>,
    #[serde(rename = "StorageLeaseInSeconds", default, skip_serializing_if = "Option::is_none")]
    pub storage_lease_in_seconds: Option<i64>,
    #[serde(rename = "DeploymentLeaseExpiration", default, skip_serializing_if = "Option::is_none")]
    pub deployment_lease_expiration: Option<DateTime<Utc>>,
    #[serde(rename = "StorageLeaseExpiration", default, skip_serializing_if = "Option::is_none")]
    pub storage_lease_expiration: Option<DateTime<Utc>>,
}

impl LeaseSettingsSection {
    pub fn new(info: impl Into<String>) -> Self {
        Self {
            href: None,
            media_type: None,
            info: info.into(),
            links: Vec::new(),
            deployment_lease_in_seconds: None,
            storage_lease_in_seconds: None,
            deployment_lease_expiration: None,
            storage_lease_expiration: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "NetworkConfigSection")]
pub struct NetworkConfigSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "NetworkConfig", default, skip_serializing_if = "Vec::is_empty")]
    pub network_config: Vec<VAppNetworkConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VAppNetworkConfiguration {
    #[serde(rename = "@networkName")]
    pub network_name: String,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Configuration", default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<NetworkConfiguration>,
    #[serde(rename = "IsDeployed", default, skip_serializing_if = "Option::is_none")]
    pub is_deployed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfiguration {
    #[serde(rename = "ParentNetwork", default, skip_serializing_if = "Option::is_none")]
    pub parent_network: Option<Reference>,
    /// `bridged`, `isolated` or `natRouted`.
    #[serde(rename = "FenceMode")]
    pub fence_mode: String,
    #[serde(
        rename = "RetainNetInfoAcrossDeployments",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub retain_net_info_across_deployments: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "NetworkConnectionSection")]
pub struct NetworkConnectionSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename = "PrimaryNetworkConnectionIndex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_network_connection_index: Option<u32>,
    #[serde(rename = "NetworkConnection", default, skip_serializing_if = "Vec::is_empty")]
    pub network_connections: Vec<NetworkConnection>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConnection {
    #[serde(rename = "@network")]
    pub network: String,
    #[serde(rename = "@needsCustomization", default, skip_serializing_if = "Option::is_none")]
    pub needs_customization: Option<bool>,
    #[serde(rename = "NetworkConnectionIndex")]
    pub network_connection_index: u32,
    #[serde(rename = "IpAddress", default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(rename = "ExternalIpAddress", default, skip_serializing_if = "Option::is_none")]
    pub external_ip_address: Option<String>,
    #[serde(rename = "IsConnected")]
    pub is_connected: bool,
    #[serde(rename = "MACAddress", default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// `POOL`, `DHCP`, `MANUAL` or `NONE`.
    #[serde(rename = "IpAddressAllocationMode")]
    pub ip_address_allocation_mode: String,
}

/// OVF `NetworkSection`: the logical networks a vApp refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename(serialize = "ovf:NetworkSection", deserialize = "NetworkSection"))]
pub struct NetworkSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename(serialize = "ovf:Network", deserialize = "Network"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub networks: Vec<OvfNetwork>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvfNetwork {
    #[serde(rename(serialize = "@ovf:name", deserialize = "@name"))]
    pub name: String,
    #[serde(
        rename(serialize = "ovf:Description", deserialize = "Description"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename(
    serialize = "ovf:OperatingSystemSection",
    deserialize = "OperatingSystemSection"
))]
pub struct OperatingSystemSection {
    #[serde(rename(serialize = "@ovf:id", deserialize = "@id"))]
    pub id: i32,
    #[serde(
        rename(serialize = "@vmw:osType", deserialize = "@osType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub os_type: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename(serialize = "ovf:Description", deserialize = "Description"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl OperatingSystemSection {
    pub fn new(id: i32, info: impl Into<String>) -> Self {
        Self {
            id,
            os_type: None,
            info: info.into(),
            description: None,
        }
    }

    pub fn with_os_type(mut self, os_type: impl Into<String>) -> Self {
        self.os_type = Some(os_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "ProductSectionList")]
pub struct ProductSectionList {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(
        rename(serialize = "ovf:ProductSection", deserialize = "ProductSection"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub product_sections: Vec<ProductSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSection {
    #[serde(
        rename(serialize = "@ovf:class", deserialize = "@class"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub class: Option<String>,
    #[serde(
        rename(serialize = "@ovf:instance", deserialize = "@instance"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instance: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename(serialize = "ovf:Product", deserialize = "Product"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product: Option<String>,
    #[serde(
        rename(serialize = "ovf:Vendor", deserialize = "Vendor"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vendor: Option<String>,
    #[serde(
        rename(serialize = "ovf:Version", deserialize = "Version"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        rename(serialize = "ovf:Property", deserialize = "Property"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<ProductProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProperty {
    #[serde(rename(serialize = "@ovf:key", deserialize = "@key"))]
    pub key: String,
    #[serde(rename(serialize = "@ovf:type", deserialize = "@type"))]
    pub value_type: String,
    #[serde(
        rename(serialize = "@ovf:value", deserialize = "@value"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
    #[serde(
        rename(serialize = "@ovf:userConfigurable", deserialize = "@userConfigurable"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_configurable: Option<bool>,
    #[serde(
        rename(serialize = "ovf:Label", deserialize = "Label"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        rename(serialize = "ovf:Description", deserialize = "Description"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "RuntimeInfoSection")]
pub struct RuntimeInfoSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename(serialize = "vmw:VMWareTools", deserialize = "VMWareTools"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vmware_tools: Option<VmwareTools>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmwareTools {
    #[serde(rename(serialize = "@vmw:version", deserialize = "@version"))]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename(serialize = "ovf:StartupSection", deserialize = "StartupSection"))]
pub struct StartupSection {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename(serialize = "ovf:Item", deserialize = "Item"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<StartupItem>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Boot ordering entry for one VM of the vApp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupItem {
    #[serde(rename(serialize = "@ovf:id", deserialize = "@id"))]
    pub id: String,
    #[serde(rename(serialize = "@ovf:order", deserialize = "@order"))]
    pub order: i32,
    #[serde(rename(serialize = "@ovf:startAction", deserialize = "@startAction"))]
    pub start_action: String,
    #[serde(rename(serialize = "@ovf:startDelay", deserialize = "@startDelay"))]
    pub start_delay: i32,
    #[serde(rename(serialize = "@ovf:stopAction", deserialize = "@stopAction"))]
    pub stop_action: String,
    #[serde(rename(serialize = "@ovf:stopDelay", deserialize = "@stopDelay"))]
    pub stop_delay: i32,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Virtual hardware (OVF / CIM RASD)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// CIM `ResourceType` codes seen in vApp hardware sections.
pub mod resource_type {
    pub const PROCESSOR: u16 = 3;
    pub const MEMORY: u16 = 4;
    pub const IDE_CONTROLLER: u16 = 5;
    pub const SCSI_CONTROLLER: u16 = 6;
    pub const ETHERNET_ADAPTER: u16 = 10;
    pub const FLOPPY_DRIVE: u16 = 14;
    pub const CD_DRIVE: u16 = 15;
    pub const DISK_DRIVE: u16 = 17;
    pub const SERIAL_PORT: u16 = 21;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename(serialize = "ovf:VirtualHardwareSection", deserialize = "VirtualHardwareSection"))]
pub struct VirtualHardwareSection {
    #[serde(rename(serialize = "@vcloud:href", deserialize = "@href"), default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename(serialize = "@vcloud:type", deserialize = "@type"), default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename(serialize = "ovf:Info", deserialize = "Info"))]
    pub info: String,
    #[serde(
        rename(serialize = "ovf:System", deserialize = "System"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub system: Option<VirtualSystemSettingData>,
    #[serde(
        rename(serialize = "ovf:Item", deserialize = "Item"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<Rasd>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl VirtualHardwareSection {
    /// Items of one CIM resource type, in section order.
    pub fn items_of(&self, resource_type: u16) -> impl Iterator<Item = &Rasd> {
        self.items
            .iter()
            .filter(move |item| item.resource_type == resource_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualSystemSettingData {
    #[serde(rename(serialize = "vssd:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(rename(serialize = "vssd:InstanceID", deserialize = "InstanceID"))]
    pub instance_id: u32,
    #[serde(
        rename(serialize = "vssd:VirtualSystemIdentifier", deserialize = "VirtualSystemIdentifier"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_system_identifier: Option<String>,
    #[serde(
        rename(serialize = "vssd:VirtualSystemType", deserialize = "VirtualSystemType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_system_type: Option<String>,
}

/// One resource-allocation item (CPU, memory, disk, NIC, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Item")]
pub struct Rasd {
    #[serde(
        rename(serialize = "@vcloud:href", deserialize = "@href"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub href: Option<ResourceHandle>,
    #[serde(
        rename(serialize = "rasd:Address", deserialize = "Address"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(
        rename(serialize = "rasd:AddressOnParent", deserialize = "AddressOnParent"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub address_on_parent: Option<String>,
    #[serde(
        rename(serialize = "rasd:AllocationUnits", deserialize = "AllocationUnits"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allocation_units: Option<String>,
    #[serde(
        rename(serialize = "rasd:AutomaticAllocation", deserialize = "AutomaticAllocation"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automatic_allocation: Option<bool>,
    #[serde(
        rename(serialize = "rasd:Connection", deserialize = "Connection"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub connections: Vec<RasdConnection>,
    #[serde(
        rename(serialize = "rasd:Description", deserialize = "Description"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename(serialize = "rasd:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(
        rename(serialize = "rasd:HostResource", deserialize = "HostResource"),
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub host_resources: Vec<RasdHostResource>,
    #[serde(rename(serialize = "rasd:InstanceID", deserialize = "InstanceID"))]
    pub instance_id: u32,
    #[serde(
        rename(serialize = "rasd:Parent", deserialize = "Parent"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<u32>,
    #[serde(
        rename(serialize = "rasd:ResourceSubType", deserialize = "ResourceSubType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_sub_type: Option<String>,
    #[serde(rename(serialize = "rasd:ResourceType", deserialize = "ResourceType"))]
    pub resource_type: u16,
    #[serde(
        rename(serialize = "rasd:VirtualQuantity", deserialize = "VirtualQuantity"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_quantity: Option<u64>,
}

impl Rasd {
    pub fn new(instance_id: u32, resource_type: u16, element_name: impl Into<String>) -> Self {
        Self {
            href: None,
            address: None,
            address_on_parent: None,
            allocation_units: None,
            automatic_allocation: None,
            connections: Vec::new(),
            description: None,
            element_name: element_name.into(),
            host_resources: Vec::new(),
            instance_id,
            parent: None,
            resource_sub_type: None,
            resource_type,
            virtual_quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u64, units: impl Into<String>) -> Self {
        self.virtual_quantity = Some(quantity);
        self.allocation_units = Some(units.into());
        self
    }
}

/// `<rasd:Connection>`: network name plus vCloud addressing attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasdConnection {
    #[serde(
        rename(serialize = "@vcloud:ipAddressingMode", deserialize = "@ipAddressingMode"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_addressing_mode: Option<String>,
    #[serde(
        rename(serialize = "@vcloud:ipAddress", deserialize = "@ipAddress"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_address: Option<String>,
    #[serde(
        rename(
            serialize = "@vcloud:primaryNetworkConnection",
            deserialize = "@primaryNetworkConnection"
        ),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_network_connection: Option<bool>,
    #[serde(rename = "$text", default)]
    pub network: String,
}

/// `<rasd:HostResource>`: backing of a disk, with vCloud capacity attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasdHostResource {
    #[serde(
        rename(serialize = "@vcloud:capacity", deserialize = "@capacity"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity: Option<u64>,
    #[serde(
        rename(serialize = "@vcloud:busType", deserialize = "@busType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bus_type: Option<String>,
    #[serde(
        rename(serialize = "@vcloud:busSubType", deserialize = "@busSubType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bus_sub_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "RasdItemsList")]
pub struct RasdItemsList {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "Item", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Rasd>,
}

impl RasdItemsList {
    pub fn new(items: Vec<Rasd>) -> Self {
        Self {
            href: None,
            media_type: None,
            links: Vec::new(),
            items,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Pending questions / Console
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A question the hypervisor is blocked on (e.g. "was this VM moved or copied?").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "VmPendingQuestion")]
pub struct VmPendingQuestion {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "QuestionId")]
    pub question_id: String,
    #[serde(rename = "Choice", default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<VmQuestionAnswerChoice>,
}

impl VmPendingQuestion {
    /// Build the answer selecting the choice whose text matches `text`.
    pub fn answer_with(&self, text: &str) -> Option<VmQuestionAnswer> {
        self.choices
            .iter()
            .find(|c| c.text.eq_ignore_ascii_case(text))
            .map(|c| VmQuestionAnswer::new(c.id, self.question_id.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmQuestionAnswerChoice {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Text")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "VmQuestionAnswer")]
pub struct VmQuestionAnswer {
    #[serde(rename = "ChoiceId")]
    pub choice_id: i32,
    #[serde(rename = "QuestionId")]
    pub question_id: String,
}

impl VmQuestionAnswer {
    pub fn new(choice_id: i32, question_id: impl Into<String>) -> Self {
        Self {
            choice_id,
            question_id: question_id.into(),
        }
    }
}

/// Console ticket for a remote MKS session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "ScreenTicket")]
pub struct ScreenTicket {
    #[serde(rename = "$text")]
    pub value: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Metadata
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Metadata")]
pub struct Metadata {
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<ResourceHandle>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Link", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(rename = "MetadataEntry", default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(MetadataEntry {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "MetadataValue")]
pub struct MetadataValue {
    #[serde(rename = "Value")]
    pub value: String,
}

impl MetadataValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        for s in [
            TaskStatus::Success,
            TaskStatus::Error,
            TaskStatus::Canceled,
            TaskStatus::Aborted,
        ] {
            assert!(s.is_terminal(), "{s:?}");
        }
        for s in [
            TaskStatus::Queued,
            TaskStatus::PreRunning,
            TaskStatus::Running,
            TaskStatus::Unknown,
        ] {
            assert!(!s.is_terminal(), "{s:?}");
        }
    }

    #[test]
    fn unknown_status_string_parses_as_unknown() {
        assert_eq!(TaskStatus::parse("paused"), TaskStatus::Unknown);
        assert_eq!(TaskStatus::parse("preRunning"), TaskStatus::PreRunning);
    }

    #[test]
    fn pending_question_answer_by_text() {
        let q = VmPendingQuestion {
            href: None,
            links: Vec::new(),
            question: "Did you move or copy it?".into(),
            question_id: "q-7".into(),
            choices: vec![
                VmQuestionAnswerChoice { id: 0, text: "Cancel".into() },
                VmQuestionAnswerChoice { id: 2, text: "I copied it".into() },
            ],
        };
        let answer = q.answer_with("i copied it").unwrap();
        assert_eq!(answer, VmQuestionAnswer::new(2, "q-7"));
        assert!(q.answer_with("I moved it").is_none());
    }

    #[test]
    fn control_access_builder_collects_settings() {
        let user = Reference::new(
            ResourceHandle::parse("https://vcd.example.com/api/admin/user/u-1").unwrap(),
        );
        let params = ControlAccessParams::private().with_access(user, "ReadOnly");
        let settings = params.access_settings.unwrap();
        assert_eq!(settings.access_setting.len(), 1);
        assert_eq!(settings.access_setting[0].access_level, "ReadOnly");
    }
}
