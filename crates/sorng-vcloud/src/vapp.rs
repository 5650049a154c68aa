//! vApp (and VM) operations via the vCloud Director 1.5 API.
//!
//! Covers lifecycle actions, power operations, the configurable sections,
//! virtual hardware items, the console and pending questions. Every call takes
//! the vApp href; long-running ones return a [`Task`] for the task tracker.

use crate::catalog::*;
use crate::client::Session;
use crate::error::VcdResult;
use crate::href::ResourceHandle;
use crate::metadata::MetadataClient;
use crate::types::*;

use bytes::Bytes;

/// High-level vApp operations backed by the shared [`Session`].
#[derive(Clone)]
pub struct VAppClient {
    session: Session,
}

impl VAppClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Metadata of `vapp`, using this client's dispatcher and auth context.
    pub fn metadata(&self, vapp: &ResourceHandle) -> MetadataClient {
        MetadataClient::new(self.session.clone(), vapp.clone())
    }

    // ── Get / Modify / Delete ───────────────────────────────────────

    pub async fn get_vapp(&self, vapp: &ResourceHandle) -> VcdResult<VApp> {
        self.session.value(&GET_VAPP, vapp).await
    }

    /// Change name / description.
    pub async fn modify_vapp(&self, vapp: &ResourceHandle, changes: &VApp) -> VcdResult<Task> {
        self.session.task_with(&MODIFY_VAPP, vapp, changes).await
    }

    pub async fn delete_vapp(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&DELETE_VAPP, vapp).await
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// Consolidate all disks of a VM's snapshot chain.
    pub async fn consolidate(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&CONSOLIDATE, vapp).await
    }

    /// Replace the access control list; the server echoes the stored one.
    pub async fn control_access(
        &self,
        vapp: &ResourceHandle,
        params: &ControlAccessParams,
    ) -> VcdResult<ControlAccessParams> {
        self.session.value_with(&CONTROL_ACCESS, vapp, params).await
    }

    pub async fn get_control_access(&self, vapp: &ResourceHandle) -> VcdResult<ControlAccessParams> {
        self.session.value(&GET_CONTROL_ACCESS, vapp).await
    }

    pub async fn deploy(&self, vapp: &ResourceHandle, params: &DeployVAppParams) -> VcdResult<Task> {
        self.session.task_with(&DEPLOY, vapp, params).await
    }

    pub async fn undeploy(
        &self,
        vapp: &ResourceHandle,
        params: &UndeployVAppParams,
    ) -> VcdResult<Task> {
        self.session.task_with(&UNDEPLOY, vapp, params).await
    }

    pub async fn discard_suspended_state(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&DISCARD_SUSPENDED_STATE, vapp).await
    }

    pub async fn enter_maintenance_mode(&self, vapp: &ResourceHandle) -> VcdResult<()> {
        self.session.unit(&ENTER_MAINTENANCE_MODE, vapp).await
    }

    pub async fn exit_maintenance_mode(&self, vapp: &ResourceHandle) -> VcdResult<()> {
        self.session.unit(&EXIT_MAINTENANCE_MODE, vapp).await
    }

    pub async fn install_vmware_tools(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&INSTALL_VMWARE_TOOLS, vapp).await
    }

    /// Add and/or remove VMs.
    pub async fn recompose(
        &self,
        vapp: &ResourceHandle,
        params: &RecomposeVAppParams,
    ) -> VcdResult<Task> {
        self.session.task_with(&RECOMPOSE, vapp, params).await
    }

    /// Move a VM to another datastore.
    pub async fn relocate(&self, vapp: &ResourceHandle, params: &RelocateParams) -> VcdResult<Task> {
        self.session.task_with(&RELOCATE, vapp, params).await
    }

    pub async fn upgrade_hardware_version(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&UPGRADE_HARDWARE_VERSION, vapp).await
    }

    // ── Power ───────────────────────────────────────────────────────

    pub async fn power_off(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&POWER_OFF, vapp).await
    }

    pub async fn power_on(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&POWER_ON, vapp).await
    }

    pub async fn reboot(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&REBOOT, vapp).await
    }

    /// Hard reset.
    pub async fn reset(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&RESET, vapp).await
    }

    /// Guest shutdown (needs VMware Tools).
    pub async fn shutdown(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&SHUTDOWN, vapp).await
    }

    pub async fn suspend(&self, vapp: &ResourceHandle) -> VcdResult<Task> {
        self.session.task(&SUSPEND, vapp).await
    }

    // ── Sections ────────────────────────────────────────────────────

    pub async fn get_guest_customization_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<GuestCustomizationSection> {
        self.session.value(&GET_GUEST_CUSTOMIZATION_SECTION, vapp).await
    }

    pub async fn modify_guest_customization_section(
        &self,
        vapp: &ResourceHandle,
        section: &GuestCustomizationSection,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_GUEST_CUSTOMIZATION_SECTION, vapp, section)
            .await
    }

    pub async fn get_lease_settings_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<LeaseSettingsSection> {
        self.session.value(&GET_LEASE_SETTINGS_SECTION, vapp).await
    }

    pub async fn modify_lease_settings_section(
        &self,
        vapp: &ResourceHandle,
        section: &LeaseSettingsSection,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_LEASE_SETTINGS_SECTION, vapp, section)
            .await
    }

    pub async fn get_network_config_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<NetworkConfigSection> {
        self.session.value(&GET_NETWORK_CONFIG_SECTION, vapp).await
    }

    pub async fn modify_network_config_section(
        &self,
        vapp: &ResourceHandle,
        section: &NetworkConfigSection,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_NETWORK_CONFIG_SECTION, vapp, section)
            .await
    }

    pub async fn get_network_connection_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<NetworkConnectionSection> {
        self.session.value(&GET_NETWORK_CONNECTION_SECTION, vapp).await
    }

    pub async fn modify_network_connection_section(
        &self,
        vapp: &ResourceHandle,
        section: &NetworkConnectionSection,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_NETWORK_CONNECTION_SECTION, vapp, section)
            .await
    }

    pub async fn get_network_section(&self, vapp: &ResourceHandle) -> VcdResult<NetworkSection> {
        self.session.value(&GET_NETWORK_SECTION, vapp).await
    }

    pub async fn get_operating_system_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<OperatingSystemSection> {
        self.session.value(&GET_OPERATING_SYSTEM_SECTION, vapp).await
    }

    pub async fn modify_operating_system_section(
        &self,
        vapp: &ResourceHandle,
        section: &OperatingSystemSection,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_OPERATING_SYSTEM_SECTION, vapp, section)
            .await
    }

    pub async fn get_runtime_info_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<RuntimeInfoSection> {
        self.session.value(&GET_RUNTIME_INFO_SECTION, vapp).await
    }

    pub async fn get_startup_section(&self, vapp: &ResourceHandle) -> VcdResult<StartupSection> {
        self.session.value(&GET_STARTUP_SECTION, vapp).await
    }

    pub async fn modify_startup_section(
        &self,
        vapp: &ResourceHandle,
        section: &StartupSection,
    ) -> VcdResult<Task> {
        self.session.task_with(&MODIFY_STARTUP_SECTION, vapp, section).await
    }

    // ── Media / Owner / Product sections ────────────────────────────

    pub async fn eject_media(
        &self,
        vapp: &ResourceHandle,
        params: &MediaInsertOrEjectParams,
    ) -> VcdResult<Task> {
        self.session.task_with(&EJECT_MEDIA, vapp, params).await
    }

    pub async fn insert_media(
        &self,
        vapp: &ResourceHandle,
        params: &MediaInsertOrEjectParams,
    ) -> VcdResult<Task> {
        self.session.task_with(&INSERT_MEDIA, vapp, params).await
    }

    pub async fn get_owner(&self, vapp: &ResourceHandle) -> VcdResult<Owner> {
        self.session.value(&GET_OWNER, vapp).await
    }

    pub async fn modify_owner(&self, vapp: &ResourceHandle, owner: &Owner) -> VcdResult<Task> {
        self.session.task_with(&MODIFY_OWNER, vapp, owner).await
    }

    pub async fn get_product_sections(&self, vapp: &ResourceHandle) -> VcdResult<ProductSectionList> {
        self.session.value(&GET_PRODUCT_SECTIONS, vapp).await
    }

    pub async fn modify_product_sections(
        &self,
        vapp: &ResourceHandle,
        sections: &ProductSectionList,
    ) -> VcdResult<Task> {
        self.session.task_with(&MODIFY_PRODUCT_SECTIONS, vapp, sections).await
    }

    // ── Pending question / Console ──────────────────────────────────

    pub async fn get_pending_question(&self, vapp: &ResourceHandle) -> VcdResult<VmPendingQuestion> {
        self.session.value(&GET_PENDING_QUESTION, vapp).await
    }

    pub async fn answer_question(
        &self,
        vapp: &ResourceHandle,
        answer: &VmQuestionAnswer,
    ) -> VcdResult<()> {
        self.session.unit_with(&ANSWER_QUESTION, vapp, answer).await
    }

    /// Console thumbnail, as returned by the server (PNG).
    pub async fn get_screen_image(&self, vapp: &ResourceHandle) -> VcdResult<Bytes> {
        self.session.bytes(&GET_SCREEN_IMAGE, vapp).await
    }

    pub async fn get_screen_ticket(&self, vapp: &ResourceHandle) -> VcdResult<ScreenTicket> {
        self.session.value(&GET_SCREEN_TICKET, vapp).await
    }

    // ── Virtual hardware ────────────────────────────────────────────

    pub async fn get_virtual_hardware_section(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<VirtualHardwareSection> {
        self.session.value(&GET_VIRTUAL_HARDWARE_SECTION, vapp).await
    }

    pub async fn modify_virtual_hardware_section(
        &self,
        vapp: &ResourceHandle,
        section: &VirtualHardwareSection,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_VIRTUAL_HARDWARE_SECTION, vapp, section)
            .await
    }

    pub async fn get_virtual_hardware_section_cpu(&self, vapp: &ResourceHandle) -> VcdResult<Rasd> {
        self.session.value(&GET_VIRTUAL_HARDWARE_SECTION_CPU, vapp).await
    }

    pub async fn modify_virtual_hardware_section_cpu(
        &self,
        vapp: &ResourceHandle,
        cpu: &Rasd,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_VIRTUAL_HARDWARE_SECTION_CPU, vapp, cpu)
            .await
    }

    pub async fn get_virtual_hardware_section_disks(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<RasdItemsList> {
        self.session.value(&GET_VIRTUAL_HARDWARE_SECTION_DISKS, vapp).await
    }

    pub async fn modify_virtual_hardware_section_disks(
        &self,
        vapp: &ResourceHandle,
        disks: &RasdItemsList,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_VIRTUAL_HARDWARE_SECTION_DISKS, vapp, disks)
            .await
    }

    /// CD / floppy drives.
    pub async fn get_virtual_hardware_section_media(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<RasdItemsList> {
        self.session.value(&GET_VIRTUAL_HARDWARE_SECTION_MEDIA, vapp).await
    }

    pub async fn get_virtual_hardware_section_memory(&self, vapp: &ResourceHandle) -> VcdResult<Rasd> {
        self.session.value(&GET_VIRTUAL_HARDWARE_SECTION_MEMORY, vapp).await
    }

    pub async fn modify_virtual_hardware_section_memory(
        &self,
        vapp: &ResourceHandle,
        memory: &Rasd,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_VIRTUAL_HARDWARE_SECTION_MEMORY, vapp, memory)
            .await
    }

    pub async fn get_virtual_hardware_section_network_cards(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<RasdItemsList> {
        self.session
            .value(&GET_VIRTUAL_HARDWARE_SECTION_NETWORK_CARDS, vapp)
            .await
    }

    pub async fn modify_virtual_hardware_section_network_cards(
        &self,
        vapp: &ResourceHandle,
        nics: &RasdItemsList,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_VIRTUAL_HARDWARE_SECTION_NETWORK_CARDS, vapp, nics)
            .await
    }

    pub async fn get_virtual_hardware_section_serial_ports(
        &self,
        vapp: &ResourceHandle,
    ) -> VcdResult<RasdItemsList> {
        self.session
            .value(&GET_VIRTUAL_HARDWARE_SECTION_SERIAL_PORTS, vapp)
            .await
    }

    pub async fn modify_virtual_hardware_section_serial_ports(
        &self,
        vapp: &ResourceHandle,
        ports: &RasdItemsList,
    ) -> VcdResult<Task> {
        self.session
            .task_with(&MODIFY_VIRTUAL_HARDWARE_SECTION_SERIAL_PORTS, vapp, ports)
            .await
    }
}
