//! Connection configuration.

use crate::error::{VcdError, VcdResult};
use crate::href::ResourceHandle;

use serde::{Deserialize, Serialize};

/// Where and how to reach a vCloud Director cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcdConfig {
    /// vCloud Director hostname / IP (e.g. "vcd.lab.local")
    pub host: String,
    /// Port (default 443)
    #[serde(default = "default_port")]
    pub port: u16,
    /// API version sent to the server (default "1.5")
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Skip TLS certificate verification (self-signed labs)
    #[serde(default)]
    pub insecure: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_port() -> u16 { 443 }
fn default_api_version() -> String { "1.5".into() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }

impl Default for VcdConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 443,
            api_version: default_api_version(),
            insecure: false,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl VcdConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> VcdResult<()> {
        if self.host.trim().is_empty() {
            return Err(VcdError::usage("config", "host is empty"));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(VcdError::usage("config", "timeouts must be non-zero"));
        }
        Ok(())
    }

    /// `https://{host}:{port}/api`; IPv6 literals are bracketed.
    pub fn api_root(&self) -> VcdResult<ResourceHandle> {
        let host = self.host.trim();
        let host = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]")
        } else {
            host.to_string()
        };
        ResourceHandle::parse(&format!("https://{}:{}/api", host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg: VcdConfig = serde_json::from_str(r#"{"host":"vcd.lab.local"}"#).unwrap();
        assert_eq!(cfg.port, 443);
        assert_eq!(cfg.api_version, "1.5");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert!(!cfg.insecure);
    }

    #[test]
    fn api_root_is_absolute() {
        let cfg = VcdConfig {
            port: 8443,
            ..VcdConfig::new("vcd.lab.local")
        };
        assert_eq!(cfg.api_root().unwrap().as_str(), "https://vcd.lab.local:8443/api");
    }

    #[test]
    fn api_root_brackets_ipv6_literal() {
        let cfg = VcdConfig {
            port: 8443,
            ..VcdConfig::new("fd00::10")
        };
        assert_eq!(cfg.api_root().unwrap().as_str(), "https://[fd00::10]:8443/api");

        let bracketed = VcdConfig {
            port: 8443,
            ..VcdConfig::new("[fd00::10]")
        };
        assert_eq!(bracketed.api_root().unwrap(), cfg.api_root().unwrap());
    }

    #[test]
    fn validate_rejects_empty_host_and_zero_timeout() {
        assert!(VcdConfig::default().validate().is_err());
        let cfg = VcdConfig {
            timeout_secs: 0,
            ..VcdConfig::new("vcd")
        };
        assert!(cfg.validate().is_err());
        VcdConfig::new("vcd").validate().unwrap();
    }
}
