use serde::{Deserialize, Serialize};

/// Size of the last-octet address pool (2..=254).
pub const ADDRESS_POOL_CAPACITY: usize = 253;

/// Top-level configuration that mirrors the network parameters YAML file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralConfig>,
    pub network: NetworkConfig,
}

impl Config {
    /// Validate the configuration
    ///
    /// Generation rules are checked separately by the topology planner, right
    /// before a pass draws any randomness.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.network.validate()
    }

    /// Log level requested by the configuration, if any
    pub fn log_level(&self) -> Option<&str> {
        self.general.as_ref().and_then(|g| g.log_level.as_deref())
    }
}

/// Shared general configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Identity and shape of the decoy network
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Network identifier reported in the snapshot metadata
    pub id: String,
    /// Domain name reported in the snapshot metadata
    pub domain: String,
    /// First three octets shared by every host, e.g. "192.168.1"
    pub base_ip: String,
    pub generation_rules: GenerationRules,
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::InvalidNetwork(
                "id cannot be empty".to_string(),
            ));
        }
        if self.domain.trim().is_empty() {
            return Err(ValidationError::InvalidNetwork(
                "domain cannot be empty".to_string(),
            ));
        }
        self.base_octets()?;
        Ok(())
    }

    /// Parse `base_ip` into its three leading octets
    pub fn base_octets(&self) -> Result<[u8; 3], ValidationError> {
        let parts: Vec<&str> = self.base_ip.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(ValidationError::InvalidNetwork(format!(
                "base_ip '{}' must have exactly three octets",
                self.base_ip
            )));
        }

        let mut octets = [0u8; 3];
        for (slot, part) in octets.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| {
                ValidationError::InvalidNetwork(format!(
                    "base_ip '{}' has an invalid octet '{}'",
                    self.base_ip, part
                ))
            })?;
        }
        Ok(octets)
    }
}

/// Numeric bounds for one generation pass
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRules {
    pub hosts_min: usize,
    pub hosts_max: usize,
    pub host_types: HostTypeRules,
}

/// Per-category bounds. Workstations take whatever is left of the total.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HostTypeRules {
    pub servers_min: usize,
    pub servers_max: usize,
    pub infra_min: usize,
    pub infra_max: usize,
}

impl GenerationRules {
    /// Check that the bounds can always be satisfied
    pub fn validate(&self) -> Result<(), RuleError> {
        let types = &self.host_types;

        if self.hosts_min > self.hosts_max {
            return Err(RuleError::HostRange {
                min: self.hosts_min,
                max: self.hosts_max,
            });
        }
        if types.servers_min > types.servers_max {
            return Err(RuleError::ServerRange {
                min: types.servers_min,
                max: types.servers_max,
            });
        }
        if types.infra_min >= types.infra_max {
            return Err(RuleError::InfraRange {
                min: types.infra_min,
                max: types.infra_max,
            });
        }
        let category_max = types.servers_max.checked_add(types.infra_max);
        if category_max.map_or(true, |sum| sum >= self.hosts_min) {
            return Err(RuleError::CategoryOverflow {
                servers_max: types.servers_max,
                infra_max: types.infra_max,
                hosts_min: self.hosts_min,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
}

/// Generation rules that cannot be satisfied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("hosts_min ({min}) cannot be greater than hosts_max ({max})")]
    HostRange { min: usize, max: usize },
    #[error("servers_min ({min}) cannot be greater than servers_max ({max})")]
    ServerRange { min: usize, max: usize },
    #[error("infra_min ({min}) must be lower than infra_max ({max})")]
    InfraRange { min: usize, max: usize },
    #[error("servers_max ({servers_max}) + infra_max ({infra_max}) must be lower than hosts_min ({hosts_min})")]
    CategoryOverflow {
        servers_max: usize,
        infra_max: usize,
        hosts_min: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(hosts: (usize, usize), servers: (usize, usize), infra: (usize, usize)) -> GenerationRules {
        GenerationRules {
            hosts_min: hosts.0,
            hosts_max: hosts.1,
            host_types: HostTypeRules {
                servers_min: servers.0,
                servers_max: servers.1,
                infra_min: infra.0,
                infra_max: infra.1,
            },
        }
    }

    #[test]
    fn test_network_config_parsing() {
        let yaml = r#"
general:
  log_level: debug
network:
  id: "ANSA-CORP-01"
  domain: "corp.ansanet.local"
  base_ip: "192.168.1"
  generation_rules:
    hosts_min: 10
    hosts_max: 20
    host_types:
      servers_min: 2
      servers_max: 4
      infra_min: 1
      infra_max: 3
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.network.base_octets().unwrap(), [192, 168, 1]);
        assert_eq!(config.network.generation_rules.hosts_max, 20);
        assert_eq!(config.network.generation_rules.host_types.infra_max, 3);
        assert!(config.network.generation_rules.validate().is_ok());
    }

    #[test]
    fn test_general_section_is_optional() {
        let yaml = r#"
network:
  id: "net"
  domain: "net.local"
  base_ip: "10.0.0"
  generation_rules:
    hosts_min: 5
    hosts_max: 5
    host_types: {servers_min: 1, servers_max: 1, infra_min: 1, infra_max: 2}
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.general.is_none());
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_base_ip_validation() {
        let mut network = NetworkConfig {
            id: "net".to_string(),
            domain: "net.local".to_string(),
            base_ip: "192.168.1".to_string(),
            generation_rules: rules((5, 5), (1, 1), (1, 2)),
        };
        assert!(network.validate().is_ok());

        network.base_ip = "192.168.1.0".to_string();
        assert!(network.validate().unwrap_err().to_string().contains("three octets"));

        network.base_ip = "192.300.1".to_string();
        assert!(network.validate().unwrap_err().to_string().contains("invalid octet"));

        network.base_ip = "10.0.0".to_string();
        network.id = "  ".to_string();
        assert!(network.validate().unwrap_err().to_string().contains("id cannot be empty"));
    }

    #[test]
    fn test_rule_validation() {
        assert!(rules((5, 5), (1, 1), (1, 2)).validate().is_ok());

        assert_eq!(
            rules((6, 5), (1, 1), (1, 2)).validate(),
            Err(RuleError::HostRange { min: 6, max: 5 })
        );
        assert_eq!(
            rules((10, 20), (3, 2), (1, 2)).validate(),
            Err(RuleError::ServerRange { min: 3, max: 2 })
        );
        // infra bounds must be strictly ordered
        assert_eq!(
            rules((10, 20), (1, 2), (2, 2)).validate(),
            Err(RuleError::InfraRange { min: 2, max: 2 })
        );
        assert_eq!(
            rules((5, 10), (1, 2), (1, 3)).validate(),
            Err(RuleError::CategoryOverflow { servers_max: 2, infra_max: 3, hosts_min: 5 })
        );
        // the category sum must not wrap around
        assert_eq!(
            rules((5, 5), (0, usize::MAX), (1, 2)).validate(),
            Err(RuleError::CategoryOverflow { servers_max: usize::MAX, infra_max: 2, hosts_min: 5 })
        );
    }
}
