//! Shared value types produced by the resolvers

use serde::Serialize;

/// Interval/repetition pair driving a periodic action, e.g. "commit every
/// 5 seconds, 30 times".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cadence {
    /// Seconds between repetitions.
    pub interval: u64,
    /// Number of repetitions.
    pub times: u64,
}

/// Relative weighting of git versus TFS materials across the generated
/// pipelines. The two fields default independently; nothing forces them to
/// sum to 100, and callers that care must check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialsRatio {
    pub git: u64,
    pub tfs: u64,
}

/// Variables handed verbatim to the server launch step.
///
/// The resolver only assembles this map; starting the server is the install
/// tooling's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerEnvironment {
    /// Extra JVM system properties, empty by default.
    pub system_properties: String,
    /// HTTP port, rendered as a string for the launch environment.
    pub port: String,
    /// HTTPS port, rendered as a string for the launch environment.
    pub ssl_port: String,
    /// Initial heap, e.g. `6g`.
    pub mem: String,
    /// Maximum heap, e.g. `8g`.
    pub max_mem: String,
}

impl ServerEnvironment {
    /// The five launch variables as `(name, value)` pairs.
    pub fn to_env_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("GO_SERVER_SYSTEM_PROPERTIES", self.system_properties.clone()),
            ("GO_SERVER_PORT", self.port.clone()),
            ("GO_SERVER_SSL_PORT", self.ssl_port.clone()),
            ("SERVER_MEM", self.mem.clone()),
            ("SERVER_MAX_MEM", self.max_mem.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_pairs_cover_the_five_launch_variables() {
        let environment = ServerEnvironment {
            system_properties: String::new(),
            port: "8153".to_string(),
            ssl_port: "8154".to_string(),
            mem: "6g".to_string(),
            max_mem: "8g".to_string(),
        };

        let pairs = environment.to_env_pairs();
        let names: Vec<&str> = pairs.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "GO_SERVER_SYSTEM_PROPERTIES",
                "GO_SERVER_PORT",
                "GO_SERVER_SSL_PORT",
                "SERVER_MEM",
                "SERVER_MAX_MEM",
            ]
        );
        assert_eq!(pairs[1].1, "8153");
    }

    #[test]
    fn test_cadence_serializes_named_fields() {
        let cadence = Cadence { interval: 20, times: 30 };
        let json = serde_json::to_value(cadence).unwrap();
        assert_eq!(json["interval"], 20);
        assert_eq!(json["times"], 30);
    }
}
