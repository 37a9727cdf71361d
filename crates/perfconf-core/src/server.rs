//! Server runtime parameters and derived URLs

use crate::env::EnvSource;
use crate::types::ServerEnvironment;

/// Resolver for the server namespace.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    env: EnvSource,
}

impl ServerConfig {
    pub fn new(env: EnvSource) -> Self {
        Self { env }
    }

    /// Basic-auth credential in `user:password` form. `AUTH`, no default.
    pub fn auth(&self) -> Option<String> {
        self.env.get("AUTH").map(str::to_string)
    }

    /// Server host. `GOCD_HOST`, default `127.0.0.1`.
    pub fn host(&self) -> String {
        self.env.string_or("GOCD_HOST", "127.0.0.1")
    }

    /// HTTP port. `GO_SERVER_PORT`, default 8153.
    pub fn port(&self) -> u16 {
        self.env.int_or("GO_SERVER_PORT", 8153)
    }

    /// HTTPS port. `GO_SERVER_SSL_PORT`, default 8154.
    pub fn secure_port(&self) -> u16 {
        self.env.int_or("GO_SERVER_SSL_PORT", 8154)
    }

    /// `http://[auth@]host:port`.
    ///
    /// The credential is embedded verbatim, never percent-encoded; the
    /// downstream tooling expects the raw `user:password` form.
    pub fn base_url(&self) -> String {
        let credential = match self.auth() {
            Some(auth) => format!("{auth}@"),
            None => String::new(),
        };
        format!("http://{credential}{}:{}", self.host(), self.port())
    }

    /// The server context path under [`ServerConfig::base_url`].
    pub fn url(&self) -> String {
        format!("{}/go", self.base_url())
    }

    /// Externally-reachable HTTPS URL.
    /// `PERF_SERVER_SSH_URL`, default `https://localhost:8154`.
    pub fn secure_url(&self) -> String {
        self.env
            .string_or("PERF_SERVER_SSH_URL", "https://localhost:8154")
    }

    /// Launch environment for the server process. Each field resolves from
    /// its own variable; the ports mirror [`ServerConfig::port`] and
    /// [`ServerConfig::secure_port`].
    pub fn environment(&self) -> ServerEnvironment {
        ServerEnvironment {
            system_properties: self.env.string_or("GO_SERVER_SYSTEM_PROPERTIES", ""),
            port: self.port().to_string(),
            ssl_port: self.secure_port().to_string(),
            mem: self.env.string_or("SERVER_MEM", "6g"),
            max_mem: self.env.string_or("SERVER_MAX_MEM", "8g"),
        }
    }
}
