use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_web_port")]
    pub web_port: u16,

    /// Upper bound on in-flight query tasks. Unset means one task per
    /// datagram with no limit.
    #[serde(default)]
    pub max_concurrent_queries: Option<usize>,
}

impl ServerConfig {
    pub fn dns_socket_addr(&self) -> String {
        join_host_port(&self.bind_address, self.dns_port)
    }

    pub fn web_socket_addr(&self) -> String {
        join_host_port(&self.bind_address, self.web_port)
    }
}

fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            web_port: default_web_port(),
            max_concurrent_queries: None,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_web_port() -> u16 {
    8080
}
