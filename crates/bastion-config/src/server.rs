use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Path prefix under which all module routers are mounted
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
    #[serde(default)]
    pub body: BodyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            api_prefix: default_api_prefix(),
            health: HealthConfig::default(),
            cors: None,
            body: BodyConfig::default(),
        }
    }
}

/// Request body parsing limits
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_limit_bytes")]
    pub limit_bytes: usize,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            limit_bytes: default_limit_bytes(),
        }
    }
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_limit_bytes() -> usize {
    1024 * 1024
}
