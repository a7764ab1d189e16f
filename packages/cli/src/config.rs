use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use tasklist_config::{
    PORT, TASKLIST_CORS_ORIGIN, TASKLIST_DATABASE_PATH, TASKLIST_HOST, TASKLIST_PORT,
    TASKLIST_STATIC_DIR,
};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
    /// CORS is disabled unless an origin is configured
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(TASKLIST_PORT).or_else(|_| env::var(PORT)) {
            Ok(port_str) => port_str.trim().parse::<u16>()?,
            Err(_) => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host = match env::var(TASKLIST_HOST) {
            Ok(host_str) => host_str
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host_str))?,
            Err(_) => DEFAULT_HOST,
        };

        let database_path = env::var(TASKLIST_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| tasklist_core::database_file());

        let static_dir = env::var(TASKLIST_STATIC_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let cors_origin = env::var(TASKLIST_CORS_ORIGIN)
            .ok()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty());

        Ok(Config {
            host,
            port,
            database_path,
            static_dir,
            cors_origin,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
