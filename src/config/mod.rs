use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Credential for the mapping front end; only its presence is reported.
    pub maps_api_key: Option<String>,
    /// Emulated processing time for disease data and route requests.
    pub data_latency: Duration,
    /// Emulated processing time for simulation requests.
    pub simulation_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            maps_api_key: None,
            data_latency: Duration::from_millis(500),
            simulation_latency: Duration::from_millis(800),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            maps_api_key: lookup("MAPS_API_KEY")
                .or_else(|| lookup("NEXT_PUBLIC_GOOGLE_MAPS_API_KEY"))
                .filter(|key| !key.trim().is_empty()),
            data_latency: parse_or(&lookup, "DATA_LATENCY_MS", 500u64).map(Duration::from_millis)?,
            simulation_latency: parse_or(&lookup, "SIMULATION_LATENCY_MS", 800u64)
                .map(Duration::from_millis)?,
        })
    }

    /// No artificial latency; used by tests.
    pub fn instant() -> Self {
        Self {
            data_latency: Duration::ZERO,
            simulation_latency: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} value: {:?}", key, raw)),
        None => Ok(default),
    }
}
