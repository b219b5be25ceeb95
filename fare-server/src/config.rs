//! Server configuration and fixed option lists.

use std::net::SocketAddr;

/// The selectable bus types for the by-type calculator. The backend
/// validates against the same list; keep them in sync.
pub const BUS_TYPES: &[&str] = &[
    "台北市一般公車",
    "新北市一般公車",
    "幹線公車",
    "快速公車",
    "市民小巴",
    "內科專車",
    "跳蛙公車",
];

/// Fare types the backend prices, as (machine key, display label).
pub const FARE_TYPES: &[(&str, &str)] = &[
    ("full_fare", "全票"),
    ("student_fare", "學生票"),
    ("half_fare", "半票"),
];

/// Whether a fare type key is one the backend knows.
pub fn is_known_fare_type(key: &str) -> bool {
    FARE_TYPES.iter().any(|(k, _)| *k == key)
}

/// Whether a bus type is one the backend knows.
pub fn is_known_bus_type(bus_type: &str) -> bool {
    BUS_TYPES.contains(&bus_type)
}

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the remote fare backend.
    pub backend_url: Option<String>,

    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: String,
}

impl ServerConfig {
    /// Read configuration from `FARE_BACKEND_URL`, `BIND_ADDR` and
    /// `STATIC_DIR`, falling back to defaults for anything unset or
    /// unparseable.
    pub fn from_env() -> Self {
        let backend_url = std::env::var("FARE_BACKEND_URL").ok();

        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "fare-server/static".to_string());

        Self {
            backend_url,
            bind_addr,
            static_dir,
        }
    }
}
