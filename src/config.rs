//! Command line configuration for the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};

/// Where categories are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// A SQLite database file.
    Sqlite,
    /// A map in memory that is lost when the server stops.
    Memory,
}

/// The REST API server for managing categories.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Where to store categories.
    #[arg(long, value_enum, default_value_t = BackendKind::Sqlite)]
    pub backend: BackendKind,

    /// File path to the application SQLite database.
    #[arg(long, default_value = "categories.db")]
    pub db_path: String,

    /// The address to serve the API from.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// File path to write debug logs to.
    #[arg(long)]
    pub log_path: Option<String>,
}

impl ServerConfig {
    /// The socket address the server should listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Sqlite,
            db_path: "categories.db".to_owned(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            log_path: None,
        }
    }
}
