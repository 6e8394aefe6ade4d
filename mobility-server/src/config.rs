use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// Travel-time planning service over a node/edge JSON dataset
#[derive(Debug, Parser)]
#[command(name = "mobility-server", version, about)]
pub struct Cli {
    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Address to listen on
    #[arg(long)]
    pub listen: Option<SocketAddr>,
    /// Directory holding nodes.json and edges.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Directory with static map assets, served under /map
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Resolved configuration: defaults, then config file, then CLI flags
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub data_dir: PathBuf,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
            data_dir: PathBuf::from("data"),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Merge the optional config file and CLI overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = match &cli.config {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        if let Some(listen) = cli.listen {
            config.listen = listen;
        }
        if let Some(data_dir) = &cli.data_dir {
            config.data_dir = data_dir.clone();
        }
        if cli.static_dir.is_some() {
            config.static_dir = cli.static_dir.clone();
        }
        Ok(config)
    }

    pub fn nodes_path(&self) -> PathBuf {
        self.data_dir.join("nodes.json")
    }

    pub fn edges_path(&self) -> PathBuf {
        self.data_dir.join("edges.json")
    }
}
