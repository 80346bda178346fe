use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_listen_addr() -> String {
    "0.0.0.0:3141".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("../client")
}

fn default_enable_cors() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Client bundle served for every non-API route
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            static_dir: default_static_dir(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let listen_addr = env::var("ANAGRAM_LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let static_dir = env::var("ANAGRAM_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());

        let enable_cors = env_flag("ANAGRAM_ENABLE_CORS").unwrap_or_else(default_enable_cors);

        Self {
            listen_addr,
            static_dir,
            enable_cors,
        }
    }
}
