use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chirp_common::Error;

use crate::loader::ConfigLoader;

/// Connection settings for a Chirp server: where it listens and the cookie
/// it expects. Immutable once built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChirpConfig {
    host: String,
    port: i32,
    cookie: String,
}

impl ChirpConfig {
    pub fn new(host: impl Into<String>, port: i32, cookie: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            cookie: cookie.into(),
        }
    }

    /// The name of the server host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port on which the server is listening. Not range checked.
    pub fn port(&self) -> i32 {
        self.port
    }

    /// The cookie expected by the server.
    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    /// `host:port`, ready for a connector to resolve.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for ChirpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChirpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cookie", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for ChirpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} <redacted>", self.host, self.port)
    }
}

impl FromStr for ChirpConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigLoader::parse_line(s)
    }
}
