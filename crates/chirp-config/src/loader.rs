use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use chirp_common::{Error, Result};
use tracing::{debug, info, warn};

use crate::model::ChirpConfig;

/// Longest first line accepted, newline excluded.
pub const MAX_LINE_LEN: usize = 64 * 1024;

const SEPARATORS: [char; 5] = [' ', '\t', '\n', '\r', '\x0c'];

/// Reads a Chirp client configuration file.
///
/// Only the first line is consulted. It must hold the host, the port and the
/// cookie, separated by any run of spaces or tabs:
///
/// ```text
/// chirp.example.org 9618 s3cr3t-token
/// ```
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ChirpConfig> {
        Self::load_file(&self.path)
    }

    /// Open `path`, parse its first line and close it again.
    pub fn load_file(path: impl AsRef<Path>) -> Result<ChirpConfig> {
        let path = path.as_ref();
        info!("loading chirp config from {}", path.display());

        let file = File::open(path)?;
        let config = Self::from_reader(BufReader::new(file)).inspect_err(|e| {
            if e.is_format() {
                warn!("invalid chirp config {}: {e}", path.display());
            }
        })?;

        debug!(host = config.host(), port = config.port(), "chirp config loaded");
        Ok(config)
    }

    /// Parse the first line of `reader`. Bytes that are not UTF-8 are
    /// replaced rather than rejected; the cookie is opaque.
    pub fn from_reader(reader: impl BufRead) -> Result<ChirpConfig> {
        let mut buf = Vec::new();
        let limit = MAX_LINE_LEN as u64 + 1;
        if reader.take(limit).read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::Format("config file is empty".to_string()));
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.len() > MAX_LINE_LEN {
            return Err(Error::Format(format!(
                "first line longer than {MAX_LINE_LEN} bytes"
            )));
        }
        Self::parse_line(&String::from_utf8_lossy(&buf))
    }

    /// Split `line` on spaces, tabs, line breaks and form feeds and take
    /// host, port and cookie in order. Extra tokens are ignored.
    pub fn parse_line(line: &str) -> Result<ChirpConfig> {
        let mut tokens = line.split(SEPARATORS).filter(|t| !t.is_empty());

        let host = tokens
            .next()
            .ok_or_else(|| Error::Format("missing host".to_string()))?;
        let port_str = tokens
            .next()
            .ok_or_else(|| Error::Format("missing port".to_string()))?;
        let port = port_str
            .parse::<i32>()
            .map_err(|e| Error::Format(format!("invalid port {port_str:?}: {e}")))?;
        let cookie = tokens
            .next()
            .ok_or_else(|| Error::Format("missing cookie".to_string()))?;

        Ok(ChirpConfig::new(host, port, cookie))
    }
}
