//! Server configuration structures and loaders.
use std::env;

use crate::core::constants::{DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliAction {
    Serve(ServerConfig),
    Help,
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_HOST` - Bind address (default: 127.0.0.1)
    /// - `ARENA_PORT` - Bind port (default: 5000)
    /// - `ARENA_MAX_BODY_BYTES` - Largest accepted request body (default: 65536)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("ARENA_HOST") {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }
        if let Some(port) = read_env::<u16>("ARENA_PORT") {
            config.port = port;
        }
        if let Some(limit) = read_env::<usize>("ARENA_MAX_BODY_BYTES") {
            config.max_body_bytes = limit.max(1);
        }

        config
    }

    /// Apply `--port=N` / `--host=ADDR` flags on top of this config.
    ///
    /// `args` excludes the program name.
    pub fn apply_args(mut self, args: &[String]) -> Result<CliAction, String> {
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(CliAction::Help),
                s if s.starts_with("--port=") => {
                    let raw = &s["--port=".len()..];
                    self.port = raw
                        .parse()
                        .map_err(|_| format!("Invalid port number: {}", raw))?;
                }
                s if s.starts_with("--host=") => {
                    let raw = &s["--host=".len()..];
                    if raw.is_empty() {
                        return Err("Host must not be empty".to_string());
                    }
                    self.host = raw.to_string();
                }
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }
        Ok(CliAction::Serve(self))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_keeps_config() {
        let action = ServerConfig::default().apply_args(&[]).unwrap();
        assert_eq!(action, CliAction::Serve(ServerConfig::default()));
    }

    #[test]
    fn test_port_and_host_flags() {
        let action = ServerConfig::default()
            .apply_args(&args(&["--port=8080", "--host=0.0.0.0"]))
            .unwrap();
        let CliAction::Serve(config) = action else {
            panic!("expected serve");
        };
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_bad_flags() {
        assert!(ServerConfig::default()
            .apply_args(&args(&["--port=http"]))
            .is_err());
        assert!(ServerConfig::default()
            .apply_args(&args(&["--serve"]))
            .is_err());
        assert_eq!(
            ServerConfig::default().apply_args(&args(&["--help"])),
            Ok(CliAction::Help)
        );
    }
}
