use anyhow::{Context, Result};
use std::{env, path::PathBuf};

/// Where the host binds and which directories it serves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output (`index.html` + wasm bundle)
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            dist_dir: PathBuf::from("dist"),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl ServerConfig {
    /// Reads `.env` (if any) and then the `SITE_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(host) = lookup("SITE_HOST") {
            cfg.host = host;
        }
        if let Some(port) = lookup("SITE_PORT") {
            cfg.port = port
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {port:?}"))?;
        }
        if let Some(dir) = lookup("SITE_DIST_DIR") {
            cfg.dist_dir = dir.into();
        }
        if let Some(dir) = lookup("SITE_ASSETS_DIR") {
            cfg.assets_dir = dir.into();
        }

        Ok(cfg)
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn env_overrides_every_field() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST_DIR", "/srv/ocare"),
            ("SITE_ASSETS_DIR", "/srv/assets"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/ocare"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("SITE_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
