use anyhow::Context;
use sqlx::postgres::PgConnectOptions;

const DEFAULT_GATEWAY_PORT: u16 = 3000;
const DEFAULT_INVENTORY_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: "0.0.0.0".to_string(),
            port: parse_port(lookup("APP_PORT"), DEFAULT_GATEWAY_PORT)
                .context("APP_PORT must be a valid port number")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub database: PgConnectOptions,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl InventoryConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `DATABASE_URL` takes precedence; otherwise the connection is built from
    /// the `INVENTORY_DB_*` parts, which are passed through unencoded.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database = match lookup("DATABASE_URL") {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL must be a valid Postgres URL")?,
            None => {
                let user = lookup("INVENTORY_DB_USER")
                    .context("DATABASE_URL or INVENTORY_DB_USER must be set")?;
                let password = lookup("INVENTORY_DB_PASSWORD")
                    .context("INVENTORY_DB_PASSWORD must be set")?;
                let name = lookup("INVENTORY_DB_NAME").context("INVENTORY_DB_NAME must be set")?;
                let db_host =
                    lookup("INVENTORY_DB_HOST").unwrap_or_else(|| "localhost".to_string());
                let db_port = parse_port(lookup("INVENTORY_DB_PORT"), 5432)
                    .context("INVENTORY_DB_PORT must be a valid port number")?;
                PgConnectOptions::new()
                    .username(&user)
                    .password(&password)
                    .host(&db_host)
                    .port(db_port)
                    .database(&name)
            }
        };

        Ok(Self {
            database,
            host: lookup("INVENTORY_APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_port(lookup("INVENTORY_APP_PORT"), DEFAULT_INVENTORY_PORT)
                .context("INVENTORY_APP_PORT must be a valid port number")?,
            max_connections: 5,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>, default: u16) -> anyhow::Result<u16> {
    match raw {
        Some(value) => Ok(value.trim().parse()?),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── Gateway ────────────────────────────────────────────────────────────────

    #[test]
    fn gateway_defaults_to_port_3000() {
        let cfg = GatewayConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn gateway_uses_app_port() {
        let cfg = GatewayConfig::from_lookup(env(&[("APP_PORT", "8081")])).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn gateway_rejects_garbage_port() {
        let err = GatewayConfig::from_lookup(env(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }

    // ── Inventory ──────────────────────────────────────────────────────────────

    #[test]
    fn inventory_prefers_database_url() {
        let cfg = InventoryConfig::from_lookup(env(&[
            ("DATABASE_URL", "postgres://a:b@db:5432/movies"),
            ("INVENTORY_DB_USER", "ignored"),
        ]))
        .unwrap();
        assert_eq!(cfg.database.get_host(), "db");
        assert_eq!(cfg.database.get_username(), "a");
        assert_eq!(cfg.database.get_database(), Some("movies"));
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn inventory_builds_connection_from_parts() {
        let cfg = InventoryConfig::from_lookup(env(&[
            ("INVENTORY_DB_USER", "inv"),
            ("INVENTORY_DB_PASSWORD", "pw"),
            ("INVENTORY_DB_NAME", "movies"),
            ("INVENTORY_DB_HOST", "inventory-db"),
            ("INVENTORY_APP_PORT", "8090"),
        ]))
        .unwrap();
        assert_eq!(cfg.database.get_host(), "inventory-db");
        assert_eq!(cfg.database.get_port(), 5432);
        assert_eq!(cfg.database.get_username(), "inv");
        assert_eq!(cfg.database.get_database(), Some("movies"));
        assert_eq!(cfg.port, 8090);
    }

    #[test]
    fn inventory_password_with_reserved_chars_keeps_host_and_db() {
        let cfg = InventoryConfig::from_lookup(env(&[
            ("INVENTORY_DB_USER", "inv@corp"),
            ("INVENTORY_DB_PASSWORD", "p@ss/w#rd:?x"),
            ("INVENTORY_DB_NAME", "movies"),
            ("INVENTORY_DB_HOST", "inventory-db"),
            ("INVENTORY_DB_PORT", "6543"),
        ]))
        .unwrap();
        assert_eq!(cfg.database.get_host(), "inventory-db");
        assert_eq!(cfg.database.get_port(), 6543);
        assert_eq!(cfg.database.get_username(), "inv@corp");
        assert_eq!(cfg.database.get_database(), Some("movies"));
    }

    #[test]
    fn inventory_rejects_malformed_database_url() {
        let err = InventoryConfig::from_lookup(env(&[("DATABASE_URL", "not a url")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn inventory_without_database_settings_fails() {
        let err = InventoryConfig::from_lookup(env(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn inventory_missing_password_fails() {
        let err = InventoryConfig::from_lookup(env(&[
            ("INVENTORY_DB_USER", "inv"),
            ("INVENTORY_DB_NAME", "movies"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("INVENTORY_DB_PASSWORD"));
    }
}
