use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Empty means permissive CORS
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    pub init_schema: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub header: String,
    pub marker: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source: environment preset first, then overrides
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(lookup)
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Server overrides
        if let Some(v) = lookup("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Some(v) = lookup("CORS_ORIGINS") {
            self.server.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Database overrides
        if let Some(v) = lookup("DB_HOST") {
            self.database.host = v;
        }
        if let Some(v) = lookup("DB_PORT") {
            self.database.port = v.parse().unwrap_or(self.database.port);
        }
        if let Some(v) = lookup("DB_USER") {
            self.database.user = v;
        }
        if let Some(v) = lookup("DB_PASSWORD") {
            self.database.password = v;
        }
        if let Some(v) = lookup("DB_NAME") {
            self.database.name = v;
        }
        if let Some(v) = lookup("DB_POOL_SIZE") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Some(v) = lookup("DB_CONNECT_TIMEOUT") {
            self.database.connect_timeout_secs = v.parse().unwrap_or(self.database.connect_timeout_secs);
        }
        if let Some(v) = lookup("DB_INIT_SCHEMA") {
            self.database.init_schema = v.parse().unwrap_or(self.database.init_schema);
        }

        // Admin gate overrides
        if let Some(v) = lookup("ADMIN_HEADER") {
            self.admin.header = v.to_ascii_lowercase();
        }
        if let Some(v) = lookup("ADMIN_MARKER") {
            self.admin.marker = v;
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 5000,
                cors_origins: vec![],
            },
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                user: "postgres".to_string(),
                password: String::new(),
                name: "eco_farm_manager".to_string(),
                max_connections: 10,
                connect_timeout_secs: 20,
                init_schema: false,
            },
            admin: AdminConfig::default(),
        }
    }

    fn staging() -> Self {
        let mut config = Self::development();
        config.environment = Environment::Staging;
        config.server.cors_origins = vec!["https://staging.ecofarm.example".to_string()];
        config.database.connect_timeout_secs = 10;
        config
    }

    fn production() -> Self {
        let mut config = Self::development();
        config.environment = Environment::Production;
        config.server.cors_origins = vec!["https://ecofarm.example".to_string()];
        config.database.max_connections = 20;
        config.database.connect_timeout_secs = 5;
        config
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            header: "x-admin-auth".to_string(),
            marker: "true".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.name, "eco_farm_manager");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.connect_timeout_secs, 20);
        assert_eq!(config.admin.header, "x-admin-auth");
        assert_eq!(config.admin.marker, "true");
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::from_lookup(lookup(&[("APP_ENV", "production")]));
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.database.max_connections, 20);
        assert!(!config.server.cors_origins.is_empty());
    }

    #[test]
    fn env_overrides_apply_after_preset() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_ENV", "staging"),
            ("PORT", "8080"),
            ("DB_HOST", "db"),
            ("DB_POOL_SIZE", "4"),
            ("DB_INIT_SCHEMA", "true"),
            ("ADMIN_HEADER", "X-Farm-Admin"),
            ("CORS_ORIGINS", "http://a.test, http://b.test"),
        ]));
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.max_connections, 4);
        assert!(config.database.init_schema);
        assert_eq!(config.admin.header, "x-farm-admin");
        assert_eq!(config.server.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn unparsable_numbers_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "eighty"), ("DB_POOL_SIZE", "-1")]));
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.max_connections, 10);
    }
}
