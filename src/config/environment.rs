//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor HTTP.

use super::{parse_var, ConfigError};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Crear el esquema y sembrar datos iniciales al arrancar
    pub seed_on_startup: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5001,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            seed_on_startup: true,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Leer la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            seed_on_startup: parse_var(&lookup, "SEED_ON_STARTUP", defaults.seed_on_startup)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 5001);
        assert!(config.is_development());
        assert!(config.seed_on_startup);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.server_url(), "0.0.0.0:5001");
    }

    #[test]
    fn test_cors_origins_split() {
        let config = EnvironmentConfig::from_lookup(|name| match name {
            "CORS_ORIGINS" => Some("http://localhost:5173, https://admin.example.com,".to_string()),
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173".to_string(), "https://admin.example.com".to_string()]
        );
        assert!(!config.is_development());
    }

    #[test]
    fn test_invalid_port() {
        let result = EnvironmentConfig::from_lookup(|name| (name == "PORT").then(|| "cinco mil".to_string()));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid { name: "PORT", value: "cinco mil".to_string() }
        );
    }
}
