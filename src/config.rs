use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Id del elemento host donde se monta la app
    pub mount_element_id: String,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            mount_element_id: "app".to_string(),
            app_title: "Entries".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("MOUNT_ELEMENT_ID"),
            option_env!("APP_TITLE"),
        )
    }

    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        mount_element_id: Option<&str>,
        app_title: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let mut config = Self {
            environment: environment.map(str::to_string).unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: defaults.log_level,
            mount_element_id: mount_element_id
                .filter(|id| !id.trim().is_empty())
                .map(|id| id.trim().trim_start_matches('#').to_string())
                .unwrap_or(defaults.mount_element_id),
            app_title: app_title.map(str::to_string).unwrap_or(defaults.app_title),
        };

        // En producción, sin LOG_LEVEL explícito, solo warnings y errores
        if let Some(level) = log_level {
            config.log_level = level.to_string();
        } else if config.is_production() {
            config.log_level = "warn".to_string();
        }
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config.mount_element_id, "app");
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("production"),
            Some("false"),
            Some("debug"),
            Some("#root"),
            Some("History"),
        );
        assert!(config.is_production());
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.mount_element_id, "root");
        assert_eq!(config.app_title, "History");
    }

    #[test]
    fn test_production_defaults_to_warn_level() {
        let config = AppConfig::from_values(Some("production"), None, None, None, None);
        assert_eq!(config.log_level(), log::Level::Warn);

        let explicit = AppConfig::from_values(Some("production"), None, Some("trace"), None, None);
        assert_eq!(explicit.log_level(), log::Level::Trace);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(None, Some("yes"), Some("loud"), Some("  "), None);
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.mount_element_id, "app");
    }
}
