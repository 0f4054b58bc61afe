use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub layout: LayoutConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Соглашения показа зала
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Ширина синтетического прохода слева (в клетках).
    pub gap: usize,
    /// Нумеровать ли места справа налево по умолчанию.
    pub reverse_numbering: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_layout=debug,tower_http=debug".to_string()),
            },
            layout: LayoutConfig {
                gap: env::var("LAYOUT_GAP")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .expect("LAYOUT_GAP must be a valid number"),
                reverse_numbering: env::var("LAYOUT_REVERSE_NUMBERING")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("LAYOUT_REVERSE_NUMBERING must be true or false"),
            },
        }
    }
}
