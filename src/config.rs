use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    /// Milisegundos antes de avisar que el SDK de Google Maps sigue cargando
    pub sdk_load_warning_ms: u32,
    pub map_config: MapConfig,
    pub ui_config: UIConfig,
    pub google_maps_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            enable_logging: true,
            sdk_load_warning_ms: 10_000,
            map_config: MapConfig::default(),
            ui_config: UIConfig::default(),
            google_maps_api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 12.9141,
            default_center_lng: 74.856,
            default_zoom: 15.0,
        }
    }
}

impl MapConfig {
    pub fn default_center(&self) -> Coordinates {
        Coordinates::new(self.default_center_lat, self.default_center_lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    pub map_width: String,
    pub map_height: String,
    pub map_border_radius_px: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            map_width: "100%".to_string(),
            map_height: "80vh".to_string(),
            map_border_radius_px: 10,
        }
    }
}

impl UIConfig {
    /// Estilo inline del contenedor del mapa
    pub fn container_style(&self) -> String {
        format!(
            "width: {}; height: {}; border-radius: {}px;",
            self.map_width, self.map_height, self.map_border_radius_px
        )
    }
}

/// Valor de una variable de entorno parseado, o el valor por defecto
fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("BACKEND_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("SDK_LOAD_WARNING_MS"),
            [
                option_env!("DEFAULT_MAP_CENTER_LAT"),
                option_env!("DEFAULT_MAP_CENTER_LNG"),
                option_env!("DEFAULT_MAP_ZOOM"),
            ],
            option_env!("GOOGLE_MAPS_API_KEY"),
        )
    }

    /// Los valores por defecto salen siempre de `Default`
    fn from_vars(
        backend_url: Option<&str>,
        enable_logging: Option<&str>,
        sdk_load_warning_ms: Option<&str>,
        [center_lat, center_lng, zoom]: [Option<&str>; 3],
        google_maps_api_key: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url.map(str::to_string).unwrap_or(defaults.backend_url),
            enable_logging: parse_or(enable_logging, defaults.enable_logging),
            sdk_load_warning_ms: parse_or(sdk_load_warning_ms, defaults.sdk_load_warning_ms),
            map_config: MapConfig {
                default_center_lat: parse_or(center_lat, defaults.map_config.default_center_lat),
                default_center_lng: parse_or(center_lng, defaults.map_config.default_center_lng),
                default_zoom: parse_or(zoom, defaults.map_config.default_zoom),
            },
            ui_config: defaults.ui_config,
            // Sin clave se pasa cadena vacía y el SDK decide cómo fallar
            google_maps_api_key: google_maps_api_key
                .map(str::to_string)
                .unwrap_or(defaults.google_maps_api_key),
        }
    }

    /// URL del backend sin barra final
    pub fn backend_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn google_maps_api_key(&self) -> &str {
        &self.google_maps_api_key
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
    fn default_map_config_points_at_mangaluru() {
        let config = MapConfig::default();
        assert_eq!(config.default_center(), Coordinates::new(12.9141, 74.856));
        assert_eq!(config.default_zoom, 15.0);
    }

    #[test]
    fn container_style_matches_ui_config() {
        let style = UIConfig::default().container_style();
        assert_eq!(style, "width: 100%; height: 80vh; border-radius: 10px;");
    }

    #[test]
    fn backend_url_drops_trailing_slash() {
        let config = AppConfig {
            backend_url: "https://api.example.org/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "https://api.example.org");
    }

    #[test]
    fn unset_vars_fall_back_to_defaults() {
        let config = AppConfig::from_vars(None, None, None, [None, None, None], None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn unparsable_vars_fall_back_to_defaults() {
        let config = AppConfig::from_vars(
            Some("https://api.example.org"),
            Some("maybe"),
            Some("soon"),
            [Some("12.95"), Some("east"), Some(" 13 ")],
            Some("abc123"),
        );
        assert_eq!(config.backend_url(), "https://api.example.org");
        assert!(config.enable_logging);
        assert_eq!(config.sdk_load_warning_ms, 10_000);
        assert_eq!(config.map_config.default_center_lat, 12.95);
        assert_eq!(config.map_config.default_center_lng, 74.856);
        assert_eq!(config.map_config.default_zoom, 13.0);
        assert_eq!(config.google_maps_api_key(), "abc123");
    }

    #[test]
    fn missing_api_key_is_empty_string() {
        let config = AppConfig::default();
        assert_eq!(config.google_maps_api_key(), "");
    }
}
