use crate::models::MapReport;
use crate::viewmodels::ViewportCommand;

/// Trait común para renderizadores de mapas
pub trait MapRenderer {
    /// Handle del marcador; al soltarlo el marcador desaparece del mapa
    type Marker;

    /// Aplicar centro/zoom o encuadre de bounds
    fn apply_viewport(&self, command: &ViewportCommand) -> Result<(), MapError>;

    /// Agregar el marcador de un reporte
    fn add_report_marker(&self, report: &MapReport) -> Result<Self::Marker, MapError>;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    ContainerMissing,
    InvalidCoordinates(i64),
    Serialization(String),
    Dom(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Google Maps SDK is not ready"),
            MapError::ContainerMissing => write!(f, "Map container element not found"),
            MapError::InvalidCoordinates(id) => write!(f, "Report {} has no usable coordinates", id),
            MapError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            MapError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(MapError::NotReady.to_string(), "Google Maps SDK is not ready");
        assert_eq!(
            MapError::InvalidCoordinates(42).to_string(),
            "Report 42 has no usable coordinates"
        );
    }
}
