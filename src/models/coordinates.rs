use serde::{Deserialize, Deserializer, Serialize};

/// Punto geográfico en el formato que espera el SDK (`{ lat, lng }`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_within_range(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Coordenadas tal como llegan del backend; cualquiera de los dos campos puede faltar
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportCoordinates {
    #[serde(default, deserialize_with = "deserialize_component")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_component")]
    pub longitude: Option<f64>,
}

/// Componente de coordenada tolerante: número o cadena numérica.
/// Cualquier otro valor queda en `None` en vez de romper la decodificación del reporte.
fn deserialize_component<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

impl ReportCoordinates {
    /// Convierte a `Coordinates` si el par es utilizable.
    /// Un componente en 0 cuenta como ausente (el backend usa 0 como "sin valor").
    pub fn resolve(&self) -> Option<Coordinates> {
        let lat = self.latitude.filter(|v| *v != 0.0)?;
        let lng = self.longitude.filter(|v| *v != 0.0)?;
        let coords = Coordinates::new(lat, lng);
        coords.is_within_range().then_some(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(latitude: Option<f64>, longitude: Option<f64>) -> ReportCoordinates {
        ReportCoordinates { latitude, longitude }
    }

    #[test]
    fn resolves_complete_pair() {
        assert_eq!(
            raw(Some(12.9), Some(74.8)).resolve(),
            Some(Coordinates::new(12.9, 74.8))
        );
    }

    #[test]
    fn missing_component_does_not_resolve() {
        assert_eq!(raw(None, Some(74.8)).resolve(), None);
        assert_eq!(raw(Some(12.9), None).resolve(), None);
        assert_eq!(raw(None, None).resolve(), None);
    }

    #[test]
    fn zero_component_counts_as_missing() {
        assert_eq!(raw(Some(0.0), Some(74.8)).resolve(), None);
        assert_eq!(raw(Some(12.9), Some(0.0)).resolve(), None);
    }

    #[test]
    fn decodes_numeric_strings_and_drops_garbage() {
        let parsed: ReportCoordinates =
            serde_json::from_str(r#"{ "latitude": "12.91", "longitude": 74.85 }"#).unwrap();
        assert_eq!(parsed.resolve(), Some(Coordinates::new(12.91, 74.85)));

        let garbage: ReportCoordinates =
            serde_json::from_str(r#"{ "latitude": "north", "longitude": [74.85] }"#).unwrap();
        assert_eq!(garbage, ReportCoordinates::default());
        assert_eq!(garbage.resolve(), None);
    }

    #[test]
    fn out_of_range_or_nan_is_rejected() {
        assert_eq!(raw(Some(91.0), Some(74.8)).resolve(), None);
        assert_eq!(raw(Some(12.9), Some(-180.5)).resolve(), None);
        assert_eq!(raw(Some(f64::NAN), Some(74.8)).resolve(), None);
    }
}
