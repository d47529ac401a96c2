use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Coordinates, ReportCoordinates};

/// Reporte de residuos pendiente de recogida (solo lectura en el frontend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub location: String,
    pub waste_type: String,
    pub amount: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_coordinates")]
    pub coordinates: Option<ReportCoordinates>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub verification_result: serde_json::Value,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub collector_id: Option<i64>,
}

/// Si `coordinates` no es un objeto válido el reporte se conserva sin coordenadas
fn deserialize_coordinates<'de, D>(deserializer: D) -> Result<Option<ReportCoordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

impl Report {
    /// Decodifica cada entrada por separado; las que no son un reporte se descartan con log
    pub fn decode_list(values: Vec<serde_json::Value>) -> Vec<Report> {
        let total = values.len();
        let reports: Vec<Report> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Report>(value) {
                Ok(report) => Some(report),
                Err(e) => {
                    log::error!("❌ Reporte #{} descartado: {}", index, e);
                    None
                }
            })
            .collect();
        if reports.len() < total {
            log::warn!("⚠️ {} de {} entradas no son reportes válidos", total - reports.len(), total);
        }
        reports
    }

    /// Coordenadas utilizables del reporte, si las tiene
    pub fn position(&self) -> Option<Coordinates> {
        self.coordinates.as_ref().and_then(ReportCoordinates::resolve)
    }

    /// Fecha de creación legible; si no se puede parsear se devuelve tal cual
    pub fn formatted_created_at(&self) -> String {
        const FORMAT: &str = "%d %b %Y, %H:%M";

        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return dt.format(FORMAT).to_string();
        }
        for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(&self.created_at, pattern) {
                return naive.format(FORMAT).to_string();
            }
        }
        self.created_at.clone()
    }
}

/// Reporte con sus coordenadas ya resueltas, listo para el mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MapReport {
    pub report: Report,
    pub position: Option<Coordinates>,
}

impl MapReport {
    pub fn id(&self) -> i64 {
        self.report.id
    }

    pub fn is_mappable(&self) -> bool {
        self.position.is_some()
    }
}

impl From<Report> for MapReport {
    fn from(report: Report) -> Self {
        let position = report.position();
        Self { report, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPORT: &str = r#"{
        "id": 7,
        "location": "Hampankatta, Mangaluru",
        "wasteType": "Plastic",
        "amount": "5 kg",
        "imageUrl": "data:image/png;base64,AAAA",
        "coordinates": { "latitude": 12.8698, "longitude": 74.8430 },
        "active": true,
        "verificationResult": { "confidence": 0.92, "wasteType": "Plastic" },
        "status": "pending",
        "createdAt": "2026-10-14T08:30:00.000Z",
        "collectorId": null
    }"#;

    #[test]
    fn decodes_backend_json() {
        let report: Report = serde_json::from_str(FULL_REPORT).unwrap();
        assert_eq!(report.id, 7);
        assert_eq!(report.waste_type, "Plastic");
        assert_eq!(report.collector_id, None);
        assert_eq!(report.verification_result["confidence"], 0.92);
        assert_eq!(report.position(), Some(Coordinates::new(12.8698, 74.8430)));
    }

    #[test]
    fn decodes_report_without_coordinates() {
        let json = r#"{
            "id": 3,
            "location": "Kadri",
            "wasteType": "Organic",
            "amount": "2 bags",
            "status": "pending",
            "createdAt": "2026-10-14 08:30:00"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.coordinates, None);
        assert_eq!(report.image_url, None);
        assert!(!report.active);
        assert_eq!(report.position(), None);
        assert!(!MapReport::from(report).is_mappable());
    }

    #[test]
    fn null_coordinate_component_is_not_mappable() {
        let json = FULL_REPORT.replace("\"latitude\": 12.8698", "\"latitude\": null");
        let report: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report.position(), None);
    }

    #[test]
    fn one_bad_entry_does_not_drop_the_others() {
        let body: Vec<serde_json::Value> = serde_json::from_str(r#"[
            { "id": 1, "location": "A", "wasteType": "Plastic", "amount": "1 kg",
              "coordinates": { "latitude": 12.90, "longitude": 74.80 },
              "status": "pending", "createdAt": "2026-10-14T08:30:00Z" },
            { "id": 2, "location": "B", "wasteType": "Glass", "amount": "2 kg",
              "coordinates": { "latitude": "north", "longitude": "east" },
              "status": "pending", "createdAt": "2026-10-14T08:30:00Z" },
            { "id": 3, "location": "C", "wasteType": "Metal", "amount": "3 kg",
              "coordinates": "12.92,74.90",
              "status": "pending", "createdAt": "2026-10-14T08:30:00Z" },
            { "location": "sin id" },
            { "id": 5, "location": "E", "wasteType": "Paper", "amount": "5 kg",
              "coordinates": { "latitude": 12.92, "longitude": 74.90 },
              "status": "pending", "createdAt": "2026-10-14T08:30:00Z" }
        ]"#).unwrap();

        let reports = Report::decode_list(body);
        let ids: Vec<i64> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);

        let positions: Vec<Option<Coordinates>> = reports.iter().map(Report::position).collect();
        assert_eq!(
            positions,
            vec![
                Some(Coordinates::new(12.90, 74.80)),
                None,
                None,
                Some(Coordinates::new(12.92, 74.90)),
            ]
        );
    }

    #[test]
    fn created_at_formats() {
        let mut report: Report = serde_json::from_str(FULL_REPORT).unwrap();
        assert_eq!(report.formatted_created_at(), "14 Oct 2026, 08:30");

        report.created_at = "2026-10-14 17:05:12.123".to_string();
        assert_eq!(report.formatted_created_at(), "14 Oct 2026, 17:05");

        report.created_at = "yesterday".to_string();
        assert_eq!(report.formatted_created_at(), "yesterday");
    }
}
