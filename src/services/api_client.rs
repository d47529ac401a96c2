// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::models::Report;
use super::ReportSource;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn pending_reports_url(&self) -> String {
        format!("{}/api/reports/pending", self.base_url)
    }

    /// Obtener reportes pendientes de recogida
    pub async fn get_pending_reports(&self) -> Result<Vec<Report>, String> {
        let url = self.pending_reports_url();
        log::info!("🗑️ Obteniendo reportes pendientes: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP {}: {}", status, error_text));
        }

        // Decodificar entrada por entrada: un reporte malformado no vacía el mapa
        let body = response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        let reports = Report::decode_list(body);

        log::info!("✅ {} reportes pendientes recibidos", reports.len());
        Ok(reports)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for ApiClient {
    async fn pending_reports(&self) -> Result<Vec<Report>, String> {
        self.get_pending_reports().await
    }
}
