pub mod api_client;

pub use api_client::ApiClient;

use crate::models::Report;

/// Origen de los reportes pendientes que muestra el mapa
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    /// Lista de reportes pendientes; una sola consulta, sin suscripción
    async fn pending_reports(&self) -> Result<Vec<Report>, String>;
}
