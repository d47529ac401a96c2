// ============================================================================
// REPORTS STORE - Estado local del mapa de reportes
// ============================================================================

use crate::config::MapConfig;
use crate::models::MapReport;
use crate::viewmodels::MapView;

/// Reportes obtenidos una sola vez y la vista calculada a partir de ellos
#[derive(Clone, Debug, PartialEq)]
pub struct ReportsStore {
    /// Reportes que se dibujan (con coordenadas, ids únicos)
    pub reports: Vec<MapReport>,
    pub view: MapView,
}

impl ReportsStore {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            reports: Vec::new(),
            view: MapView::fallback(config),
        }
    }
}
