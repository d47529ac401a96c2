// ============================================================================
// MAP VIEWMODEL - Lógica de negocio del mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use std::collections::HashSet;

use crate::config::MapConfig;
use crate::models::{Coordinates, LatLngBounds, MapReport, Report};
use crate::services::ReportSource;
use crate::stores::ReportsStore;

/// Vista derivada de los reportes: centro, zoom y bounds a ajustar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: f64,
    pub bounds: Option<LatLngBounds>,
}

impl MapView {
    pub fn fallback(config: &MapConfig) -> Self {
        Self {
            center: config.default_center(),
            zoom: config.default_zoom,
            bounds: None,
        }
    }
}

/// Qué hacer con el mapa una vez que la instancia existe
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    FitBounds(LatLngBounds),
    SetCenter { center: Coordinates, zoom: f64 },
}

/// Resultado de procesar los reportes recibidos
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessedReports {
    pub reports: Vec<MapReport>,
    /// Ids de reportes sin coordenadas utilizables
    pub missing_coordinates: Vec<i64>,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Resolver coordenadas de cada reporte y registrar los que no tienen
    pub fn process_reports(reports: Vec<Report>) -> ProcessedReports {
        let mut processed = ProcessedReports::default();

        for report in reports {
            let map_report = MapReport::from(report);
            match map_report.position {
                Some(position) => {
                    log::debug!("📍 Reporte {}: ({}, {})", map_report.id(), position.lat, position.lng);
                }
                None => {
                    log::error!("❌ Missing coordinates for report ID: {}", map_report.id());
                    processed.missing_coordinates.push(map_report.id());
                }
            }
            processed.reports.push(map_report);
        }

        processed
    }

    /// Reportes que se dibujan como marcador: con coordenadas y con id único
    pub fn markers(reports: &[MapReport]) -> Vec<MapReport> {
        let mut seen = HashSet::new();
        reports
            .iter()
            .filter(|r| r.is_mappable())
            .filter(|r| {
                let first = seen.insert(r.id());
                if !first {
                    log::warn!("⚠️ Reporte {} duplicado, se ignora el repetido", r.id());
                }
                first
            })
            .cloned()
            .collect()
    }

    /// Centro y zoom a partir de los reportes con coordenadas
    pub fn compute_view(reports: &[MapReport], config: &MapConfig) -> MapView {
        let bounds = LatLngBounds::from_points(reports.iter().filter_map(|r| r.position));

        match bounds {
            Some(bounds) => MapView {
                center: bounds.center(),
                zoom: config.default_zoom,
                bounds: Some(bounds),
            },
            None => MapView::fallback(config),
        }
    }

    /// Equivalente al callback onLoad: encuadrar los bounds o centrar por defecto
    pub fn viewport_command(view: &MapView) -> ViewportCommand {
        match view.bounds {
            Some(bounds) => ViewportCommand::FitBounds(bounds),
            None => ViewportCommand::SetCenter {
                center: view.center,
                zoom: view.zoom,
            },
        }
    }

    /// Convertir el resultado del fetch en el estado del mapa.
    /// Un error deja la lista vacía y la vista por defecto.
    pub fn store_from_result(result: Result<Vec<Report>, String>, config: &MapConfig) -> ReportsStore {
        match result {
            Ok(reports) => {
                log::info!("📋 Fetched Reports from API: {}", reports.len());
                let processed = Self::process_reports(reports);
                Self::warn_missing(&processed);
                let markers = Self::markers(&processed.reports);
                let view = Self::compute_view(&markers, config);
                log::info!(
                    "🎯 Centro del mapa: ({:.5}, {:.5}), {} marcadores",
                    view.center.lat, view.center.lng, markers.len()
                );
                ReportsStore { reports: markers, view }
            }
            Err(e) => {
                log::error!("❌ Error fetching reports: {}", e);
                ReportsStore::new(config)
            }
        }
    }

    /// Fetch único de reportes pendientes
    pub async fn load_reports<S: ReportSource>(source: &S, config: &MapConfig) -> ReportsStore {
        let result = source.pending_reports().await;
        Self::store_from_result(result, config)
    }

    fn warn_missing(processed: &ProcessedReports) {
        if !processed.missing_coordinates.is_empty() {
            log::warn!(
                "⚠️ {} de {} reportes sin coordenadas, no se dibujan",
                processed.missing_coordinates.len(),
                processed.reports.len()
            );
        }
    }
}
