use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Coordinates, LatLngBounds, MapReport};
use crate::utils::google_maps_ffi as ffi;
use crate::viewmodels::{MapView, ViewportCommand};
use super::{MapError, MapRenderer};

#[derive(Serialize)]
struct MapOptions {
    center: Coordinates,
    zoom: f64,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    position: Coordinates,
    title: &'a str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Serialization(e.to_string()))
}

fn js_bounds(bounds: &LatLngBounds) -> Result<ffi::LatLngBounds, MapError> {
    Ok(ffi::LatLngBounds::new(
        &to_js(&bounds.south_west())?,
        &to_js(&bounds.north_east())?,
    ))
}

/// Renderizador de mapas para web usando Google Maps JS
#[derive(Clone, Debug, PartialEq)]
pub struct GoogleMapRenderer {
    map: ffi::Map,
}

impl GoogleMapRenderer {
    /// Crear la instancia `google.maps.Map` en el contenedor
    pub fn create(container: &web_sys::HtmlElement, view: &MapView) -> Result<Self, MapError> {
        if !ffi::is_google_maps_available() {
            return Err(MapError::NotReady);
        }

        let options = to_js(&MapOptions {
            center: view.center,
            zoom: view.zoom,
        })?;

        log::info!("🗺️ Creando mapa en ({:.5}, {:.5}) zoom {}", view.center.lat, view.center.lng, view.zoom);
        Ok(Self {
            map: ffi::Map::new(container, &options),
        })
    }
}

impl MapRenderer for GoogleMapRenderer {
    type Marker = ReportMarker;

    fn apply_viewport(&self, command: &ViewportCommand) -> Result<(), MapError> {
        match command {
            ViewportCommand::FitBounds(bounds) => {
                log::info!("📦 Ajustando vista a bounds {:?}", bounds);
                self.map.fit_bounds(&js_bounds(bounds)?);
            }
            ViewportCommand::SetCenter { center, zoom } => {
                log::info!("🎯 Centrando mapa en ({}, {}) con zoom {}", center.lat, center.lng, zoom);
                self.map.set_center(&to_js(center)?);
                self.map.set_zoom(*zoom);
            }
        }
        Ok(())
    }

    fn add_report_marker(&self, report: &MapReport) -> Result<ReportMarker, MapError> {
        let position = report.position.ok_or(MapError::InvalidCoordinates(report.id()))?;

        let options = to_js(&MarkerOptions {
            position,
            title: &report.report.location,
        })?;
        let marker = ffi::Marker::new(&options);
        marker.set_map(self.map.as_ref());

        let info_window = ffi::InfoWindow::new(&info_window_options(report)?);

        let on_click = {
            let marker = marker.clone();
            let map = self.map.clone();
            let info_window = info_window.clone();
            let id = report.id();
            Closure::wrap(Box::new(move || {
                log::info!("📍 Reporte {} seleccionado", id);
                match open_options(&marker, &map) {
                    Ok(options) => info_window.open(&options),
                    Err(e) => log::error!("❌ No se pudo abrir el info window: {}", e),
                }
            }) as Box<dyn FnMut()>)
        };
        let listener = marker.add_listener("click", on_click.as_ref().unchecked_ref::<Function>());

        Ok(ReportMarker {
            marker,
            info_window,
            listener,
            _on_click: on_click,
        })
    }
}

/// Marcador vivo en el mapa; se quita del mapa al hacer drop
pub struct ReportMarker {
    marker: ffi::Marker,
    info_window: ffi::InfoWindow,
    listener: ffi::MapsEventListener,
    _on_click: Closure<dyn FnMut()>,
}

impl Drop for ReportMarker {
    fn drop(&mut self) {
        self.listener.remove();
        self.info_window.close();
        self.marker.set_map(&JsValue::NULL);
    }
}

fn open_options(marker: &ffi::Marker, map: &ffi::Map) -> Result<JsValue, MapError> {
    let options = Object::new();
    set_prop(&options, "anchor", marker.as_ref())?;
    set_prop(&options, "map", map.as_ref())?;
    Ok(options.into())
}

fn set_prop(target: &Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| MapError::Dom(format!("{:?}", e)))
}

fn info_window_options(report: &MapReport) -> Result<JsValue, MapError> {
    let options = Object::new();
    set_prop(&options, "content", info_window_content(report)?.as_ref())?;
    Ok(options.into())
}

/// Contenido del info window con nodos DOM (el texto del backend nunca se interpreta como HTML)
fn info_window_content(report: &MapReport) -> Result<web_sys::Element, MapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapError::Dom("document not available".to_string()))?;
    let dom_err = |e: JsValue| MapError::Dom(format!("{:?}", e));

    let root = document.create_element("div").map_err(dom_err)?;
    root.set_class_name("report-info");

    let title = document.create_element("h3").map_err(dom_err)?;
    title.set_text_content(Some(&report.report.location));
    root.append_child(&title).map_err(dom_err)?;

    let rows = [
        ("Waste type", report.report.waste_type.clone()),
        ("Amount", report.report.amount.clone()),
        ("Status", report.report.status.clone()),
        ("Reported", report.report.formatted_created_at()),
    ];
    for (label, value) in rows {
        let row = document.create_element("p").map_err(dom_err)?;
        row.set_text_content(Some(&format!("{}: {}", label, value)));
        root.append_child(&row).map_err(dom_err)?;
    }

    if let Some(url) = report.report.image_url.as_deref().filter(|u| !u.is_empty()) {
        let img = document
            .create_element("img")
            .map_err(dom_err)?
            .dyn_into::<web_sys::HtmlImageElement>()
            .map_err(|_| MapError::Dom("img is not an HtmlImageElement".to_string()))?;
        img.set_src(url);
        img.set_alt(&format!("Report {}", report.id()));
        img.set_class_name("report-info-image");
        root.append_child(&img).map_err(dom_err)?;
    }

    Ok(root)
}
