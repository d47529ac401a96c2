// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface para la API JS de Google Maps
// ============================================================================
// Solo wrappers para clases JS - Sin estado, sin lógica
// ============================================================================

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `google.maps.Map`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone, PartialEq)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &LatLngBounds);

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, center: &JsValue);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, zoom: f64);

    /// `google.maps.LatLngBounds`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type LatLngBounds;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(south_west: &JsValue, north_east: &JsValue) -> LatLngBounds;

    /// `google.maps.Marker`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event: &str, handler: &Function) -> MapsEventListener;

    /// Handle devuelto por `addListener`
    #[derive(Debug, Clone)]
    pub type MapsEventListener;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapsEventListener);

    /// `google.maps.InfoWindow`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> InfoWindow;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, options: &JsValue);

    #[wasm_bindgen(method)]
    pub fn close(this: &InfoWindow);
}

/// `true` si `window.google.maps.Map` ya está definido
pub fn is_google_maps_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("google"))
        .and_then(|google| Reflect::get(&google, &JsValue::from_str("maps")))
        .and_then(|maps| Reflect::get(&maps, &JsValue::from_str("Map")))
        .map(|map_class| map_class.is_function())
        .unwrap_or(false)
}

/// URL del script de la API JS
pub fn google_maps_script_url(api_key: &str) -> String {
    let key = String::from(js_sys::encode_uri_component(api_key));
    format!("https://maps.googleapis.com/maps/api/js?key={}&v=weekly", key)
}
