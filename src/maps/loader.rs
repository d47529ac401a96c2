// ============================================================================
// GOOGLE MAPS LOADER - Inyección del script de la API JS
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlScriptElement};

use crate::utils::google_maps_ffi::{google_maps_script_url, is_google_maps_available};
use super::MapError;

/// Listeners de `load`/`error` sobre el `<script>`; se quitan al hacer drop
pub struct ScriptLoad {
    target: EventTarget,
    on_load: Closure<dyn FnMut(web_sys::Event)>,
    on_error: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ScriptLoad {
    fn drop(&mut self) {
        let _ = self.target
            .remove_event_listener_with_callback("load", self.on_load.as_ref().unchecked_ref());
        let _ = self.target
            .remove_event_listener_with_callback("error", self.on_error.as_ref().unchecked_ref());
    }
}

pub enum LoadOutcome {
    /// `google.maps` ya estaba disponible
    AlreadyLoaded,
    /// El script está cargando; `on_ready` se llamará en su evento `load`
    Pending(ScriptLoad),
}

/// Asegura que el script exista una sola vez (por `script_id`) y escucha su carga
pub fn load_google_maps<F>(script_id: &str, api_key: &str, on_ready: F) -> Result<LoadOutcome, MapError>
where
    F: Fn() + 'static,
{
    if is_google_maps_available() {
        return Ok(LoadOutcome::AlreadyLoaded);
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapError::Dom("document not available".to_string()))?;

    let script: HtmlScriptElement = match document.get_element_by_id(script_id) {
        Some(existing) => {
            log::info!("🔁 Script {} ya presente, esperando su carga", script_id);
            existing
                .dyn_into()
                .map_err(|_| MapError::Dom(format!("#{} is not a <script>", script_id)))?
        }
        None => {
            if api_key.is_empty() {
                log::warn!("⚠️ GOOGLE_MAPS_API_KEY vacía, el SDK probablemente rechazará la carga");
            }
            let script: HtmlScriptElement = document
                .create_element("script")
                .map_err(|e| MapError::Dom(format!("{:?}", e)))?
                .dyn_into()
                .map_err(|_| MapError::Dom("created element is not a <script>".to_string()))?;
            script.set_id(script_id);
            script.set_src(&google_maps_script_url(api_key));
            script.set_async(true);
            script.set_defer(true);

            let head = document
                .head()
                .ok_or_else(|| MapError::Dom("document has no <head>".to_string()))?;
            head.append_child(&script).map_err(|e| MapError::Dom(format!("{:?}", e)))?;
            log::info!("📥 Script de Google Maps inyectado");
            script
        }
    };

    let on_load = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        if is_google_maps_available() {
            log::info!("✅ Google Maps SDK cargado");
            on_ready();
        } else {
            log::error!("❌ Script cargado pero google.maps no está disponible");
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let on_error = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        log::error!("❌ Error cargando el script de Google Maps");
    }) as Box<dyn FnMut(web_sys::Event)>);

    let target: EventTarget = script.into();
    target
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|e| MapError::Dom(format!("{:?}", e)))?;
    target
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .map_err(|e| MapError::Dom(format!("{:?}", e)))?;

    Ok(LoadOutcome::Pending(ScriptLoad {
        target,
        on_load,
        on_error,
    }))
}
