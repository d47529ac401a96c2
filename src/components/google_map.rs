// ============================================================================
// GOOGLE MAP SECTION - Mapa de reportes pendientes
// ============================================================================
// Carga el SDK, pide los reportes una vez y dibuja un MarkerItem por reporte
// ============================================================================

use yew::prelude::*;

use crate::components::MarkerItem;
use crate::config::CONFIG;
use crate::hooks::{use_js_api_loader, use_pending_reports, LoaderOptions};
use crate::maps::{GoogleMapRenderer, MapError, MapRenderer};
use crate::utils::{GOOGLE_MAP_SCRIPT_ID, MAP_CONTAINER_ID};
use crate::viewmodels::MapViewModel;

#[function_component(GoogleMapSection)]
pub fn google_map_section() -> Html {
    let sdk = use_js_api_loader(LoaderOptions {
        id: GOOGLE_MAP_SCRIPT_ID,
        api_key: CONFIG.google_maps_api_key().to_string(),
        slow_load_warning_ms: CONFIG.sdk_load_warning_ms,
    });
    let reports = use_pending_reports();
    let container = use_node_ref();
    let renderer = use_state(|| None::<GoogleMapRenderer>);

    // Crear el mapa en cuanto el SDK está listo y el contenedor montado
    {
        let container = container.clone();
        let renderer = renderer.clone();
        let view = reports.view;
        use_effect_with(sdk, move |sdk| {
            if sdk.is_ready() && renderer.is_none() {
                let created = container
                    .cast::<web_sys::HtmlElement>()
                    .ok_or(MapError::ContainerMissing)
                    .and_then(|element| GoogleMapRenderer::create(&element, &view));
                match created {
                    Ok(map) => renderer.set(Some(map)),
                    Err(e) => log::error!("❌ Error creando el mapa: {}", e),
                }
            }
            || ()
        });
    }

    // onLoad: encuadrar cuando existen tanto el mapa como la vista calculada
    {
        let map = (*renderer).clone();
        use_effect_with((map, reports.view), move |(map, view)| {
            if let Some(map) = map {
                if let Err(e) = map.apply_viewport(&MapViewModel::viewport_command(view)) {
                    log::error!("❌ Error ajustando la vista: {}", e);
                }
            }
            || ()
        });
    }

    if !sdk.is_ready() {
        return html! {
            <div class="map-loading">{"Loading..."}</div>
        };
    }

    html! {
        <>
            <div
                id={MAP_CONTAINER_ID}
                class="map-container"
                ref={container}
                style={CONFIG.ui_config.container_style()}
            ></div>
            if let Some(map) = (*renderer).clone() {
                <ContextProvider<GoogleMapRenderer> context={map}>
                    { for reports.reports.iter().map(|report| html! {
                        <MarkerItem key={report.id().to_string()} report={report.clone()} />
                    }) }
                </ContextProvider<GoogleMapRenderer>>
            }
        </>
    }
}
