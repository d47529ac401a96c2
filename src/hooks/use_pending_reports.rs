// ============================================================================
// USE PENDING REPORTS HOOK - Fetch único de reportes al montar
// ============================================================================
// Hook nativo de Yew - Delega lógica al ViewModel
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::ApiClient;
use crate::stores::ReportsStore;
use crate::viewmodels::MapViewModel;

/// Reportes pendientes + vista derivada. Se piden una sola vez, sin suscripción.
#[hook]
pub fn use_pending_reports() -> UseStateHandle<ReportsStore> {
    let state = use_state(|| ReportsStore::new(&CONFIG.map_config));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            // Sin cancelación: si el componente se desmonta, el resultado se descarta
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                let store = MapViewModel::load_reports(&client, &CONFIG.map_config).await;
                state.set(store);
            });
            || ()
        });
    }

    state
}
