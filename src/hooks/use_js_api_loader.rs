// ============================================================================
// USE JS API LOADER HOOK - Disponibilidad del SDK de Google Maps
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::maps::{load_google_maps, LoadOutcome, ScriptLoad};
use crate::utils::google_maps_ffi::is_google_maps_available;

/// Estado del SDK: cargando o listo. Un fallo de carga deja `Loading` indefinidamente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SdkStatus {
    Loading,
    Ready,
}

impl SdkStatus {
    pub fn is_ready(self) -> bool {
        self == SdkStatus::Ready
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoaderOptions {
    pub id: &'static str,
    pub api_key: String,
    /// Avisar en consola si el SDK sigue cargando pasado este tiempo
    pub slow_load_warning_ms: u32,
}

#[hook]
pub fn use_js_api_loader(options: LoaderOptions) -> SdkStatus {
    let status = use_state(|| {
        if is_google_maps_available() { SdkStatus::Ready } else { SdkStatus::Loading }
    });

    {
        let status = status.clone();
        use_effect_with(options, move |options| {
            let mut pending: Option<ScriptLoad> = None;
            let mut slow_warning: Option<Timeout> = None;

            if !status.is_ready() {
                let on_ready = {
                    let status = status.clone();
                    move || status.set(SdkStatus::Ready)
                };
                match load_google_maps(options.id, &options.api_key, on_ready) {
                    Ok(LoadOutcome::AlreadyLoaded) => status.set(SdkStatus::Ready),
                    Ok(LoadOutcome::Pending(load)) => {
                        pending = Some(load);
                        let ms = options.slow_load_warning_ms;
                        slow_warning = Some(Timeout::new(ms, move || {
                            if !is_google_maps_available() {
                                log::warn!("⏳ Google Maps SDK sigue cargando después de {} ms", ms);
                            }
                        }));
                    }
                    Err(e) => log::error!("❌ No se pudo cargar Google Maps: {}", e),
                }
            }

            move || {
                drop(slow_warning);
                drop(pending);
            }
        });
    }

    *status
}

#[cfg(test)]
mod tests {
    use super::SdkStatus;

    #[test]
    fn only_ready_is_ready() {
        assert!(SdkStatus::Ready.is_ready());
        assert!(!SdkStatus::Loading.is_ready());
    }
}
