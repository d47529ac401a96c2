use yew::prelude::*;

use crate::maps::{GoogleMapRenderer, MapRenderer};
use crate::models::MapReport;

#[derive(Properties, PartialEq)]
pub struct MarkerItemProps {
    pub report: MapReport,
}

/// Un marcador por reporte; vive mientras el componente esté montado
#[function_component(MarkerItem)]
pub fn marker_item(props: &MarkerItemProps) -> Html {
    let map = use_context::<GoogleMapRenderer>();

    use_effect_with((map, props.report.clone()), |(map, report)| {
        let marker = match map {
            Some(map) => match map.add_report_marker(report) {
                Ok(marker) => Some(marker),
                Err(e) => {
                    log::error!("❌ Marcador del reporte {}: {}", report.id(), e);
                    None
                }
            },
            None => {
                log::warn!("⚠️ MarkerItem fuera de un mapa, reporte {}", report.id());
                None
            }
        };
        move || drop(marker)
    });

    html! {
        <></>
    }
}
