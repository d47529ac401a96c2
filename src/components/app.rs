use yew::prelude::*;

use crate::components::GoogleMapSection;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="waste-map-page">
            <header class="app-header">
                <h1>{"Pending Waste Reports"}</h1>
            </header>
            <GoogleMapSection />
        </main>
    }
}
