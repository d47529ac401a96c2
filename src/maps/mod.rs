// Renderizado del mapa sobre la API JS de Google Maps

pub mod loader;
pub mod traits;
pub mod web;

pub use loader::{load_google_maps, LoadOutcome, ScriptLoad};
pub use traits::{MapError, MapRenderer};
pub use web::GoogleMapRenderer;
