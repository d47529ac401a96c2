pub mod app;
pub mod google_map;
pub mod marker_item;

pub use app::App;
pub use google_map::GoogleMapSection;
pub use marker_item::MarkerItem;
