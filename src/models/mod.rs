pub mod coordinates;
pub mod bounds;
pub mod report;

pub use coordinates::{Coordinates, ReportCoordinates};
pub use bounds::LatLngBounds;
pub use report::{MapReport, Report};
