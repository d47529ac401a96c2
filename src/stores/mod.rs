pub mod reports_store;

pub use reports_store::ReportsStore;
