pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod layout;
pub mod model;
pub mod targets;

pub use config::{
    load_config, save_config, DashboardConfig, DEFAULT_CONFIG_PATH, DEFAULT_ENDPOINT,
    DEFAULT_INITIAL_PRODUCT, DEFAULT_SCAN_PRODUCT,
};
pub use dashboard::{
    perform_fetch, Dashboard, FetchFailure, FetchSettled, FetchTicket, Phase, Render,
    RequestOrigin,
};
pub use error::{Error, StorageAction};
pub use fetcher::{HttpRecordFetcher, MockRecordFetcher, RecordFetcher, RecordFuture};
pub use layout::{render_text, MaterialLine, PassportLayout};
pub use model::{CarbonFootprint, Location, Material, ProductId, ProductRecord};
