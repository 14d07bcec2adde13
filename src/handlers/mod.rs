mod classify;
mod fix_title;
mod health;
mod metrics;
mod models;

pub use classify::classify_title_handler;
pub use fix_title::fix_title_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use models::list_models_handler;
