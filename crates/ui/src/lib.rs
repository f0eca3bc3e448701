pub mod app;
pub mod components;
pub mod context;
pub mod i18n;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, build_app_context};
