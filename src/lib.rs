pub mod cache;
pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod controller;
pub mod external_api;
pub mod query;
pub mod slug;
pub mod tag_form;

pub use controller::ListController;
pub use external_api::tags_api::TagsApi;
pub use external_api::ApiError;
pub use query::{MemoryNavigator, Navigator, QueryState, UrlNavigator};
pub use slug::derive_slug;
pub use tag_form::TagForm;
