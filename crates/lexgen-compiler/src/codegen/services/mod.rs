//! Emitters for the `services/` modules of the generated app.

mod api;
mod auth;
mod navigation;
mod session;
mod store;
mod types;
mod ui_components;
mod ui_state;

pub use api::{generate_api_ts, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use auth::generate_auth_ts;
pub use navigation::generate_navigation_ts;
pub use session::generate_session_manager_ts;
pub use store::generate_store_ts;
pub use types::generate_types_ts;
pub use ui_components::generate_ui_components_ts;
pub use ui_state::generate_ui_state_ts;
