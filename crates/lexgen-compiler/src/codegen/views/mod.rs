//! Emitters for the `services/views/` modules. All three views work on the
//! primary record type only.

mod detail;
mod form;
mod list;

pub use detail::generate_detail_view_ts;
pub use form::generate_form_view_ts;
pub use list::generate_list_view_ts;
