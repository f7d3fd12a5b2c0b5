//! UI Components
//!
//! Leptos view components, one per page or reusable piece.

mod item_form;
mod item_list;
mod items_page;
mod user_detail;
mod user_list;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use items_page::ItemsPage;
pub use user_detail::UserDetail;
pub use user_list::UserList;
