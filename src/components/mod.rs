//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_list;
mod todo_row;
mod edit_form;
mod notice_banner;

pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use edit_form::EditForm;
pub use notice_banner::NoticeBanner;
