//! UI Components
//!
//! Leptos components of the todo page.

mod confirm_button;
mod filter_bar;
mod new_todo_form;
mod toast_container;
mod todo_footer;
mod todo_item;
mod todo_list;

pub use confirm_button::ConfirmButton;
pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use toast_container::ToastContainer;
pub use todo_footer::TodoFooter;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
