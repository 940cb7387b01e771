mod filter;
mod walker;

pub use filter::is_exportable_file;
pub use walker::{list_children, ChildEntry};
