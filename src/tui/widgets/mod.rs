mod branch_list;
mod help_footer;

pub use branch_list::{item_label, render_branch_list};
pub use help_footer::render_help_footer;
