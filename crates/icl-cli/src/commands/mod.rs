mod compose;
mod store_ops;

pub use compose::run_compose;
pub use store_ops::{run_check, run_create, run_delete, run_list, run_show, run_update};
