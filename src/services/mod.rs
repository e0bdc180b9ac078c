pub mod activity;
pub mod todo;

pub use activity::ActivityService;
pub use todo::TodoService;
