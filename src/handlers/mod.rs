pub mod create;
pub mod delete;
pub mod fallback;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::fallback_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use update::update_handler;
