pub mod components;
pub mod config;
pub mod error;
pub mod models;

pub use components::post_card::PostCard;
pub use components::post_list::PostList;
pub use models::post::Post;
