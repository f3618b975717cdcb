pub mod post_card;
pub mod post_list;
pub mod tag_chips;
pub mod thumbnail;
