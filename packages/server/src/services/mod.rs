pub mod hashtags;
pub mod photos;
pub mod users;
