pub mod auth;
pub mod hashtag;
pub mod photo;
pub mod shared;
