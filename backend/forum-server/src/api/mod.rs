pub mod chat;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod path_id;
pub mod posts;
pub mod threads;
