pub mod create_post_request;
pub mod posts;
