pub mod create_thread_request;
pub mod threads;
pub mod update_thread_response;
