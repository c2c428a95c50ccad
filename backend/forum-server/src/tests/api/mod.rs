mod auth_user;
mod error;
mod path_id;
