mod user;
mod user_role;
mod thread;
