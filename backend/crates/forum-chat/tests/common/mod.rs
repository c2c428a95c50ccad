#![allow(unused_imports)]

pub(crate) mod fake_use_case;
pub(crate) mod test_client;
pub(crate) mod test_server;

pub use fake_use_case::*;
pub use test_client::*;
pub use test_server::*;
