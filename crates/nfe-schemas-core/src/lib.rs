pub mod config;
pub mod logging;

pub mod archive;
pub mod checksum;
pub mod discover;
pub mod http;
pub mod sync;
