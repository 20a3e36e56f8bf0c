pub mod config;
pub mod dashboard;
pub mod equipment;
pub mod init;
pub mod log;
pub mod search;
pub mod task;
