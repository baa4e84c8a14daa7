pub mod config;
pub mod export;
pub mod init;
pub mod show;
