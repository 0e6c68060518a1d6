pub mod config;
pub mod init;
pub mod list;
pub mod process;
