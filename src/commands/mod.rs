pub mod count;
pub mod demo;
pub mod generate;
pub mod get;
pub mod init_config;
