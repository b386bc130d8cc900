pub mod asset;
pub mod certificate;
pub mod company;
pub mod config;
pub mod equipment;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod project;
pub mod reminders;
pub mod ticket;
