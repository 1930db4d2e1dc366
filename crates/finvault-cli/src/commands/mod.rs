pub mod crypto;
pub mod history;
pub mod init;
pub mod misc;
pub mod store;
