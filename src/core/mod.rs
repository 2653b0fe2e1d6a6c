pub mod backup;
pub mod config;
pub mod log;
pub mod presenter;
pub mod session;
pub mod store;
