pub mod admin;
pub mod backup;
pub mod calculator;
pub mod log;
pub mod session;
pub mod summary;
