pub mod config;
pub mod form;
pub mod logging;
pub mod session;
