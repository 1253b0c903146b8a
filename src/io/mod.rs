pub mod config_io;
pub mod gateway;
pub mod paths;
