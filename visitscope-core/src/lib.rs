pub mod access_log;
pub mod cli;
pub mod conf;
pub mod dashboard;
pub mod geoip;
pub mod logging;
pub mod report;
pub mod static_files;
pub mod views;
