pub mod arguments;
pub mod cache;
pub mod config;
pub mod demo;
pub mod errors;
pub mod freshness;
pub mod logger;
pub mod sources;
pub mod webserver;
