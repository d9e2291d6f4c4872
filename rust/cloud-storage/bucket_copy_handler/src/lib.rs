#![recursion_limit = "256"]

pub mod config;
pub mod entrypoint;
pub mod handler;
pub mod model;
pub mod service;
