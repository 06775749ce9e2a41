pub mod consts;
pub mod errors;
pub mod models;
pub mod service;
pub mod target;
