pub mod builder;
pub mod config;
pub mod constants;
pub mod depth;
pub mod geo;
pub mod map;
