pub mod config;
pub mod consts;
pub mod generator;
pub mod logging;
pub mod reducer;
pub mod runner;
pub mod sample;
