pub mod chrome;
pub mod config;
pub mod fetch;
pub mod icon;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod refresh;
pub mod state;
pub mod window;
