pub mod config;
pub mod logging;

pub mod asset_name;
pub mod downloader;
pub mod extract;
pub mod fixer;
pub mod patcher;
pub mod pipeline;
