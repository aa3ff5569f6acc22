//! Command implementations for reggie-cli

pub mod export;
pub mod list;
pub mod show;

pub use export::{run_json, run_yaml};
pub use list::run_list;
pub use show::run_show;
