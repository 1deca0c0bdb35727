pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod keymap;
pub mod layouts;
pub mod metrics;
pub mod patterns;
pub mod profile;
pub mod score;
pub mod trace;
pub mod util;
pub mod walks;
