#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod dispatch;
pub mod graph;
pub mod metrics;
pub mod monitor;
pub use app::CpuMonitorApp;
