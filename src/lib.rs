pub mod app;
pub mod catalogue;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::QuizApp;
