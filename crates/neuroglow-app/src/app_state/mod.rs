//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one brain background, redraws at the throttle
//! interval while visible.

mod core;
mod event_handler;
mod init;
mod schedule;
mod shutdown;

pub use core::NeuroglowApp;
