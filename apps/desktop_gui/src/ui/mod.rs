//! UI layer for the desktop GUI: app shell and panel rendering.

pub mod app;

pub use app::MattersApp;
