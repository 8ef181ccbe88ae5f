//! Controller layer: UI intents and their synchronous dispatch into the store.

pub mod intents;

pub use intents::{apply_intent, UiIntent};
