//! The assistant response pipeline: prompt rendering, the navigation
//! protocol, the local reasoning engine and the per-turn chat service.

pub mod local;
pub mod navigation;
pub mod prompt;
pub mod service;
