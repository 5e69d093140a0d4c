//! Health Assist — interaction core for a health-assistant product.
//!
//! All analysis and chat replies are canned mock data behind a simulated
//! latency; nothing here performs real inference.

pub mod assistant;
pub mod chat;
pub mod config;
pub mod error;
pub mod wizard;
