// ============================================================================
// CHITRAM WEB - video messaging front-end (Yew + WASM)
// ============================================================================
// Layers:
// - Views / Components: Yew function components, no decisions
// - Hooks: session, dialogs, analytics and data loading
// - ViewModels: pure decision functions, tested on the host
// - Services: HTTP to the backend, identity provider and analytics
// - Stores / Models: plain state and wire types
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod stores;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod views;
pub mod utils;
pub mod app;

pub use app::{App, Route};
