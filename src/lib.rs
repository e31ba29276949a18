//! Minimal Model-View-Update runtime.
//!
//! ```text
//! Message ──→ update ──→ Model ──→ view ──→ Ui
//!    ↑                                      │
//!    │                            diff(prev, new)
//!    │                                      ↓
//!  port ←── native widget ←── renderer ←── patches
//! ```
//!
//! Views build immutable element trees; the differ reconciles two trees
//! positionally and retargets message ports in place, so native widgets
//! survive across updates.

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod mvu;
pub mod render;
pub mod runtime;
pub mod samples;
