//! `storefront-demo` — the plugin-function demo surface.
//!
//! A read-only in-memory store built once at startup, three plugins that
//! format lookups as text, a static dispatch table routing
//! `(plugin, function)` pairs to those plugins, and the chat seam delegating
//! to an external chat-completion provider.

pub mod chat;
pub mod data;
pub mod plugins;
pub mod router;

pub use chat::{ChatProvider, ChatService, UnconfiguredChat};
pub use data::DemoDataStore;
pub use plugins::{ItemPlugin, StockPlugin, TrackingPlugin};
pub use router::FunctionRouter;
