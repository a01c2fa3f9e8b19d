//! Hook system for feed generation.
//!
//! Handlers are registered explicitly against a `HookRegistry` owned by the
//! caller; nothing is registered globally.
//!
//! - `event`: named extension points (`feed:generate`)
//! - `registry`: registration and sequential dispatch

mod event;
mod registry;

pub use event::HookEvent;
pub use registry::{FeedContext, FeedHook, HookError, HookRegistry};
