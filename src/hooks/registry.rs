//! Hook registration and dispatch.

use super::HookEvent;
use crate::{
    debug,
    feed::{FeedBuilder, FeedError},
};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Payload handed to `feed:generate` handlers.
pub struct FeedContext<'a> {
    pub feed: &'a mut dyn FeedBuilder,
}

impl<'a> FeedContext<'a> {
    pub fn new(feed: &'a mut dyn FeedBuilder) -> Self {
        Self { feed }
    }
}

/// A handler registered against a hook event.
pub trait FeedHook {
    /// Unique per event; used in logs and to reject double registration.
    fn name(&self) -> &str;

    fn run(&self, ctx: &mut FeedContext<'_>) -> Result<(), FeedError>;
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error("hook `{name}` is already registered for `{event}`")]
    AlreadyRegistered { event: HookEvent, name: String },

    #[error("hook `{name}` failed on `{event}`")]
    Handler {
        event: HookEvent,
        name: String,
        #[source]
        source: FeedError,
    },
}

/// Handlers per event, kept in registration order.
#[derive(Default)]
pub struct HookRegistry {
    handlers: FxHashMap<HookEvent, Vec<Box<dyn FeedHook>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. A second handler with the same name for the same
    /// event is rejected.
    pub fn register(&mut self, event: HookEvent, hook: Box<dyn FeedHook>) -> Result<(), HookError> {
        let handlers = self.handlers.entry(event).or_default();
        if handlers.iter().any(|h| h.name() == hook.name()) {
            return Err(HookError::AlreadyRegistered {
                event,
                name: hook.name().to_string(),
            });
        }

        debug!("hook"; "registered `{}` for {}", hook.name(), event);
        handlers.push(hook);
        Ok(())
    }

    /// Names of the handlers for an event, in dispatch order.
    pub fn names(&self, event: HookEvent) -> Vec<&str> {
        self.handlers
            .get(&event)
            .map(|handlers| handlers.iter().map(|h| h.name()).collect())
            .unwrap_or_default()
    }

    /// Run every handler for `event`, one at a time, in registration order.
    ///
    /// Stops at the first failure. Returns the number of handlers run.
    pub fn dispatch(&self, event: HookEvent, ctx: &mut FeedContext<'_>) -> Result<usize, HookError> {
        let Some(handlers) = self.handlers.get(&event) else {
            debug!("hook"; "no handlers for {}", event);
            return Ok(0);
        };

        for hook in handlers {
            debug!("hook"; "running `{}` on {}", hook.name(), event);
            hook.run(ctx).map_err(|source| HookError::Handler {
                event,
                name: hook.name().to_string(),
                source,
            })?;
        }

        Ok(handlers.len())
    }
}
