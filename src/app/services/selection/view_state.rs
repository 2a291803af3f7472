//! Load state of a view

use crate::{Error, Result};
use tracing::{error, info};

/// A view that reacts to user events
pub trait ViewController {
    type Event;

    /// Apply one event; on error the view is left as it was
    fn handle(&mut self, event: Self::Event) -> Result<()>;
}

/// A view before, after, or instead of loading
///
/// A view only becomes `Ready` once every input it needs has arrived. There
/// is no partially loaded state.
#[derive(Debug, Clone)]
pub enum ViewState<V> {
    Loading,
    Ready(V),
    LoadFailed(String),
}

impl<V> Default for ViewState<V> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<V> ViewState<V> {
    /// State after a load attempt
    pub fn from_load(result: Result<V>) -> Self {
        match result {
            Ok(view) => {
                info!("View ready");
                ViewState::Ready(view)
            }
            Err(e) => {
                error!("View failed to load: {}", e);
                ViewState::LoadFailed(e.to_string())
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Ready(_) => "ready",
            ViewState::LoadFailed(_) => "load failed",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            ViewState::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// The loaded view, or the reason interaction is disabled
    pub fn require_ready(&self) -> Result<&V> {
        match self {
            ViewState::Ready(view) => Ok(view),
            ViewState::Loading => Err(Error::view_not_ready(self.label())),
            ViewState::LoadFailed(reason) => Err(Error::view_not_ready(format!(
                "{}: {}",
                self.label(),
                reason
            ))),
        }
    }
}

impl<V: ViewController> ViewState<V> {
    /// Forward an event to a ready view; rejected in any other state
    pub fn dispatch(&mut self, event: V::Event) -> Result<()> {
        match self {
            ViewState::Ready(view) => view.handle(event),
            ViewState::Loading => Err(Error::view_not_ready(self.label())),
            ViewState::LoadFailed(reason) => Err(Error::view_not_ready(format!(
                "load failed: {}",
                reason
            ))),
        }
    }
}
