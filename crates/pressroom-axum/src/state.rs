//! Shared application state type.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`AppContext`] carrying the repository aggregate.
pub type AppState = Arc<AppContext>;
