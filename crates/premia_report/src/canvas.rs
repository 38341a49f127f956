//! Live canvas accounting.
//!
//! Every drawing canvas is paired with a [`CanvasGuard`]. The guard is
//! declared before the canvas, so it drops after it, and the live count
//! returns to zero on every exit path, early returns and errors included.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts canvases currently open and canvases opened overall.
#[derive(Debug, Clone, Default)]
pub struct CanvasTracker {
    live: Arc<AtomicUsize>,
    opened: Arc<AtomicUsize>,
}

impl CanvasTracker {
    /// Create a tracker with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canvas; it counts as live until the guard drops.
    pub fn open(&self) -> CanvasGuard {
        self.live.fetch_add(1, Ordering::SeqCst);
        self.opened.fetch_add(1, Ordering::SeqCst);
        CanvasGuard {
            live: Arc::clone(&self.live),
        }
    }

    /// Canvases not yet released.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Canvases opened since creation.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

/// Releases its canvas slot on drop.
#[derive(Debug)]
#[must_use = "the canvas is released as soon as the guard is dropped"]
pub struct CanvasGuard {
    live: Arc<AtomicUsize>,
}

impl Drop for CanvasGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
