//! Error conversion helpers for collaborator I/O
//!
//! Provides extension traits for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` from a renderer into `ApplicationResult`.
pub trait RenderResultExt<T> {
    /// Add context to a renderer I/O error.
    ///
    /// # Example
    /// ```ignore
    /// renderer.draw(&frame)
    ///     .with_render_context("draw view main")?;
    /// ```
    fn with_render_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> RenderResultExt<T> for io::Result<T> {
    fn with_render_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Render {
            context: context.to_string(),
            source: e,
        })
    }
}
