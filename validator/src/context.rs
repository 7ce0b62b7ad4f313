//! Validation context: per-call path bookkeeping and depth guarding
//!
//! Each top-level validation call owns its own context, so concurrent
//! validations of independent record graphs never share traversal state.

use iso20022_core::{Iso20022Error, Result};

/// Default bound on recursive descent. ISO 20022 graphs are a few dozen
/// levels at most; the bound only trips on pathological input.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tracks the dotted/bracketed path during one recursive validation pass.
#[derive(Debug)]
pub struct ValidationContext {
    segments: Vec<String>,
    depth: usize,
    max_depth: usize,
}

impl ValidationContext {
    /// Create a context with the given depth bound
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            segments: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    /// Push a field-name segment before descending into a nested value
    pub fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Push an index-qualified segment (`[i]`) before descending into a
    /// collection element
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(format!("[{index}]"));
    }

    /// Pop the segment pushed by the matching `push`/`push_index`
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Enter one level of record recursion.
    ///
    /// # Errors
    ///
    /// Returns [`Iso20022Error::DepthExceeded`] when the graph is deeper
    /// than the configured bound.
    pub fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Iso20022Error::DepthExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one level of record recursion
    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    /// The accumulated path prefix, empty at the root.
    ///
    /// Index segments attach without a separator, so `c` + `[1]` + `d`
    /// renders as `c[1].d`.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            if !path.is_empty() && !segment.starts_with('[') {
                path.push('.');
            }
            path.push_str(segment);
        }
        path
    }

    /// Fully qualify a field name with the accumulated prefix
    #[must_use]
    pub fn qualify(&self, field_name: &str) -> String {
        let prefix = self.prefix();
        if prefix.is_empty() {
            field_name.to_string()
        } else {
            format!("{prefix}.{field_name}")
        }
    }

    /// Qualify a warning message with the accumulated prefix,
    /// colon-separated
    #[must_use]
    pub fn qualify_warning(&self, message: &str) -> String {
        let prefix = self.prefix();
        if prefix.is_empty() {
            message.to_string()
        } else {
            format!("{prefix}: {message}")
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn index_segments_attach_without_dot() {
        let mut ctx = ValidationContext::default();
        ctx.push("b");
        ctx.push("c");
        ctx.push_index(1);
        assert_eq!(ctx.qualify("d"), "b.c[1].d");
        ctx.pop();
        ctx.pop();
        assert_eq!(ctx.qualify("d"), "b.d");
    }

    #[test]
    fn root_qualification_is_the_bare_name() {
        let ctx = ValidationContext::default();
        assert_eq!(ctx.qualify("msg_id"), "msg_id");
        assert_eq!(ctx.qualify_warning("odd element"), "odd element");
    }

    #[test]
    fn warnings_are_colon_prefixed() {
        let mut ctx = ValidationContext::default();
        ctx.push("grp_hdr");
        assert_eq!(
            ctx.qualify_warning("unknown element ignored"),
            "grp_hdr: unknown element ignored"
        );
    }

    #[test]
    fn depth_guard_trips_past_the_bound() {
        let mut ctx = ValidationContext::new(2);
        ctx.enter().expect("level 1");
        ctx.enter().expect("level 2");
        assert!(matches!(
            ctx.enter(),
            Err(Iso20022Error::DepthExceeded { limit: 2 })
        ));
        ctx.leave();
        ctx.enter().expect("level 2 again after leave");
    }
}
