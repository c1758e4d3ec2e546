//! Parse context: the path so far, the issue sink, and the execution mode
//!
//! A [`ParseContext`] lives for exactly one parse call. Composite schemas never
//! hand their own context to nested schemas; they create a [`child`] with the
//! path extended by one segment and a fresh, empty issue buffer, then decide
//! afterwards whether the child's issues are [`absorb`]ed. Issues therefore
//! never leak between calls or between sibling positions.
//!
//! [`child`]: ParseContext::child
//! [`absorb`]: ParseContext::absorb
//!
//! # Examples
//!
//! ```
//! use optuple::{IssueKind, ParseContext, ParseMode, PathSegment};
//!
//! let root = ParseContext::new(ParseMode::Sync);
//! let mut slot = root.child(PathSegment::Index(2));
//! slot.add_issue(IssueKind::Custom { message: "nope".into() });
//!
//! assert!(root.issues().is_empty());
//! assert_eq!(slot.issues()[0].path(), &[PathSegment::Index(2)]);
//! ```

use crate::issue::{Issue, IssueKind, PathSegment};
use crate::Semigroup;

/// Whether the current parse may suspend on asynchronous schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Every schema must resolve immediately
    Sync,
    /// Schemas may suspend; composites await all of their parts
    Async,
}

/// Call-scoped state threaded through a parse
#[derive(Debug, Clone)]
pub struct ParseContext {
    path: Vec<PathSegment>,
    issues: Vec<Issue>,
    mode: ParseMode,
}

impl ParseContext {
    /// Root context with an empty path.
    pub fn new(mode: ParseMode) -> Self {
        ParseContext {
            path: Vec::new(),
            issues: Vec::new(),
            mode,
        }
    }

    /// Root context whose issues are reported under `path`.
    pub fn with_path(mode: ParseMode, path: Vec<PathSegment>) -> Self {
        ParseContext {
            path,
            issues: Vec::new(),
            mode,
        }
    }

    /// Context for a nested value: same mode, path extended by `segment`,
    /// empty issue buffer.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        ParseContext {
            path,
            issues: Vec::new(),
            mode: self.mode,
        }
    }

    /// Current path.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Execution mode.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Shorthand for `mode() == ParseMode::Async`.
    pub fn is_async(&self) -> bool {
        self.mode == ParseMode::Async
    }

    /// Record an issue at the current path.
    pub fn add_issue(&mut self, kind: IssueKind) {
        self.issues.push(Issue::new(kind, self.path.clone()));
    }

    /// Append issues collected elsewhere (typically from child contexts).
    pub fn absorb(&mut self, issues: Vec<Issue>) {
        let current = std::mem::take(&mut self.issues);
        self.issues = current.combine(issues);
    }

    /// Issues recorded so far.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consume the context and return its issues.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}
