//! Schemas that wrap another schema
//!
//! These are the building blocks that decide how a tuple slot reacts to an
//! absent value: [`Optional`] accepts it, [`WithDefault`] replaces it, and an
//! unwrapped schema rejects it. The remaining wrappers post-process whatever
//! the inner schema produced.

use std::fmt;

use futures::future::{self, BoxFuture};

use crate::context::ParseContext;
use crate::issue::IssueKind;
use crate::schema::Schema;
use crate::status::{ParseOutcome, ParseStatus};
use crate::value::Value;

/// Accepts [`Value::Undefined`], otherwise defers to the inner schema
#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
}

impl<S> Optional<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Optional { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schema> Schema for Optional<S> {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        if input.is_undefined() {
            return ParseOutcome::Valid(input);
        }
        self.inner.run(input, ctx)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        if input.is_undefined() {
            return Box::pin(future::ready(ParseOutcome::Valid(input)));
        }
        self.inner.run_async(input, ctx)
    }

    fn is_async(&self) -> bool {
        self.inner.is_async()
    }
}

/// Substitutes a default for [`Value::Undefined`] before validating
#[derive(Debug, Clone)]
pub struct WithDefault<S> {
    inner: S,
    default: Value,
}

impl<S> WithDefault<S> {
    /// Wrap `inner` with `default`.
    pub fn new(inner: S, default: Value) -> Self {
        WithDefault { inner, default }
    }

    /// The value used when input is absent.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    fn resolve(&self, input: Value) -> Value {
        if input.is_undefined() {
            self.default.clone()
        } else {
            input
        }
    }
}

impl<S: Schema> Schema for WithDefault<S> {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        self.inner.run(self.resolve(input), ctx)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        self.inner.run_async(self.resolve(input), ctx)
    }

    fn is_async(&self) -> bool {
        self.inner.is_async()
    }
}

/// Maps the value produced by the inner schema
pub struct Transform<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Transform<S, F> {
    /// Wrap `inner`, mapping its output through `f`.
    pub fn new(inner: S, f: F) -> Self {
        Transform { inner, f }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Transform<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, F> Schema for Transform<S, F>
where
    S: Schema,
    F: Fn(Value) -> Value + Send + Sync,
{
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        self.inner.run(input, ctx).map(&self.f)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        Box::pin(async move { self.inner.run_async(input, ctx).await.map(&self.f) })
    }

    fn is_async(&self) -> bool {
        self.inner.is_async()
    }
}

/// Records a `custom` issue when a predicate rejects the inner schema's value
///
/// A failed refinement leaves the value in place and marks the outcome dirty.
pub struct Refine<S, F> {
    inner: S,
    check: F,
    message: String,
}

impl<S, F> Refine<S, F> {
    /// Wrap `inner` with `check`, reporting `message` on failure.
    pub fn new(inner: S, check: F, message: String) -> Self {
        Refine {
            inner,
            check,
            message,
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Refine<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refine")
            .field("inner", &self.inner)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<S, F> Refine<S, F>
where
    F: Fn(&Value) -> bool,
{
    fn apply(&self, outcome: ParseOutcome, ctx: &mut ParseContext) -> ParseOutcome {
        let passed = match outcome.value() {
            Some(value) => (self.check)(value),
            None => return ParseOutcome::Aborted,
        };
        if passed {
            return outcome;
        }
        ctx.add_issue(IssueKind::Custom {
            message: self.message.clone(),
        });
        outcome.with_status(ParseStatus::Dirty)
    }
}

impl<S, F> Schema for Refine<S, F>
where
    S: Schema,
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        let outcome = self.inner.run(input, ctx);
        self.apply(outcome, ctx)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        Box::pin(async move {
            let outcome = self.inner.run_async(input, ctx).await;
            self.apply(outcome, ctx)
        })
    }

    fn is_async(&self) -> bool {
        self.inner.is_async()
    }
}

/// Like [`Refine`], but the predicate has to be awaited
///
/// Only usable through the async entry points. Run synchronously it records a
/// `custom` issue and aborts; the message depends on whether the enclosing
/// parse was started with `parse_async`.
pub struct AsyncRefine<S, F> {
    inner: S,
    check: F,
    message: String,
}

impl<S, F> AsyncRefine<S, F> {
    /// Wrap `inner` with the async `check`, reporting `message` on failure.
    pub fn new(inner: S, check: F, message: String) -> Self {
        AsyncRefine {
            inner,
            check,
            message,
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for AsyncRefine<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRefine")
            .field("inner", &self.inner)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<S, F> Schema for AsyncRefine<S, F>
where
    S: Schema,
    F: Fn(Value) -> BoxFuture<'static, bool> + Send + Sync,
{
    fn run(&self, _input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        let message = if ctx.is_async() {
            "Async refinement reached through a schema without run_async. \
             Override run_async on the enclosing schema."
        } else {
            "Async refinement encountered during synchronous parse operation. \
             Use parse_async instead."
        };
        ctx.add_issue(IssueKind::Custom {
            message: message.to_string(),
        });
        ParseOutcome::Aborted
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        Box::pin(async move {
            let outcome = self.inner.run_async(input, ctx).await;
            let candidate = match outcome.value() {
                Some(value) => value.clone(),
                None => return ParseOutcome::Aborted,
            };
            if (self.check)(candidate).await {
                return outcome;
            }
            ctx.add_issue(IssueKind::Custom {
                message: self.message.clone(),
            });
            outcome.with_status(ParseStatus::Dirty)
        })
    }

    fn is_async(&self) -> bool {
        true
    }
}
