//! The schema capability and its entry points
//!
//! Every validator, from `boolean()` to a full tuple, implements [`Schema`]:
//! given a value and a [`ParseContext`], produce a [`ParseOutcome`] and record
//! issues in the context. Composite schemas only ever see their parts through
//! this trait, usually as a shared [`SchemaRef`].
//!
//! [`SchemaExt`] is implemented for every schema and provides the public entry
//! points (`parse`, `safe_parse` and their async forms) plus the builder
//! combinators (`optional`, `default`, `transform`, `refine`, ...).
//!
//! # Sync and async
//!
//! `run` is the synchronous form. `run_async` defaults to running `run` and
//! returning a ready future, so purely synchronous schemas implement only
//! `run`. Schemas that genuinely suspend override `run_async` and report
//! `is_async() == true`; composites propagate that flag so a synchronous
//! top-level parse can refuse them up front with
//! [`ParseError::AsyncRequired`].
//!
//! # Examples
//!
//! ```
//! use optuple::prelude::*;
//!
//! let schema = tuple_with_optional([
//!     boolean().boxed(),
//!     number().boxed(),
//!     string().optional().boxed(),
//! ]);
//!
//! assert_eq!(schema.parse(seq![true, 1]).unwrap(), seq![true, 1]);
//!
//! let async_result = tokio_test::block_on(schema.parse_async(seq![true, 1, "x"]));
//! assert_eq!(async_result.unwrap(), seq![true, 1, "x"]);
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture};

use crate::context::{ParseContext, ParseMode};
use crate::issue::{ParseError, ValidationError};
use crate::schemas::{AsyncRefine, Optional, Refine, Transform, WithDefault};
use crate::status::ParseOutcome;
use crate::validation::Validation;
use crate::value::Value;

/// A validator for one value
pub trait Schema: fmt::Debug + Send + Sync {
    /// Validate `input` synchronously, recording issues in `ctx`.
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome;

    /// Validate `input`, possibly suspending.
    ///
    /// The default resolves immediately with [`Schema::run`].
    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        let outcome = self.run(input, ctx);
        Box::pin(future::ready(outcome))
    }

    /// Whether this schema (or any part of it) can only run asynchronously.
    fn is_async(&self) -> bool {
        false
    }
}

/// Shared, type-erased schema
pub type SchemaRef = Arc<dyn Schema>;

impl<S: Schema + ?Sized> Schema for Arc<S> {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        (**self).run(input, ctx)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        (**self).run_async(input, ctx)
    }

    fn is_async(&self) -> bool {
        (**self).is_async()
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        (**self).run(input, ctx)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        (**self).run_async(input, ctx)
    }

    fn is_async(&self) -> bool {
        (**self).is_async()
    }
}

fn finish(outcome: ParseOutcome, ctx: ParseContext) -> Validation<Value, ParseError> {
    match outcome {
        ParseOutcome::Valid(value) => Validation::success(value),
        ParseOutcome::Dirty(_) | ParseOutcome::Aborted => Validation::failure(
            ParseError::Invalid(ValidationError::new(ctx.into_issues())),
        ),
    }
}

/// Entry points and combinators available on every schema
pub trait SchemaExt: Schema {
    /// Parse without panicking, returning the tagged result.
    ///
    /// A dirty outcome (a value was produced but issues were recorded) is
    /// reported as a failure carrying those issues.
    fn safe_parse(&self, input: impl Into<Value>) -> Validation<Value, ParseError> {
        if self.is_async() {
            return Validation::failure(ParseError::AsyncRequired);
        }
        let mut ctx = ParseContext::new(ParseMode::Sync);
        let outcome = self.run(input.into(), &mut ctx);
        finish(outcome, ctx)
    }

    /// Parse, returning the value or the error with the full issue list.
    fn parse(&self, input: impl Into<Value>) -> Result<Value, ParseError> {
        self.safe_parse(input).into_result()
    }

    /// Async form of [`SchemaExt::safe_parse`]; runs asynchronous parts
    /// concurrently.
    fn safe_parse_async(
        &self,
        input: impl Into<Value>,
    ) -> impl Future<Output = Validation<Value, ParseError>> + Send + '_ {
        let input = input.into();
        async move {
            let mut ctx = ParseContext::new(ParseMode::Async);
            let outcome = self.run_async(input, &mut ctx).await;
            finish(outcome, ctx)
        }
    }

    /// Async form of [`SchemaExt::parse`].
    fn parse_async(
        &self,
        input: impl Into<Value>,
    ) -> impl Future<Output = Result<Value, ParseError>> + Send + '_ {
        let pending = self.safe_parse_async(input);
        async move { pending.await.into_result() }
    }

    /// Erase the concrete type so the schema can sit in a tuple.
    fn boxed(self) -> SchemaRef
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }

    /// Accept [`Value::Undefined`] in addition to whatever this schema accepts.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Replace [`Value::Undefined`] with `value` before validating.
    fn default(self, value: impl Into<Value>) -> WithDefault<Self>
    where
        Self: Sized,
    {
        WithDefault::new(self, value.into())
    }

    /// Map the validated value.
    fn transform<F>(self, f: F) -> Transform<Self, F>
    where
        Self: Sized,
        F: Fn(Value) -> Value + Send + Sync,
    {
        Transform::new(self, f)
    }

    /// Record a `custom` issue when `check` rejects the validated value.
    fn refine<F>(self, check: F, message: impl Into<String>) -> Refine<Self, F>
    where
        Self: Sized,
        F: Fn(&Value) -> bool + Send + Sync,
    {
        Refine::new(self, check, message.into())
    }

    /// Like [`SchemaExt::refine`], with a check that must be awaited.
    ///
    /// The resulting schema reports `is_async() == true`.
    fn refine_async<F>(self, check: F, message: impl Into<String>) -> AsyncRefine<Self, F>
    where
        Self: Sized,
        F: Fn(Value) -> BoxFuture<'static, bool> + Send + Sync,
    {
        AsyncRefine::new(self, check, message.into())
    }
}

impl<S: Schema + ?Sized> SchemaExt for S {}
