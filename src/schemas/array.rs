//! Homogeneous sequences

use futures::future::BoxFuture;

use crate::context::ParseContext;
use crate::fanout::{fan_out, fan_out_async, unzip, Slot};
use crate::issue::IssueKind;
use crate::schema::Schema;
use crate::status::{merge_array, ParseOutcome, ParseStatus};
use crate::value::{ParsedType, Value};

/// Accepts sequences whose every element matches one schema
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    element: S,
    min: Option<usize>,
    max: Option<usize>,
}

impl<S> ArraySchema<S> {
    /// Require at least `len` elements.
    pub fn min(mut self, len: usize) -> Self {
        self.min = Some(len);
        self
    }

    /// Allow at most `len` elements.
    pub fn max(mut self, len: usize) -> Self {
        self.max = Some(len);
        self
    }

    /// The element schema.
    pub fn element(&self) -> &S {
        &self.element
    }
}

impl<S: Schema> ArraySchema<S> {
    /// Classify the input and check the length bounds.
    ///
    /// Returns `None` for non-sequence input after recording the issue.
    fn prepare(&self, input: Value, ctx: &mut ParseContext) -> Option<(ParseStatus, Vec<Value>)> {
        let elements = match input {
            Value::Array(elements) => elements,
            other => {
                ctx.add_issue(IssueKind::InvalidType {
                    expected: ParsedType::Array,
                    received: other.parsed_type(),
                });
                return None;
            }
        };

        let mut status = ParseStatus::Valid;
        if let Some(minimum) = self.min.filter(|min| elements.len() < *min) {
            ctx.add_issue(IssueKind::array_too_small(minimum));
            status = ParseStatus::Dirty;
        }
        if let Some(maximum) = self.max.filter(|max| elements.len() > *max) {
            ctx.add_issue(IssueKind::array_too_big(maximum));
            status = ParseStatus::Dirty;
        }
        Some((status, elements))
    }

    fn slots(&self, elements: Vec<Value>) -> Vec<Slot<'_>> {
        elements
            .into_iter()
            .enumerate()
            .map(|(index, value)| Slot::new(index, &self.element, value))
            .collect()
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        let Some((status, elements)) = self.prepare(input, ctx) else {
            return ParseOutcome::Aborted;
        };
        let (outcomes, issues) = unzip(fan_out(self.slots(elements), ctx));
        ctx.absorb(issues);
        merge_array(status, outcomes).map(Value::Array)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        Box::pin(async move {
            let Some((status, elements)) = self.prepare(input, ctx) else {
                return ParseOutcome::Aborted;
            };
            let pending = fan_out_async(self.slots(elements), ctx);
            let (outcomes, issues) = unzip(pending.await);
            ctx.absorb(issues);
            merge_array(status, outcomes).map(Value::Array)
        })
    }

    fn is_async(&self) -> bool {
        self.element.is_async()
    }
}

/// Schema accepting sequences of `element`.
pub fn array<S: Schema>(element: S) -> ArraySchema<S> {
    ArraySchema {
        element,
        min: None,
        max: None,
    }
}
