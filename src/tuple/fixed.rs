use futures::future::BoxFuture;

use crate::context::ParseContext;
use crate::fanout::{fan_out, fan_out_async, unzip, Slot};
use crate::issue::IssueKind;
use crate::schema::{Schema, SchemaRef};
use crate::status::{merge_array, ParseOutcome, ParseStatus};
use crate::value::{ParsedType, Value};

/// Fixed-arity tuple with an optional rest schema
///
/// Every declared position is required: input shorter than the declared
/// arity fails with `too_small` before any element is validated, whatever the
/// element schemas would accept. Without a rest schema, extra elements are
/// reported as `too_big` and dropped unvalidated.
///
/// Usually obtained from [`TupleWithOptional::to_tuple`](crate::TupleWithOptional::to_tuple)
/// for interop with code that expects every position to be present.
#[derive(Debug, Clone)]
pub struct Tuple {
    items: Vec<SchemaRef>,
    rest: Option<SchemaRef>,
}

impl Tuple {
    pub(crate) fn from_parts(items: Vec<SchemaRef>, rest: Option<SchemaRef>) -> Self {
        Tuple { items, rest }
    }

    /// Return a copy of this tuple that validates excess elements with `schema`.
    pub fn rest(&self, schema: SchemaRef) -> Self {
        Tuple {
            items: self.items.clone(),
            rest: Some(schema),
        }
    }

    /// Declared per-position schemas.
    pub fn items(&self) -> &[SchemaRef] {
        &self.items
    }

    /// Schema for excess elements, if any.
    pub fn rest_schema(&self) -> Option<&SchemaRef> {
        self.rest.as_ref()
    }

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

        let declared = self.items.len();
        if elements.len() < declared {
            ctx.add_issue(IssueKind::array_too_small(declared));
            return None;
        }

        let mut status = ParseStatus::Valid;
        if self.rest.is_none() && elements.len() > declared {
            ctx.add_issue(IssueKind::array_too_big(declared));
            status = ParseStatus::Dirty;
        }
        Some((status, elements))
    }

    fn slots(&self, elements: Vec<Value>) -> Vec<Slot<'_>> {
        elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let schema = self.items.get(index).or(self.rest.as_ref())?;
                Some(Slot::new(index, &**schema, value))
            })
            .collect()
    }
}

impl Schema for Tuple {
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
        self.items.iter().chain(&self.rest).any(|schema| schema.is_async())
    }
}

/// Plain tuple of `items`, each position required.
pub fn tuple(items: impl IntoIterator<Item = SchemaRef>) -> Tuple {
    Tuple::from_parts(items.into_iter().collect(), None)
}
