use futures::future::BoxFuture;

use crate::context::ParseContext;
use crate::fanout::{fan_out, fan_out_async, unzip, Slot, SlotResult};
use crate::issue::IssueKind;
use crate::schema::{Schema, SchemaRef};
use crate::status::{merge_array, ParseOutcome, ParseStatus};
use crate::tuple::Tuple;
use crate::value::{ParsedType, Value};

/// Tuple whose trailing positions may be omitted
///
/// No position is flagged optional up front. On every call, input shorter
/// than the declared arity is padded with [`Value::Undefined`], and whether a
/// missing position was allowed to be missing is read off how its schema
/// treated the padding: schemas that accept an absent value (`optional()`,
/// `default(..)`, `unknown()`) make the position optional, anything else makes
/// it required. The required length is one past the last padded position that
/// did not validate cleanly.
///
/// Input longer than the declared arity is validated against the rest schema
/// when one is attached, and otherwise reported as `too_big` (non-fatal) and
/// truncated.
///
/// When the output has exactly the declared arity, trailing
/// [`Value::Undefined`] entries are removed, so an optional suffix that was
/// not supplied does not show up in the result.
///
/// # Examples
///
/// ```
/// use optuple::prelude::*;
///
/// let schema = tuple_with_optional([
///     boolean().boxed(),
///     number().boxed(),
///     string().optional().boxed(),
///     number().optional().boxed(),
/// ]);
///
/// assert_eq!(schema.parse(seq![true, 1]).unwrap(), seq![true, 1]);
/// assert_eq!(schema.parse(seq![true, 1, "hello"]).unwrap(), seq![true, 1, "hello"]);
///
/// let err = schema.parse(seq![true]).unwrap_err();
/// assert_eq!(err.codes(), vec!["too_small"]);
/// ```
#[derive(Debug, Clone)]
pub struct TupleWithOptional {
    items: Vec<SchemaRef>,
    rest: Option<SchemaRef>,
}

impl TupleWithOptional {
    /// Return a copy of this tuple that validates excess elements with `schema`.
    ///
    /// The receiver is left unchanged.
    pub fn rest(&self, schema: SchemaRef) -> Self {
        TupleWithOptional {
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

    /// Plain [`Tuple`] with the same items and rest, requiring every declared
    /// position.
    pub fn to_tuple(&self) -> Tuple {
        Tuple::from_parts(self.items.clone(), self.rest.clone())
    }

    /// Classify the input and line elements up with schemas.
    ///
    /// Returns the incoming status, the supplied length and the slots to
    /// validate, or `None` when the input is not a sequence.
    fn reconcile_arity(
        &self,
        input: Value,
        ctx: &mut ParseContext,
    ) -> Option<(ParseStatus, usize, Vec<Slot<'_>>)> {
        let mut elements = match input {
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
        let mut status = ParseStatus::Valid;
        let mut schemas: Vec<&SchemaRef> = self.items.iter().collect();

        if elements.len() > declared {
            match &self.rest {
                Some(rest) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        declared,
                        supplied = elements.len(),
                        "validating excess tuple elements with rest schema"
                    );
                    schemas.resize(elements.len(), rest);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        declared,
                        supplied = elements.len(),
                        "dropping excess tuple elements"
                    );
                    ctx.add_issue(IssueKind::array_too_big(declared));
                    status = ParseStatus::Dirty;
                    elements.truncate(declared);
                }
            }
        }

        let supplied = elements.len();
        if supplied < declared {
            #[cfg(feature = "tracing")]
            tracing::debug!(declared, supplied, "padding tuple input with absent values");
            elements.resize(declared, Value::Undefined);
        }

        let slots = schemas
            .into_iter()
            .zip(elements)
            .enumerate()
            .map(|(index, (schema, value))| Slot::new(index, &**schema, value))
            .collect();
        Some((status, supplied, slots))
    }

    /// Decide the required length, then either fail with `too_small` or
    /// commit the slot issues and assemble the output.
    fn reconcile_results(
        &self,
        status: ParseStatus,
        supplied: usize,
        results: Vec<SlotResult>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome {
        let required = results
            .iter()
            .skip(supplied)
            .rposition(|result| !result.outcome.is_valid())
            .map_or(supplied, |offset| supplied + offset + 1);

        if required > supplied {
            #[cfg(feature = "tracing")]
            tracing::debug!(required, supplied, "tuple input shorter than required");
            ctx.add_issue(IssueKind::array_too_small(required));
            return ParseOutcome::Aborted;
        }

        let (outcomes, issues) = unzip(results);
        ctx.absorb(issues);

        let declared = self.items.len();
        merge_array(status, outcomes).map(|mut values| {
            if values.len() == declared {
                collapse_trailing_absent(&mut values);
            }
            Value::Array(values)
        })
    }
}

fn collapse_trailing_absent(values: &mut Vec<Value>) {
    let keep = values
        .iter()
        .rposition(|value| !value.is_undefined())
        .map_or(0, |last| last + 1);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        removed = values.len() - keep,
        "collapsing trailing absent values"
    );
    values.truncate(keep);
}

impl Schema for TupleWithOptional {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        let Some((status, supplied, slots)) = self.reconcile_arity(input, ctx) else {
            return ParseOutcome::Aborted;
        };
        let results = fan_out(slots, ctx);
        self.reconcile_results(status, supplied, results, ctx)
    }

    fn run_async<'a>(
        &'a self,
        input: Value,
        ctx: &'a mut ParseContext,
    ) -> BoxFuture<'a, ParseOutcome> {
        Box::pin(async move {
            let Some((status, supplied, slots)) = self.reconcile_arity(input, ctx) else {
                return ParseOutcome::Aborted;
            };
            let results = fan_out_async(slots, ctx).await;
            self.reconcile_results(status, supplied, results, ctx)
        })
    }

    fn is_async(&self) -> bool {
        self.items.iter().chain(&self.rest).any(|schema| schema.is_async())
    }
}

/// Tuple of `items` whose trailing optional positions may be omitted.
///
/// Attach a rest schema with [`TupleWithOptional::rest`].
pub fn tuple_with_optional(items: impl IntoIterator<Item = SchemaRef>) -> TupleWithOptional {
    TupleWithOptional {
        items: items.into_iter().collect(),
        rest: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseMode;
    use crate::issue::{IssueCode, PathSegment};
    use crate::schema::SchemaExt;
    use crate::schemas::{boolean, number, string, unknown};
    use crate::seq;

    fn run(schema: &TupleWithOptional, input: Value) -> (ParseOutcome, ParseContext) {
        let mut ctx = ParseContext::new(ParseMode::Sync);
        let outcome = schema.run(input, &mut ctx);
        (outcome, ctx)
    }

    fn bool_number_optional() -> TupleWithOptional {
        tuple_with_optional([
            boolean().boxed(),
            number().boxed(),
            string().optional().boxed(),
        ])
    }

    #[test]
    fn test_required_length_comes_from_last_rejecting_pad() {
        let (outcome, ctx) = run(&bool_number_optional(), seq![true]);
        assert!(outcome.is_aborted());
        assert_eq!(ctx.issues().len(), 1);
        assert_eq!(ctx.issues()[0].kind(), &IssueKind::array_too_small(2));
        assert!(ctx.issues()[0].path().is_empty());
    }

    #[test]
    fn test_too_small_discards_slot_issues() {
        let (_, ctx) = run(&bool_number_optional(), seq![1]);
        let codes: Vec<_> = ctx.issues().iter().map(|i| i.code()).collect();
        assert_eq!(codes, vec![IssueCode::TooSmall]);
    }

    #[test]
    fn test_empty_input_with_required_first_position() {
        let (_, ctx) = run(&bool_number_optional(), seq![]);
        assert_eq!(ctx.issues()[0].kind(), &IssueKind::array_too_small(2));
    }

    #[test]
    fn test_optional_suffix_is_collapsed() {
        let (outcome, ctx) = run(&bool_number_optional(), seq![true, 1]);
        assert_eq!(outcome, ParseOutcome::Valid(seq![true, 1]));
        assert!(ctx.issues().is_empty());
    }

    #[test]
    fn test_explicit_trailing_undefined_is_collapsed() {
        let (outcome, _) = run(&bool_number_optional(), seq![true, 1, Value::Undefined]);
        assert_eq!(outcome, ParseOutcome::Valid(seq![true, 1]));
    }

    #[test]
    fn test_interior_undefined_is_kept() {
        let schema = tuple_with_optional([
            boolean().boxed(),
            number().optional().boxed(),
            string().optional().boxed(),
        ]);
        let (outcome, _) = run(&schema, seq![true, Value::Undefined, "x"]);
        assert_eq!(outcome, ParseOutcome::Valid(seq![true, Value::Undefined, "x"]));
    }

    #[test]
    fn test_excess_without_rest_is_dirty_and_truncated() {
        let (outcome, ctx) = run(&bool_number_optional(), seq![true, 1, "a", "dropped"]);
        assert_eq!(outcome, ParseOutcome::Dirty(seq![true, 1, "a"]));
        assert_eq!(ctx.issues()[0].kind(), &IssueKind::array_too_big(3));
        assert_eq!(ctx.issues().len(), 1);
    }

    #[test]
    fn test_rest_output_is_not_collapsed() {
        let schema = tuple_with_optional([boolean().boxed()]).rest(unknown().boxed());
        let (outcome, _) = run(&schema, seq![true, Value::Undefined]);
        assert_eq!(outcome, ParseOutcome::Valid(seq![true, Value::Undefined]));
    }

    #[test]
    fn test_slot_issues_are_index_prefixed() {
        let (outcome, ctx) = run(&bool_number_optional(), seq![true, "1", 2]);
        assert!(outcome.is_aborted());
        let paths: Vec<_> = ctx.issues().iter().map(|i| i.path().to_vec()).collect();
        assert_eq!(
            paths,
            vec![vec![PathSegment::Index(1)], vec![PathSegment::Index(2)]]
        );
    }

    #[test]
    fn test_non_sequence_input() {
        let (outcome, ctx) = run(&bool_number_optional(), Value::from("tuple"));
        assert!(outcome.is_aborted());
        assert_eq!(
            ctx.issues()[0].kind(),
            &IssueKind::InvalidType {
                expected: ParsedType::Array,
                received: ParsedType::String,
            }
        );
    }

    #[test]
    fn test_dirty_slot_counts_as_failing_probe() {
        let schema = tuple_with_optional([
            boolean().boxed(),
            number()
                .default(0)
                .refine(|v| v.as_f64().is_some_and(|n| n > 0.0), "positive")
                .boxed(),
        ]);
        let (outcome, ctx) = run(&schema, seq![true]);
        assert!(outcome.is_aborted());
        assert_eq!(ctx.issues()[0].kind(), &IssueKind::array_too_small(2));
    }

    #[test]
    fn test_empty_tuple() {
        let schema = tuple_with_optional(Vec::<SchemaRef>::new());
        assert_eq!(schema.parse(seq![]).unwrap(), seq![]);
        assert_eq!(schema.parse(seq![1]).unwrap_err().codes(), vec!["too_big"]);
    }

    #[test]
    fn test_to_tuple_requires_full_arity() {
        let optional = bool_number_optional();
        assert!(optional.parse(seq![true, 1]).is_ok());
        let err = optional.to_tuple().parse(seq![true, 1]).unwrap_err();
        assert_eq!(err.issues()[0].kind(), &IssueKind::array_too_small(3));
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_padding_and_too_small_are_traced() {
        let _ = bool_number_optional().parse(seq![true]);
        assert!(logs_contain("padding tuple input with absent values"));
        assert!(logs_contain("tuple input shorter than required"));
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_truncation_is_traced() {
        let _ = bool_number_optional().parse(seq![true, 1, "a", "b"]);
        assert!(logs_contain("dropping excess tuple elements"));
    }
}
