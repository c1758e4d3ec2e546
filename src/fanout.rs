//! Running a schema per position
//!
//! Sequence schemas pair every element with the schema that validates it and
//! hand the pairs to [`fan_out`] (sync) or [`fan_out_async`] (async). Each
//! position runs in its own child context, so its issues are returned in a
//! [`SlotResult`] instead of being written to the caller's context; the caller
//! decides whether to [`absorb`](crate::ParseContext::absorb) them.
//!
//! In async mode every position is started before any is awaited and all of
//! them are awaited, even after a failure. Results always come back in
//! position order regardless of completion order.

use std::future::Future;

use futures::future::join_all;

use crate::context::ParseContext;
use crate::issue::{Issue, PathSegment};
use crate::schema::Schema;
use crate::status::ParseOutcome;
use crate::value::Value;

/// One element paired with its schema
pub(crate) struct Slot<'a> {
    pub(crate) index: usize,
    pub(crate) schema: &'a dyn Schema,
    pub(crate) value: Value,
}

impl<'a> Slot<'a> {
    pub(crate) fn new(index: usize, schema: &'a dyn Schema, value: Value) -> Self {
        Slot {
            index,
            schema,
            value,
        }
    }
}

/// Outcome of one position plus the issues it recorded
#[derive(Debug)]
pub(crate) struct SlotResult {
    pub(crate) outcome: ParseOutcome,
    pub(crate) issues: Vec<Issue>,
}

pub(crate) fn fan_out(slots: Vec<Slot<'_>>, ctx: &ParseContext) -> Vec<SlotResult> {
    slots
        .into_iter()
        .map(|slot| {
            let mut child = ctx.child(PathSegment::Index(slot.index));
            let outcome = slot.schema.run(slot.value, &mut child);
            SlotResult {
                outcome,
                issues: child.into_issues(),
            }
        })
        .collect()
}

pub(crate) fn fan_out_async<'a>(
    slots: Vec<Slot<'a>>,
    ctx: &ParseContext,
) -> impl Future<Output = Vec<SlotResult>> + Send + 'a {
    let pending: Vec<_> = slots
        .into_iter()
        .map(|slot| {
            let mut child = ctx.child(PathSegment::Index(slot.index));
            async move {
                let outcome = slot.schema.run_async(slot.value, &mut child).await;
                SlotResult {
                    outcome,
                    issues: child.into_issues(),
                }
            }
        })
        .collect();
    join_all(pending)
}

/// Split results into outcomes and the concatenated issue buffer.
pub(crate) fn unzip(results: Vec<SlotResult>) -> (Vec<ParseOutcome>, Vec<Issue>) {
    let mut outcomes = Vec::with_capacity(results.len());
    let mut issues = Vec::new();
    for result in results {
        outcomes.push(result.outcome);
        issues.extend(result.issues);
    }
    (outcomes, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseMode;
    use crate::schemas::{number, string};

    #[test]
    fn test_fan_out_uses_child_paths() {
        let num = number();
        let text = string();
        let ctx = ParseContext::with_path(ParseMode::Sync, vec![PathSegment::from("args")]);
        let results = fan_out(
            vec![
                Slot::new(0, &num, Value::from("x")),
                Slot::new(1, &text, Value::from("y")),
            ],
            &ctx,
        );

        assert!(results[0].outcome.is_aborted());
        assert_eq!(
            results[0].issues[0].path(),
            &[PathSegment::from("args"), PathSegment::Index(0)]
        );
        assert!(results[1].outcome.is_valid());
        assert!(results[1].issues.is_empty());
        assert!(ctx.issues().is_empty());
    }

    #[tokio::test]
    async fn test_fan_out_async_matches_sync() {
        let num = number();
        let ctx = ParseContext::new(ParseMode::Async);
        let slots = || {
            vec![
                Slot::new(0, &num as &dyn Schema, Value::from(1)),
                Slot::new(1, &num as &dyn Schema, Value::Undefined),
            ]
        };
        let (sync_outcomes, sync_issues) = unzip(fan_out(slots(), &ctx));
        let (async_outcomes, async_issues) = unzip(fan_out_async(slots(), &ctx).await);
        assert_eq!(sync_outcomes, async_outcomes);
        assert_eq!(sync_issues, async_issues);
    }
}
