//! Validating command arguments with an optional suffix
//!
//! Run with: cargo run --example tuple_validation --features tracing

use futures::future::BoxFuture;
use optuple::prelude::*;

fn report(label: &str, result: Result<Value, ParseError>) {
    match result {
        Ok(value) => tracing::info!("{} -> {}", label, value),
        Err(err) => {
            for issue in err.issues() {
                tracing::warn!(code = issue.code().as_str(), "{} -> {}", label, issue);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // move <x> <y> [speed] [label]
    let command = tuple_with_optional([
        number().boxed(),
        number().boxed(),
        number().default(1).boxed(),
        string().max(16).optional().boxed(),
    ]);

    let inputs = [
        seq![3, 4],
        seq![3, 4, 2, "fast"],
        seq![3],
        seq![3, 4, 2, "fast", "extra"],
        seq![3, "four"],
    ];
    for input in inputs {
        let label = input.to_string();
        report(&label, command.parse(input));
    }

    // Variadic tail, checked asynchronously
    let tagged = tuple_with_optional([string().boxed()]).rest(
        string()
            .refine_async(
                |tag| -> BoxFuture<'static, bool> {
                    Box::pin(async move { tag.as_str().is_some_and(|t| !t.starts_with('_')) })
                },
                "Tags must not start with an underscore",
            )
            .boxed(),
    );

    for input in [seq!["post", "rust", "async"], seq!["post", "_hidden"]] {
        let label = input.to_string();
        report(&label, tagged.parse_async(input).await);
    }

    tracing::info!("sync parse of async schema: {:?}", tagged.parse(seq!["post"]));
}
