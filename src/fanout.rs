//! Bounded, order-preserving concurrent map over independent I/O calls.

use std::future::Future;

use futures_util::stream::{self, StreamExt};

/// Run `f` over every item with at most `parallelism` calls in flight.
///
/// Output slot `i` always holds the result for `items[i]`, whatever order
/// the calls complete in. The returned future resolves only after every
/// call has finished.
pub async fn ordered_map<'a, T, O, F, Fut>(items: &'a [T], parallelism: usize, f: F) -> Vec<O>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = O>,
{
    stream::iter(items)
        .map(f)
        .buffered(parallelism.max(1))
        .collect()
        .await
}
