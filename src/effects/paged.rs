//! Paginated fetch lifecycle with list accumulation.

use crate::core::{IntoOutcome, Outcome, PagingStatus, PaginationState, Snapshot};
use crate::effects::machine::{FetchEngine, Transitions};
use crate::effects::observer::StatusObserver;
use std::future::Future;
use tracing::{debug, warn};

/// How a received page joins the records already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Replace,
    Append,
}

impl FetchEngine {
    /// Drive a paginated fetch, dispatching on the cursor's page.
    ///
    /// Page 1 takes the first-page path: status `Loading`, the list is
    /// replaced by the received page. Later pages take the continuation
    /// path: the configured guard may refuse the fetch outright (no emits,
    /// no notifications, `pending` is dropped unpolled); otherwise status
    /// `Paging` and the received page is appended. Either path ends at
    /// `Initial`.
    ///
    /// On success the cursor advances one page and `reached_max` is set by
    /// the configured rule. On failure or transport exception only the
    /// error message changes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fetchstate::core::{Outcome, PaginationState, Query, Snapshot};
    /// use fetchstate::effects::{FetchEngine, Silent};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let engine = FetchEngine::default();
    /// let input = PaginationState::new(Query::new(2).unwrap());
    /// let mut latest = None;
    ///
    /// engine
    ///     .run_paged(
    ///         async { Outcome::success(vec!["a", "b"]) },
    ///         input,
    ///         |state| latest = Some(state),
    ///         &mut Silent,
    ///     )
    ///     .await;
    ///
    /// let latest = latest.unwrap();
    /// assert_eq!(latest.list(), &["a", "b"]);
    /// assert_eq!(latest.query().page(), 2);
    /// assert!(latest.is_settled());
    /// # });
    /// ```
    pub async fn run_paged<T, P, F, E, O>(
        &self,
        pending: F,
        input: PaginationState<T, P>,
        emit: E,
        on_status: &mut O,
    ) where
        T: Clone,
        P: Clone,
        F: Future,
        F::Output: IntoOutcome<Vec<T>>,
        E: FnMut(PaginationState<T, P>),
        O: StatusObserver<PagingStatus> + ?Sized,
    {
        if input.query().is_first_page() {
            let mut transitions = Transitions::new(emit, on_status);
            let query = input.query().clone().first_page();
            let loading = transitions.enter(input.with_query(query), PagingStatus::Loading);

            self.settle_page(pending, loading, Merge::Replace, &mut transitions)
                .await;
            return;
        }

        let guard = self.config.continuation_guard;
        if guard.blocks(input.status(), input.reached_max()) {
            debug!(
                page = input.query().page(),
                status = %input.status(),
                reached_max = input.reached_max(),
                ?guard,
                "continuation refused"
            );
            return;
        }

        let mut transitions = Transitions::new(emit, on_status);
        let paging = transitions.enter(input, PagingStatus::Paging);
        self.settle_page(pending, paging, Merge::Append, &mut transitions)
            .await;
    }

    async fn settle_page<T, P, F, E, O>(
        &self,
        pending: F,
        state: PaginationState<T, P>,
        merge: Merge,
        transitions: &mut Transitions<'_, E, O>,
    ) where
        T: Clone,
        P: Clone,
        F: Future,
        F::Output: IntoOutcome<Vec<T>>,
        E: FnMut(PaginationState<T, P>),
        O: StatusObserver<PagingStatus> + ?Sized,
    {
        let settled = match pending.await.into_outcome() {
            Ok(Outcome::Success(page)) => {
                let page = page.unwrap_or_default();
                let received = page.len();
                let reached_max = self
                    .config
                    .reached_max_rule
                    .reached_max(received, state.query().size());
                let next = state.query().clone().next_page();

                debug!(
                    page = state.query().page(),
                    received,
                    reached_max,
                    "page received"
                );

                let state = match merge {
                    Merge::Replace => state.with_list(page),
                    Merge::Append => state.append(page),
                };
                let state = self.clear_stale(state.with_reached_max(reached_max).with_query(next));
                transitions.enter(state, PagingStatus::Success)
            }
            Ok(Outcome::Failure(message)) => {
                transitions.enter(state.with_error(message), PagingStatus::Error)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    page = state.query().page(),
                    "page fetch failed before producing an outcome"
                );
                transitions.enter(state.with_error(err.to_string()), PagingStatus::Error)
            }
        };

        transitions.enter(settled, PagingStatus::Initial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FetchEngineBuilder;
    use crate::core::{ContinuationGuard, Query, ReachedMaxRule};
    use crate::effects::observer::Silent;

    fn state_at(page: u32, size: u32, list: Vec<u32>) -> PaginationState<u32> {
        PaginationState::new(Query::at(page, size).unwrap()).with_list(list)
    }

    async fn run(
        engine: &FetchEngine,
        outcome: Outcome<Vec<u32>>,
        input: PaginationState<u32>,
    ) -> (Vec<PaginationState<u32>>, Vec<PagingStatus>) {
        let mut emitted = Vec::new();
        let mut notified = Vec::new();

        engine
            .run_paged(
                async { outcome },
                input,
                |state| emitted.push(state),
                &mut |status: PagingStatus| notified.push(status),
            )
            .await;

        (emitted, notified)
    }

    #[tokio::test]
    async fn first_page_replaces_list_and_advances() {
        let input = state_at(1, 10, vec![99]);
        let page: Vec<u32> = (0..10).collect();

        let (emitted, notified) = run(&FetchEngine::default(), Outcome::success(page.clone()), input).await;

        assert_eq!(
            notified,
            vec![
                PagingStatus::Loading,
                PagingStatus::Success,
                PagingStatus::Initial
            ]
        );
        let last = emitted.last().unwrap();
        assert_eq!(last.list(), page.as_slice());
        assert!(last.reached_max());
        assert_eq!(last.query().page(), 2);
    }

    #[tokio::test]
    async fn first_page_short_page_does_not_reach_max() {
        let (emitted, _) = run(
            &FetchEngine::default(),
            Outcome::success(vec![1, 2]),
            state_at(1, 10, vec![]),
        )
        .await;

        assert!(!emitted.last().unwrap().reached_max());
    }

    #[tokio::test]
    async fn continuation_appends_in_fetch_order() {
        let input = state_at(2, 10, vec![1]).with_reached_max(true);

        let (emitted, notified) =
            run(&FetchEngine::default(), Outcome::success(vec![2, 3]), input).await;

        assert_eq!(
            notified,
            vec![
                PagingStatus::Paging,
                PagingStatus::Success,
                PagingStatus::Initial
            ]
        );
        assert_eq!(emitted[0].list(), &[1]);
        let last = emitted.last().unwrap();
        assert_eq!(last.list(), &[1, 2, 3]);
        assert!(!last.reached_max());
        assert_eq!(last.query().page(), 3);
    }

    #[tokio::test]
    async fn default_guard_refuses_without_reached_max() {
        let input = state_at(2, 10, vec![1]);

        let (emitted, notified) =
            run(&FetchEngine::default(), Outcome::success(vec![2]), input).await;

        assert!(emitted.is_empty());
        assert!(notified.is_empty());
    }

    #[tokio::test]
    async fn guard_refuses_while_paging() {
        let input = state_at(3, 10, vec![1])
            .with_reached_max(true)
            .with_status(PagingStatus::Paging);

        let (emitted, notified) =
            run(&FetchEngine::default(), Outcome::success(vec![2]), input).await;

        assert!(emitted.is_empty());
        assert!(notified.is_empty());
    }

    #[tokio::test]
    async fn blocked_continuation_never_polls_pending() {
        let polled = std::cell::Cell::new(false);
        let pending = async {
            polled.set(true);
            Outcome::success(vec![1u32])
        };

        FetchEngine::default()
            .run_paged(pending, state_at(2, 10, vec![]), |_| {}, &mut Silent)
            .await;

        assert!(!polled.get());
    }

    #[tokio::test]
    async fn exhaustion_guard_stops_after_short_page() {
        let engine = FetchEngineBuilder::new()
            .continuation_guard(ContinuationGuard::BlockWhenExhausted)
            .reached_max_rule(ReachedMaxRule::ShortPage)
            .build()
            .unwrap();

        let (emitted, _) = run(&engine, Outcome::success(vec![1, 2, 3]), state_at(1, 3, vec![])).await;
        let after_first = emitted.last().unwrap().clone();
        assert!(!after_first.reached_max());

        let (emitted, _) = run(&engine, Outcome::success(vec![4]), after_first).await;
        let after_second = emitted.last().unwrap().clone();
        assert_eq!(after_second.list(), &[1, 2, 3, 4]);
        assert!(after_second.reached_max());

        let (emitted, notified) = run(&engine, Outcome::success(vec![5]), after_second).await;
        assert!(emitted.is_empty());
        assert!(notified.is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_list_query_and_reached_max() {
        let input = state_at(2, 10, vec![1, 2]).with_reached_max(true);

        let (emitted, notified) = run(
            &FetchEngine::default(),
            Outcome::failure("server unavailable"),
            input,
        )
        .await;

        assert_eq!(
            notified,
            vec![
                PagingStatus::Paging,
                PagingStatus::Error,
                PagingStatus::Initial
            ]
        );
        let last = emitted.last().unwrap();
        assert_eq!(last.list(), &[1, 2]);
        assert_eq!(last.query().page(), 2);
        assert!(last.reached_max());
        assert_eq!(last.error_message(), Some("server unavailable"));
    }

    #[tokio::test]
    async fn transport_error_on_first_page() {
        let mut emitted = Vec::new();
        let pending = async { Err::<Outcome<Vec<u32>>, _>("dns lookup failed") };

        FetchEngine::default()
            .run_paged(
                pending,
                state_at(1, 10, vec![]),
                |state| emitted.push(state),
                &mut Silent,
            )
            .await;

        let statuses: Vec<_> = emitted.iter().map(|s| s.status()).collect();
        assert_eq!(
            statuses,
            vec![
                PagingStatus::Loading,
                PagingStatus::Error,
                PagingStatus::Initial
            ]
        );
        assert_eq!(emitted[2].error_message(), Some("dns lookup failed"));
        assert_eq!(emitted[2].query().page(), 1);
    }

    #[tokio::test]
    async fn empty_success_is_an_empty_page() {
        let (emitted, _) = run(
            &FetchEngine::default(),
            Outcome::empty(),
            state_at(1, 10, vec![7]),
        )
        .await;

        let last = emitted.last().unwrap();
        assert!(last.is_empty());
        assert!(!last.reached_max());
        assert_eq!(last.query().page(), 2);
    }

    #[tokio::test]
    async fn first_page_path_ignores_previous_status() {
        let input = state_at(1, 10, vec![5]).with_status(PagingStatus::Paging);

        let (_, notified) = run(&FetchEngine::default(), Outcome::success(vec![1]), input).await;

        assert_eq!(notified[0], PagingStatus::Loading);
    }

    #[tokio::test]
    async fn transport_error_on_continuation_keeps_listing() {
        let mut emitted = Vec::new();
        let input = state_at(3, 2, vec![1, 2, 3, 4]).with_reached_max(true);
        let pending = async { Err::<Outcome<Vec<u32>>, _>("connection reset by peer") };

        FetchEngine::default()
            .run_paged(pending, input, |state| emitted.push(state), &mut Silent)
            .await;

        let statuses: Vec<_> = emitted.iter().map(|s| s.status()).collect();
        assert_eq!(
            statuses,
            vec![
                PagingStatus::Paging,
                PagingStatus::Error,
                PagingStatus::Initial
            ]
        );
        let last = emitted.last().unwrap();
        assert_eq!(last.list(), &[1, 2, 3, 4]);
        assert_eq!(last.query().page(), 3);
        assert_eq!(last.query().size(), 2);
        assert!(last.reached_max());
        assert_eq!(last.error_message(), Some("connection reset by peer"));
    }

    #[tokio::test]
    async fn stale_error_cleared_on_both_paths_when_configured() {
        let engine = FetchEngineBuilder::new()
            .clear_stale_error(true)
            .build()
            .unwrap();

        let first = state_at(1, 2, vec![]).with_error("timed out".to_string());
        let (emitted, _) = run(&engine, Outcome::success(vec![1, 2]), first).await;
        assert_eq!(emitted[0].error_message(), Some("timed out"));
        let after_first = emitted.last().unwrap().clone();
        assert_eq!(after_first.error_message(), None);

        let continued = after_first.with_error("timed out again".to_string());
        let (emitted, _) = run(&engine, Outcome::success(vec![3]), continued).await;
        let last = emitted.last().unwrap();
        assert_eq!(last.list(), &[1, 2, 3]);
        assert_eq!(last.error_message(), None);
    }

    #[tokio::test]
    async fn stale_error_retained_by_default() {
        let input = state_at(2, 2, vec![1])
            .with_reached_max(true)
            .with_error("timed out".to_string());

        let (emitted, _) = run(&FetchEngine::default(), Outcome::success(vec![2]), input).await;

        assert_eq!(emitted.last().unwrap().error_message(), Some("timed out"));
    }
}
