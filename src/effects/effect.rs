//! Stillwater effects as the pending operation.
//!
//! An effect's error is treated as a transport exception: the operation
//! never produced an outcome.

use crate::core::{FetchStatus, Outcome, PagingStatus, PaginationState, SingleState};
use crate::effects::machine::FetchEngine;
use crate::effects::observer::StatusObserver;
use std::fmt::Display;
use stillwater::effect::Effect;

impl FetchEngine {
    /// Run `effect` against `env` and drive a single fetch with its result.
    pub async fn run_single_effect<T, Eff, Env, E, O>(
        &self,
        effect: Eff,
        env: &Env,
        input: SingleState<T>,
        emit: E,
        on_status: &mut O,
    ) where
        T: Clone,
        Eff: Effect<Output = Outcome<T>, Env = Env>,
        Eff::Error: Display,
        Env: Clone + Send + Sync + 'static,
        E: FnMut(SingleState<T>),
        O: StatusObserver<FetchStatus> + ?Sized,
    {
        self.run_single(effect.run(env), input, emit, on_status)
            .await
    }

    /// Run `effect` against `env` and drive a paginated fetch with its result.
    pub async fn run_paged_effect<T, P, Eff, Env, E, O>(
        &self,
        effect: Eff,
        env: &Env,
        input: PaginationState<T, P>,
        emit: E,
        on_status: &mut O,
    ) where
        T: Clone,
        P: Clone,
        Eff: Effect<Output = Outcome<Vec<T>>, Env = Env>,
        Eff::Error: Display,
        Env: Clone + Send + Sync + 'static,
        E: FnMut(PaginationState<T, P>),
        O: StatusObserver<PagingStatus> + ?Sized,
    {
        self.run_paged(effect.run(env), input, emit, on_status)
            .await
    }
}
