// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Intent, State, SyncPayload, deserialize_sync_state, reduce};

pub type ReducerFn<S, A> = fn(&S, &A) -> S;

pub type SubscriberFn<S> = Box<dyn FnMut(&S) + Send>;

/// Single owner of a state value. All changes go through [`Store::dispatch`], which
/// runs the reducer and then the subscribers, if the state actually changed.
pub struct Store<S, A>
where
    S: Clone + PartialEq,
{
    state: S,
    reducer: ReducerFn<S, A>,
    subscriber_vec: Vec<SubscriberFn<S>>,
}

/// The store that drives one presentation session.
pub type PlaybackStore = Store<State, Intent>;

impl<S, A> Debug for Store<S, A>
where
    S: Clone + PartialEq + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscriber_vec.len", &self.subscriber_vec.len())
            .finish_non_exhaustive()
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + PartialEq,
{
    pub fn new(state: S, reducer: ReducerFn<S, A>) -> Self {
        Self {
            state,
            reducer,
            subscriber_vec: vec![],
        }
    }

    pub fn get_state(&self) -> &S { &self.state }

    pub fn add_subscriber(&mut self, subscriber_fn: SubscriberFn<S>) -> &mut Self {
        self.subscriber_vec.push(subscriber_fn);
        self
    }

    pub fn clear_subscribers(&mut self) -> &mut Self {
        self.subscriber_vec.clear();
        self
    }

    /// Returns `true` when the state changed (and subscribers ran).
    pub fn dispatch(&mut self, action: &A) -> bool {
        let new_state = (self.reducer)(&self.state, action);
        self.replace_state(new_state)
    }

    /// Apply every action in order, then notify subscribers once.
    pub fn dispatch_batch<'a>(&mut self, actions: impl IntoIterator<Item = &'a A>) -> bool
    where
        A: 'a,
    {
        let new_state = actions
            .into_iter()
            .fold(self.state.clone(), |acc, action| (self.reducer)(&acc, action));
        self.replace_state(new_state)
    }

    fn replace_state(&mut self, new_state: S) -> bool {
        if new_state == self.state {
            return false;
        }
        self.state = new_state;
        self.run_subscribers();
        true
    }

    fn run_subscribers(&mut self) {
        for subscriber_fn in &mut self.subscriber_vec {
            subscriber_fn(&self.state);
        }
    }
}

impl Default for PlaybackStore {
    fn default() -> Self { Self::new(State::default(), reduce) }
}

impl PlaybackStore {
    /// Adopt a snapshot from another device. Last applied wins; nothing is merged.
    pub fn apply_remote_sync(&mut self, payload: SyncPayload) -> bool {
        let intents = deserialize_sync_state(payload);
        self.dispatch_batch(&intents)
    }
}
