//! Deferred effects.
//!
//! An [`Effect`] describes work the host should run later. Components never
//! call user callbacks while handling input; they return an effect instead
//! and the host decides when to run it.
//!
//! # Example
//!
//! ```
//! use spark_widgets::effect::{Effect, EffectQueue};
//!
//! let mut queue = EffectQueue::new();
//! queue.push(Effect::perform(|| "saved"));
//! assert_eq!(queue.run_pending(), vec!["saved"]);
//! ```

use std::collections::VecDeque;
use std::fmt;

/// A one-shot deferred computation yielding a message of type `M`.
pub struct Effect<M> {
    task: Box<dyn FnOnce() -> M + Send>,
}

impl<M> Effect<M> {
    /// Wrap a closure as an effect. The closure does not run until
    /// [`Effect::run`].
    pub fn perform<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self { task: Box::new(f) }
    }

    /// Run the effect, consuming it.
    pub fn run(self) -> M {
        (self.task)()
    }

    /// Transform the message the effect yields.
    pub fn map<N, F>(self, f: F) -> Effect<N>
    where
        M: 'static,
        F: FnOnce(M) -> N + Send + 'static,
    {
        let task = self.task;
        Effect::perform(move || f(task()))
    }
}

impl<M> fmt::Debug for Effect<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Effect(..)")
    }
}

// =============================================================================
// EffectQueue
// =============================================================================

/// FIFO of pending effects for hosts without their own command runtime.
pub struct EffectQueue<M> {
    pending: VecDeque<Effect<M>>,
}

impl<M> EffectQueue<M> {
    pub fn new() -> Self {
        Self { pending: VecDeque::new() }
    }

    pub fn push(&mut self, effect: Effect<M>) {
        self.pending.push_back(effect);
    }

    /// Push the effect if there is one.
    pub fn extend_from(&mut self, effect: Option<Effect<M>>) {
        if let Some(effect) = effect {
            self.push(effect);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run every queued effect in push order and return their messages.
    pub fn run_pending(&mut self) -> Vec<M> {
        let mut out = Vec::with_capacity(self.pending.len());
        while let Some(effect) = self.pending.pop_front() {
            out.push(effect.run());
        }
        tracing::trace!(count = out.len(), "ran pending effects");
        out
    }
}

impl<M> Default for EffectQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for EffectQueue<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectQueue").field("pending", &self.pending.len()).finish()
    }
}
