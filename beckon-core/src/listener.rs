//! # Listener
//!
//! A listener interprets raw events for one purpose. It narrows the input to
//! the event kind it cares about, applies its filters, and yields a typed
//! output, or `None` when the event is not for it.
//!
//! Listeners are synchronous: they run on the delivery path and must not
//! block. Combinators run after the listener they wrap, so filters compose in
//! the order they are written.

use crate::message::Message;
use std::marker::PhantomData;

/// Interprets events of type `In`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for `{In}`",
    label = "missing `Listener` implementation",
    note = "Listeners must implement the `listen` method to process `{In}`."
)]
pub trait Listener<In: Message>: Send + Sync + 'static {
    /// What the listener yields for an accepted event.
    type Output: Message;

    /// Interpret one event. `None` means the event is ignored.
    fn listen(&self, event: &In) -> Option<Self::Output>;

    /// Keeps only outputs for which `predicate` returns `true`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        Filter {
            listener: self,
            predicate,
        }
    }

    /// Transforms accepted outputs.
    fn map<F, Out>(self, mapper: F) -> Map<Self, F, Out>
    where
        Self: Sized,
        Out: Message,
        F: Fn(Self::Output) -> Out + Send + Sync + 'static,
    {
        Map {
            listener: self,
            mapper,
            _phantom: PhantomData,
        }
    }
}

/// Listener returned by [`Listener::filter`].
pub struct Filter<L, F> {
    listener: L,
    predicate: F,
}

impl<L, F, In> Listener<In> for Filter<L, F>
where
    In: Message,
    L: Listener<In>,
    F: Fn(&L::Output) -> bool + Send + Sync + 'static,
{
    type Output = L::Output;

    fn listen(&self, event: &In) -> Option<Self::Output> {
        self.listener
            .listen(event)
            .filter(|output| (self.predicate)(output))
    }
}

/// Listener returned by [`Listener::map`].
pub struct Map<L, F, Out> {
    listener: L,
    mapper: F,
    _phantom: PhantomData<fn() -> Out>,
}

impl<L, F, In, Out> Listener<In> for Map<L, F, Out>
where
    In: Message,
    L: Listener<In>,
    Out: Message,
    F: Fn(L::Output) -> Out + Send + Sync + 'static,
{
    type Output = Out;

    fn listen(&self, event: &In) -> Option<Out> {
        self.listener.listen(event).map(&self.mapper)
    }
}
