//! Message trait for event types.

/// A marker trait for anything that travels over the event bus.
///
/// Messages must be `Send + Sync + 'static` so hooks can hold them across
/// await points and hand them to waiting tasks.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Everything delivered through beckon must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Message for T {}
