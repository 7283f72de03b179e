//! Runtime hook registration.
//!
//! Hooks come and go while events are flowing: every wait attaches one and
//! detaches it when it is done.

pub mod registry;
pub mod subscription;

pub use registry::EventBus;
pub use subscription::{Subscription, SubscriptionId};
