// Change-propagation contract between the ingestion layer and consumers.
//
// The dependency table says which derived values a mutation can invalidate;
// listeners receive that list synchronously, after the mutation commits.

pub use fields::{dependents, DerivedField, StatField, ALL_DERIVED};
pub use listener::ChangeListener;

mod fields;
mod listener;

#[cfg(test)]
pub(crate) use listener::testing;
