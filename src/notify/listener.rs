use super::fields::DerivedField;

/// Receives synchronous change notifications from the ingestion layer.
///
/// `derived_changed` is called in-thread, immediately after the underlying
/// mutation has been committed, with the dependency table's entry for the
/// mutated field. Reading the named metrics from inside the callback is
/// therefore always consistent. Delivery is never deferred or batched.
pub trait ChangeListener: Send {
    fn derived_changed(&mut self, steam_id: u64, fields: &'static [DerivedField]);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::*;

    pub type Notification = (u64, &'static [DerivedField]);

    /// Records every notification for assertions. The log handle stays with
    /// the test while the listener itself is boxed away.
    #[derive(Default)]
    pub struct RecordingListener {
        log: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingListener {
        pub fn log(&self) -> Arc<Mutex<Vec<Notification>>> {
            Arc::clone(&self.log)
        }
    }

    impl ChangeListener for RecordingListener {
        fn derived_changed(&mut self, steam_id: u64, fields: &'static [DerivedField]) {
            self.log.lock().unwrap().push((steam_id, fields));
        }
    }
}
