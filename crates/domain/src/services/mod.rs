//! Domain services for the Config Tracker backend.
//!
//! Services contain business logic that operates on domain models.

pub mod notification;
pub mod value_check;

pub use notification::{FileNotifier, Notifier, NotifyError, RecordingNotifier};
pub use value_check::{check_value, ValueRejection};
