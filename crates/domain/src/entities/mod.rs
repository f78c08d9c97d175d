//! Domain entities - Objects with identity and lifecycle

mod capture_job;

pub use capture_job::{CaptureJob, CaptureJobStatus};
