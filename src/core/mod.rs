//! Core application primitives (runtime, scheduling, HTTP)

pub mod dashboard;
pub mod http;
pub mod runtime;
pub mod scheduler;

pub use dashboard::SeriesService;
pub use http::*;
pub use runtime::*;
pub use scheduler::*;
