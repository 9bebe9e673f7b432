//! Sheetize End-to-End Test Infrastructure
//!
//! Shared helpers for the integration tests in `tests/`:
//!
//! - [`fixtures`]: request builders for the reference scenarios
//! - [`recording`]: in-memory collaborators that record every call
//! - [`harness`]: a scratch directory plus a runner for the `sheetize` binary
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sheetize-tests
//! cargo test -p sheetize-tests --test proptest_layout
//! ```

pub mod fixtures;
pub mod harness;
pub mod recording;

pub use harness::{CliResult, TestHarness};
pub use recording::{Call, CallLog, RecordingCompositor, RecordingSink};
