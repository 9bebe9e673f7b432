//! In-memory collaborators that record every call.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use sheetize_layout::{CanvasCompositor, CollaboratorError, ManifestSink, SheetPlan};
use sheetize_spec::Manifest;

/// One collaborator invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// The compositor received a plan.
    Compose(SheetPlan),
    /// The sink received a manifest for a path.
    Write(PathBuf, Manifest),
}

/// Call log shared between a compositor and a sink.
pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Records plans; optionally fails every call.
#[derive(Debug, Default)]
pub struct RecordingCompositor {
    pub log: CallLog,
    pub fail_with: Option<String>,
}

impl RecordingCompositor {
    /// Creates a compositor appending to `log`.
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_with: None,
        }
    }

    /// Creates a compositor that always fails with `message`.
    pub fn failing(log: CallLog, message: &str) -> Self {
        Self {
            log,
            fail_with: Some(message.to_string()),
        }
    }
}

impl CanvasCompositor for RecordingCompositor {
    fn compose(&mut self, plan: &SheetPlan) -> Result<(), CollaboratorError> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        self.log.borrow_mut().push(Call::Compose(plan.clone()));
        Ok(())
    }
}

/// Records manifests; optionally fails every call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub log: CallLog,
    pub fail_with: Option<String>,
}

impl RecordingSink {
    /// Creates a sink appending to `log`.
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_with: None,
        }
    }

    /// Creates a sink that always fails with `message`.
    pub fn failing(log: CallLog, message: &str) -> Self {
        Self {
            log,
            fail_with: Some(message.to_string()),
        }
    }
}

impl ManifestSink for RecordingSink {
    fn write(&mut self, path: &Path, manifest: &Manifest) -> Result<(), CollaboratorError> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        self.log
            .borrow_mut()
            .push(Call::Write(path.to_path_buf(), manifest.clone()));
        Ok(())
    }
}
