//! Submission lifecycle state machine

/// Inline advisory shown when a measurement leaves the 0-50 inch range
pub const RANGE_ADVISORY: &str = "Value must be between 0 and 50";

/// Fixed user-facing message for a rejected or failed submission
pub const SUBMIT_FAILED: &str = "Something went wrong, please try again";

/// Submission lifecycle, independent of the form data.
///
/// `fetching` and `success` are never both true. `error` is non-empty only
/// when the latest edit is out of range or the latest submission failed.
#[derive(Debug, Clone, Default)]
pub struct SubmitStatus {
    pub fetching: bool,
    pub success: bool,
    pub error: String,
}

impl SubmitStatus {
    /// Start a submission. Returns false (and changes nothing) when one is
    /// already in flight or the success screen is showing; there is no
    /// queuing.
    pub fn begin_submit(&mut self) -> bool {
        if self.fetching || self.success {
            return false;
        }
        self.error.clear();
        self.fetching = true;
        true
    }

    /// Resolve the in-flight submission. A rejection or transport failure
    /// sets the fixed error message; the form data is left alone so the user
    /// can retry.
    pub fn complete_submit(&mut self, accepted: bool) {
        self.fetching = false;
        if accepted {
            self.success = true;
        } else {
            self.error = SUBMIT_FAILED.to_string();
        }
    }

    /// The "continue" action on the success screen
    pub fn acknowledge_success(&mut self) {
        self.success = false;
    }

    /// Raise or clear the range advisory after a size edit. The advisory is
    /// informational only; it never blocks editing or submission.
    pub fn set_range_advisory(&mut self, out_of_range: bool) {
        if out_of_range {
            self.error = RANGE_ADVISORY.to_string();
        } else {
            self.error.clear();
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
