use super::Error;

/// Rolling back a failed multi-table write also failed. Rows written by the
/// earlier table actions may still be present.
#[derive(Debug)]
pub(super) struct InconsistentState {
    rollback: Error,
}

impl std::error::Error for InconsistentState {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.rollback)
    }
}

impl core::fmt::Display for InconsistentState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "rollback failed ({}); store may be inconsistent",
            self.rollback
        )
    }
}

impl Error {
    /// Creates an inconsistent state error. `rollback` is the error returned
    /// by the failed rollback; attach the original write failure with
    /// [`Error::context`].
    pub fn inconsistent_state(rollback: Error) -> Error {
        Error::from(super::ErrorKind::InconsistentState(InconsistentState {
            rollback,
        }))
    }

    /// Returns `true` if this error is an inconsistent state error.
    pub fn is_inconsistent_state(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InconsistentState(_)))
    }
}
