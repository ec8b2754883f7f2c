use super::Error;

/// A multi-table write failed after an earlier table action succeeded.
///
/// The earlier actions have been rolled back by the time this error reaches
/// the caller. The failing action's error is the cause.
#[derive(Debug)]
pub(super) struct PartialWrite {
    completed: usize,
    table: Box<str>,
}

impl std::error::Error for PartialWrite {}

impl core::fmt::Display for PartialWrite {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "write to `{}` failed after {} completed table action(s); rolled back",
            self.table, self.completed
        )
    }
}

impl Error {
    /// Creates a partial write error. `completed` is the number of table
    /// actions that succeeded before `table` failed.
    pub fn partial_write(table: impl Into<String>, completed: usize) -> Error {
        Error::from(super::ErrorKind::PartialWrite(PartialWrite {
            completed,
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is a
    /// partial write.
    pub fn is_partial_write(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::PartialWrite(_)))
    }
}
