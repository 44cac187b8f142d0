use crate::path::PathCommand;

use thiserror::Error;

/// The error type of the path measurement and sampling operations.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The path has no measurable segment.
    #[error("The given path is empty")]
    Empty,
    /// A drawn segment was expected at `index` but the element there can't be sampled.
    #[error("Element {index}: expected a line, curve or close command, got {command:?}.")]
    MalformedCommand { index: usize, command: PathCommand },
}

#[test]
fn error_messages() {
    assert_eq!(PathError::Empty.to_string(), "The given path is empty");
    assert_eq!(
        PathError::MalformedCommand {
            index: 3,
            command: PathCommand::MoveTo
        }
        .to_string(),
        "Element 3: expected a line, curve or close command, got MoveTo."
    );
}
