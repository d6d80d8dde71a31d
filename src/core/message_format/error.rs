use thiserror::Error;

/// A message-format syntax error, located inside the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line}, column {column})")]
pub struct MessageFormatError {
    pub message: String,
    /// Byte offset into the message.
    pub offset: usize,
    /// 1-based line within the message.
    pub line: usize,
    /// 1-based column within the message.
    pub column: usize,
}
