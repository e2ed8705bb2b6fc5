use crate::domain::ShellError;
use async_trait::async_trait;

/// Port the shell reads user input from.
///
/// Implementations can wrap a terminal, a pipe or an in-memory buffer.
#[async_trait]
pub trait ActionSource: Send {
    /// Next raw line of input, without its line terminator. `None` once the input ends.
    async fn next_line(&mut self) -> Result<Option<String>, ShellError>;
}
