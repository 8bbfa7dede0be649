use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A start/jump index outside `[0, len)`.
    #[error("invalid queue position {index} (queue length {len})")]
    InvalidPosition { index: usize, len: usize },

    /// Cursor movement requested on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,
}
