//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries what was sent back so later `after()` calls can log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing sent back to the sender.
    Stop,
    /// This handler does not apply to the message; try next.
    Ignore,
    /// Stop the chain; `text` was sent back to the sender.
    Reply(String),
}
