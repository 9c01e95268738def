//! Transition entries and their handlers.

use std::fmt;

/// Default handler error: any boxed error.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Side effect run as part of a transition.
///
/// Returning `Err` aborts the transition; the machine keeps its state and
/// the error is handed back to the caller untouched.
pub type Handler<E> = Box<dyn FnMut() -> Result<(), E> + Send>;

/// One row of a transition table: `(input, current) -> (next, handler)`.
///
/// # Example
///
/// ```rust
/// use fsm_table::Transition;
///
/// let unlock: Transition<&str, &str> = Transition::new("coin", "locked", "unlocked")
///     .with_handler(|| {
///         println!("unlock");
///         Ok(())
///     });
///
/// assert!(unlock.handler.is_some());
/// ```
pub struct Transition<S, I, E = HandlerError> {
    pub input: I,
    pub current: S,
    pub next: S,
    pub handler: Option<Handler<E>>,
}

impl<S, I, E> Transition<S, I, E> {
    /// Transition without a side effect.
    pub fn new(input: I, current: S, next: S) -> Self {
        Self {
            input,
            current,
            next,
            handler: None,
        }
    }

    /// Attach a handler, replacing any previous one.
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut() -> Result<(), E> + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }
}

impl<S: fmt::Debug, I: fmt::Debug, E> fmt::Debug for Transition<S, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("input", &self.input)
            .field("current", &self.current)
            .field("next", &self.next)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
