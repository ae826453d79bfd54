use crate::error::LayoutError;

type Handler<'a, T> = Box<dyn FnOnce(&mut T) -> Result<(), LayoutError> + 'a>;

/// One-shot "structure ready" signal for a page.
///
/// Handlers run in registration order when the signal fires. Firing consumes the
/// signal, so a registered handler runs at most once.
pub struct ReadySignal<'a, T> {
    handlers: Vec<Handler<'a, T>>,
}

impl<'a, T> ReadySignal<'a, T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn on_ready<F>(&mut self, handler: F)
    where
        F: FnOnce(&mut T) -> Result<(), LayoutError> + 'a,
    {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every handler against `target`. A failing handler does not stop the ones
    /// after it; failures are logged and returned.
    pub fn fire(self, target: &mut T) -> Vec<LayoutError> {
        let mut errors = Vec::new();

        for (i, handler) in self.handlers.into_iter().enumerate() {
            if let Err(e) = handler(&mut *target) {
                log::error!("Ready handler {} failed: {}", i, e);
                errors.push(e);
            }
        }

        errors
    }
}

impl<T> Default for ReadySignal<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ClassName;

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut signal: ReadySignal<'_, Vec<&str>> = ReadySignal::new();
        signal.on_ready(|log| {
            log.push("first");
            Ok(())
        });
        signal.on_ready(|log| {
            log.push("second");
            Ok(())
        });

        let mut log = Vec::new();
        assert!(signal.fire(&mut log).is_empty());
        assert_eq!(log, vec!["first", "second"]);
    }

    #[test]
    fn test_failure_does_not_stop_later_handlers() {
        let mut signal: ReadySignal<'_, u32> = ReadySignal::new();
        signal.on_ready(|_| Err(LayoutError::MissingWheel(ClassName::new("wheel"))));
        signal.on_ready(|count| {
            *count += 1;
            Ok(())
        });

        let mut count = 0;
        let errors = signal.fire(&mut count);

        assert_eq!(count, 1);
        assert_eq!(
            errors,
            vec![LayoutError::MissingWheel(ClassName::new("wheel"))]
        );
    }

    #[test]
    fn test_empty_signal() {
        let signal: ReadySignal<'_, ()> = ReadySignal::default();
        assert!(signal.is_empty());
        assert!(signal.fire(&mut ()).is_empty());
    }
}
