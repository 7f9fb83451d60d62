use std::{fmt, io::Write};

/// Optional call trace for parsing and checking.
///
/// A `Tracer` is handed explicitly to the parser and the checker. It writes
/// indented `Entered name()` / `Exiting name()` lines plus free-form messages
/// to its sink. Nothing is written in release builds or when no sink is set,
/// and write failures are ignored: the trace never changes the outcome.
pub struct Tracer<'w> {
    sink:   Option<Box<dyn Write + 'w>>,
    frames: Vec<&'static str>,
}

impl<'w> Tracer<'w> {
    /// A tracer that discards everything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { sink:   None,
               frames: Vec::new(), }
    }

    /// A tracer writing to `sink`.
    #[must_use]
    pub fn new(sink: impl Write + 'w) -> Self {
        Self { sink:   Some(Box::new(sink)),
               frames: Vec::new(), }
    }

    /// Whether events are actually written.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        cfg!(debug_assertions) && self.sink.is_some()
    }

    /// Records entry into `name` and indents subsequent events.
    pub fn enter(&mut self, name: &'static str) {
        self.line(format_args!("Entered {name}()"));
        self.frames.push(name);
    }

    /// Records leaving the innermost entered function.
    pub fn exit(&mut self) {
        let name = self.frames.pop().unwrap_or("?");
        self.line(format_args!("Exiting {name}()"));
    }

    /// Records a message at the current depth.
    pub fn print(&mut self, args: fmt::Arguments<'_>) {
        self.line(args);
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        let depth = self.frames.len();
        if let Some(sink) = self.sink.as_mut() {
            let _ = writeln!(sink, "{:indent$}{args}", "", indent = depth * 2);
        }
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tracer_tracks_depth_only() {
        let mut tracer = Tracer::disabled();
        tracer.enter("outer");
        assert_eq!(tracer.depth(), 1);
        tracer.exit();
        assert_eq!(tracer.depth(), 0);
        assert!(!tracer.is_enabled());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn events_are_indented_by_depth() {
        let mut out = Vec::new();
        {
            let mut tracer = Tracer::new(&mut out);
            tracer.enter("outer");
            tracer.enter("inner");
            tracer.print(format_args!("x = {}", 1));
            tracer.exit();
            tracer.exit();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text,
                   "Entered outer()\n  Entered inner()\n    x = 1\n  Exiting inner()\nExiting \
                    outer()\n");
    }
}
