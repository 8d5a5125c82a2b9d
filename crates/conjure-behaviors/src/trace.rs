//! Call tracing
//!
//! Writes a line-oriented, indentation-nested trace of every resolution to a
//! caller-supplied sink: one line on entry, one on exit, indented two spaces
//! per nesting level. Nesting depth is exactly the recursion depth of
//! `resolve` calls, so the output forms a tree when requests recursively
//! resolve sub-requests. The tracer never alters the result or the control
//! flow; sink write failures are ignored.

use crate::behavior::Behavior;
use conjure_kernel::{Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Shared handle to a caller-supplied trace sink.
pub type TraceSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Behavior recording entry and exit of every resolution.
pub struct TracingBehavior {
    sink: TraceSink,
}

impl TracingBehavior {
    /// Trace into an owned sink (a file, a buffer, standard error).
    #[must_use]
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    /// Trace into an existing shared sink.
    #[must_use]
    pub fn with_sink(sink: TraceSink) -> Self {
        Self { sink }
    }

    /// Handle to the sink, for callers that want to read it back.
    #[must_use]
    pub fn sink(&self) -> TraceSink {
        Arc::clone(&self.sink)
    }
}

impl fmt::Debug for TracingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingBehavior").finish_non_exhaustive()
    }
}

impl Behavior for TracingBehavior {
    fn transform<'a>(
        &self,
        builder: Box<dyn SpecimenBuilder + 'a>,
    ) -> Box<dyn SpecimenBuilder + 'a> {
        Box::new(TracingBuilder {
            inner: builder,
            sink: Arc::clone(&self.sink),
        })
    }
}

struct TracingBuilder<'a> {
    inner: Box<dyn SpecimenBuilder + 'a>,
    sink: TraceSink,
}

impl TracingBuilder<'_> {
    fn line(&self, indent: usize, text: &fmt::Arguments<'_>) {
        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "{:width$}{text}", "", width = indent * 2);
    }
}

impl fmt::Debug for TracingBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingBuilder")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl SpecimenBuilder for TracingBuilder<'_> {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        // Depth is 1 inside the top-level resolve; indent from 0.
        let indent = context.scope().depth().saturating_sub(1);
        self.line(indent, &format_args!("resolving: {request}"));
        let result = self.inner.create(request, context);
        match &result {
            Ok(specimen) if specimen.is_no_specimen() => {
                self.line(indent, &format_args!("no specimen"));
            }
            Ok(specimen) => {
                self.line(indent, &format_args!("produced: {}", specimen.describe()));
            }
            Err(err) => self.line(indent, &format_args!("error: {err}")),
        }
        result
    }
}
