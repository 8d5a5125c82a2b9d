//! Testing utilities for the Conjure workspace
//!
//! Shared hand-rolled builders, trace sinks, and helpers.

#![allow(missing_docs)]

use conjure_kernel::{
    Request, ResolveError, Specimen, SpecimenBuilder, SpecimenContext, TypeKey,
};
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Answers any request targeting `T` with a clone of a fixed value.
#[derive(Debug)]
pub struct StubBuilder<T> {
    value: T,
}

impl<T> StubBuilder<T>
where
    T: Any + Clone + Send + Sync + fmt::Debug,
{
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> SpecimenBuilder for StubBuilder<T>
where
    T: Any + Clone + Send + Sync + fmt::Debug,
{
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        if request.target().is::<T>() {
            return Ok(Specimen::value(self.value.clone()));
        }
        Ok(Specimen::NoSpecimen)
    }
}

/// Answers `u32` type requests with 1, 2, 3, ... and exposes how often it
/// produced a value. State is confined to the builder instance.
#[derive(Debug, Default)]
pub struct CountingBuilder {
    calls: AtomicUsize,
}

impl CountingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl SpecimenBuilder for CountingBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        if request.target().is::<u32>() {
            let n = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
            return Ok(Specimen::value(u32::try_from(n).unwrap_or(u32::MAX)));
        }
        Ok(Specimen::NoSpecimen)
    }
}

#[derive(Debug, Clone, Copy)]
enum FailureMode {
    CannotConstruct,
    Configuration,
}

/// Fails requests targeting one type, declining everything else.
#[derive(Debug)]
pub struct FailingBuilder {
    target: TypeKey,
    mode: FailureMode,
    reason: &'static str,
}

impl FailingBuilder {
    /// Raise the shieldable "cannot construct" fault for requests of `T`.
    pub fn cannot_construct<T: Any>(reason: &'static str) -> Self {
        Self {
            target: TypeKey::of::<T>(),
            mode: FailureMode::CannotConstruct,
            reason,
        }
    }

    /// Raise a configuration fault for requests of `T`.
    pub fn configuration<T: Any>(reason: &'static str) -> Self {
        Self {
            target: TypeKey::of::<T>(),
            mode: FailureMode::Configuration,
            reason,
        }
    }
}

impl SpecimenBuilder for FailingBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        if request.target() != self.target {
            return Ok(Specimen::NoSpecimen);
        }
        match self.mode {
            FailureMode::CannotConstruct => {
                Err(ResolveError::cannot_construct(request, self.reason))
            }
            FailureMode::Configuration => {
                Err(ResolveError::Configuration(self.reason.to_string()))
            }
        }
    }
}

/// Re-resolves its own request, modeling a type containing a member of its
/// own type. Only safe to run under a recursion guard.
#[derive(Debug)]
pub struct SelfReferentialBuilder {
    target: TypeKey,
}

impl SelfReferentialBuilder {
    pub fn new<T: Any>() -> Self {
        Self {
            target: TypeKey::of::<T>(),
        }
    }
}

impl SpecimenBuilder for SelfReferentialBuilder {
    fn create(
        &self,
        request: &Request,
        context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        if request.target() == self.target {
            return context.resolve(request);
        }
        Ok(Specimen::NoSpecimen)
    }
}

/// Records every request it sees and declines all of them.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    seen: Arc<Mutex<Vec<Request>>>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<Request> {
        self.seen.lock().clone()
    }

    /// Handle shared with the builder after it moves into a chain.
    pub fn log(&self) -> Arc<Mutex<Vec<Request>>> {
        Arc::clone(&self.seen)
    }
}

impl SpecimenBuilder for RecordingBuilder {
    fn create(
        &self,
        request: &Request,
        _context: &SpecimenContext<'_>,
    ) -> Result<Specimen, ResolveError> {
        self.seen.lock().push(request.clone());
        Ok(Specimen::NoSpecimen)
    }
}

/// A cloneable in-memory `io::Write` sink for capturing trace output.
#[derive(Debug, Clone, Default)]
pub struct SharedSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}

impl std::io::Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
