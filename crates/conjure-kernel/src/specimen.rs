//! Specimen values
//!
//! The outcome of asking a builder for a value: either a type-erased
//! produced value, or the [`Specimen::NoSpecimen`] sentinel meaning "this
//! handler cannot satisfy the request". The sentinel is NOT the same as a
//! produced empty value (`Specimen::value(Option::<u32>::None)` is a
//! legitimate specimen), and it is never an error: it is the chain-control
//! signal that lets the composite keep trying other builders.

use std::any::Any;
use std::fmt;

fn debug_repr<T: Any + fmt::Debug>(value: &(dyn Any + Send)) -> String {
    let value: &dyn Any = value;
    value
        .downcast_ref::<T>()
        .map_or_else(|| String::from("<opaque>"), |v| format!("{v:?}"))
}

/// A produced value with its static type name retained for diagnostics.
pub struct SpecimenValue {
    inner: Box<dyn Any + Send>,
    type_name: &'static str,
    render: fn(&(dyn Any + Send)) -> String,
}

impl SpecimenValue {
    /// Wrap a concrete value.
    #[must_use]
    pub fn new<T: Any + Send + fmt::Debug>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: std::any::type_name::<T>(),
            render: debug_repr::<T>,
        }
    }

    /// The full static name of the wrapped type.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the wrapped value is a `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrow the wrapped value as a `T`, if it is one.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Recover the wrapped value.
    ///
    /// # Errors
    /// Returns `self` unchanged when the wrapped value is not a `T`, so the
    /// caller can still report what was actually produced.
    pub fn downcast<T: Any>(self) -> Result<T, SpecimenValue> {
        match self.inner.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(inner) => Err(SpecimenValue {
                inner,
                type_name: self.type_name,
                render: self.render,
            }),
        }
    }

    /// Debug rendering of the wrapped value, for trace output.
    #[must_use]
    pub fn describe(&self) -> String {
        (self.render)(self.inner.as_ref())
    }
}

impl fmt::Debug for SpecimenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecimenValue")
            .field("type", &self.type_name)
            .field("value", &self.describe())
            .finish()
    }
}

/// The outcome of one builder's attempt at a request.
#[derive(Debug)]
pub enum Specimen {
    /// A produced value.
    Value(SpecimenValue),
    /// The handler does not recognize the request. Ordinary chain-control
    /// data; never wrapped, never logged as an error, never raised.
    NoSpecimen,
}

impl Specimen {
    /// Produce a specimen from a concrete value.
    #[must_use]
    pub fn value<T: Any + Send + fmt::Debug>(value: T) -> Self {
        Specimen::Value(SpecimenValue::new(value))
    }

    /// Whether this is the sentinel.
    #[inline]
    #[must_use]
    pub fn is_no_specimen(&self) -> bool {
        matches!(self, Specimen::NoSpecimen)
    }

    /// One-line rendering for trace output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Specimen::Value(value) => value.describe(),
            Specimen::NoSpecimen => String::from("no specimen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_recovers_the_value() {
        let specimen = SpecimenValue::new(42u32);
        assert!(specimen.is::<u32>());
        assert_eq!(specimen.downcast::<u32>().unwrap(), 42);
    }

    #[test]
    fn failed_downcast_returns_the_value_unchanged() {
        let specimen = SpecimenValue::new(String::from("anonymous"));
        let back = specimen.downcast::<u32>().unwrap_err();
        assert!(back.is::<String>());
        assert_eq!(back.downcast::<String>().unwrap(), "anonymous");
    }

    #[test]
    fn empty_value_is_not_the_sentinel() {
        let specimen = Specimen::value(Option::<u32>::None);
        assert!(!specimen.is_no_specimen());
        assert_eq!(specimen.describe(), "None");
    }

    #[test]
    fn sentinel_describes_itself() {
        assert_eq!(Specimen::NoSpecimen.describe(), "no specimen");
    }
}
