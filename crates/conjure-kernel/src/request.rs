//! Request model
//!
//! Immutable, polymorphic descriptors of "what to produce". Requests are
//! compared by structural equality, never by identity; the recursion guard
//! keys its in-flight set on that equality.

use std::any::{Any, TypeId};
use std::fmt;

/// Identity of a requested type: its `TypeId` plus the static type name.
///
/// The name rides along purely for diagnostics (trace lines, error text);
/// equality and hashing use the `TypeId` alone so two keys for the same type
/// always compare equal.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`.
    #[inline]
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The full static type name, e.g. `alloc::string::String`.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this key identifies the type `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl std::hash::Hash for TypeKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_name(self.name))
    }
}

/// Strip module paths from a type name: `core::option::Option<alloc::string::String>`
/// becomes `Option<String>`.
pub(crate) fn short_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            segment.push(ch);
        } else if ch == ':' {
            segment.clear();
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(&segment);
    out
}

/// A request for a value destined for a named member of an owning type.
///
/// Rust has no member enumeration, so these are built by the surrounding
/// code (or tests) that knows the member layout; the engine supplies the
/// model and relays member requests into seeded ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRequest {
    /// Type that owns the member.
    pub owner: TypeKey,
    /// Member name, also used as the seed hint downstream.
    pub name: String,
    /// Type of the member itself, the type actually being produced.
    pub ty: TypeKey,
}

impl MemberRequest {
    /// Create a member request from explicit keys.
    #[must_use]
    pub fn new(owner: TypeKey, name: impl Into<String>, ty: TypeKey) -> Self {
        Self {
            owner,
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for MemberRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: {}", self.owner, self.name, self.ty)
    }
}

/// What a caller wants produced.
///
/// A closed tagged union: builders match exhaustively on the variants they
/// recognize and return [`crate::Specimen::NoSpecimen`] for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    /// A value of the keyed type.
    Type(TypeKey),
    /// A value of the keyed type, biased by a seed hint.
    Seeded {
        /// Target type.
        ty: TypeKey,
        /// Hint used to bias the generated value for readability or
        /// uniqueness; typically the name of the member the value is
        /// destined for.
        seed: String,
    },
    /// A value for a named member of an owning type.
    Member(MemberRequest),
}

impl Request {
    /// A plain type request for `T`.
    #[inline]
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Request::Type(TypeKey::of::<T>())
    }

    /// A seeded request for `T`.
    #[must_use]
    pub fn seeded<T: Any>(seed: impl Into<String>) -> Self {
        Request::Seeded {
            ty: TypeKey::of::<T>(),
            seed: seed.into(),
        }
    }

    /// A member request: member `name` of type `M` on owner `O`.
    #[must_use]
    pub fn member<O: Any, M: Any>(name: impl Into<String>) -> Self {
        Request::Member(MemberRequest::new(
            TypeKey::of::<O>(),
            name,
            TypeKey::of::<M>(),
        ))
    }

    /// The type this request ultimately asks to produce.
    ///
    /// For a member request that is the member's type, not the owner's.
    #[inline]
    #[must_use]
    pub fn target(&self) -> TypeKey {
        match self {
            Request::Type(key) => *key,
            Request::Seeded { ty, .. } => *ty,
            Request::Member(member) => member.ty,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Type(key) => write!(f, "{key}"),
            Request::Seeded { ty, seed } => write!(f, "{ty} (seed {seed:?})"),
            Request::Member(member) => write!(f, "{member}"),
        }
    }
}
