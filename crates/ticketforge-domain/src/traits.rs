//! Trait definitions for path-addressed field access
//!
//! Every record type the tool renders implements [`Projectable`]: a
//! hand-registered descriptor table that mirrors the type's serde
//! attributes, plus an accessor returning each member in a form the
//! resolver can keep traversing. This replaces runtime reflection over
//! member names and tags with an explicit, compile-time table.

use serde_json::Value;

/// One entry in a record's descriptor table.
///
/// `name` is the declared member name, `alias` the external key the
/// member is encoded under, and `skip` marks members excluded from
/// serialization. Skipped members are never resolvable, by name or by
/// alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared member name.
    pub name: &'static str,
    /// Serialization alias (the encoded key name).
    pub alias: &'static str,
    /// Excluded from serialization.
    pub skip: bool,
}

impl FieldDescriptor {
    /// Descriptor for an ordinary serialized member.
    pub const fn new(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias,
            skip: false,
        }
    }

    /// Descriptor for a member excluded from serialization.
    pub const fn skipped(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias,
            skip: true,
        }
    }
}

/// A resolved member, as handed back by [`Projectable::member`].
pub enum Member<'a> {
    /// A nested record with its own descriptor table.
    Record(&'a dyn Projectable),
    /// Anything else, in its encoded form. JSON objects keep
    /// traversing as string-keyed dictionaries.
    Value(Value),
    /// An absent optional reference. Ordinary not-found, never an
    /// error.
    Absent,
}

/// A record addressable by dot-separated field paths.
///
/// Implementations register their descriptor table by hand; the table
/// must stay in lockstep with the type's serde attributes (same
/// aliases, same skips). Member indices refer to positions in
/// [`Projectable::descriptors`].
pub trait Projectable {
    /// The descriptor table for this record type.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// The member at `index` in the descriptor table.
    ///
    /// Out-of-range indices return [`Member::Absent`].
    fn member(&self, index: usize) -> Member<'_>;

    /// The whole record in its encoded form, for paths that end on a
    /// nested record.
    fn to_value(&self) -> Value;
}
