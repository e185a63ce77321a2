//! Validation context: the path from the root value to the value being checked.
//!
//! This module provides [`Context`] and [`ContextEntry`]. Every combinator that
//! descends into a child value appends one entry (the field or index key and the
//! child descriptor's name) before validating the child, so a failure deep in a
//! structure can be located precisely.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::schema::Descriptor;

/// One hop in a validation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextEntry {
    /// The field name or array index; empty for the root.
    pub key: String,
    /// The name of the descriptor expected at this hop.
    pub type_name: String,
}

impl ContextEntry {
    pub fn new(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            type_name: type_name.into(),
        }
    }
}

impl Display for ContextEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.type_name)
    }
}

/// An ordered, root-first list of [`ContextEntry`] values.
///
/// Contexts are immutable and share their prefix: [`Context::push`] allocates
/// one node pointing at its parent, so descending into a child never copies
/// the path.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Context, Descriptor, Props, Types};
///
/// let person = Types::object(Props::new().field("age", Types::number()));
/// let context = Context::root(&person).push("age", &Types::number());
///
/// assert_eq!(context.to_string(), ": { age: number }/age: number");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

#[derive(PartialEq, Eq, Hash)]
struct Node {
    entry: ContextEntry,
    parent: Option<Arc<Node>>,
    len: usize,
}

impl Context {
    /// Creates the one-entry context for validating against `descriptor` at the root.
    pub fn root<D: Descriptor + ?Sized>(descriptor: &D) -> Self {
        Self::default().push_entry(ContextEntry::new("", descriptor.name()))
    }

    /// Returns a new context with an entry for `key` expecting `descriptor`.
    pub fn push<D: Descriptor + ?Sized>(&self, key: impl Into<String>, descriptor: &D) -> Self {
        self.push_entry(ContextEntry::new(key, descriptor.name()))
    }

    /// Returns a new context with `entry` appended.
    pub fn push_entry(&self, entry: ContextEntry) -> Self {
        Self {
            head: Some(Arc::new(Node {
                entry,
                parent: self.head.clone(),
                len: self.len() + 1,
            })),
        }
    }

    /// Returns the entries, root first.
    pub fn entries(&self) -> Vec<ContextEntry> {
        self.iter().cloned().collect()
    }

    /// Iterates over the entries, root first.
    pub fn iter(&self) -> impl Iterator<Item = &ContextEntry> {
        let mut reversed = self.iter_from_last().collect::<Vec<_>>();
        reversed.reverse();
        reversed.into_iter()
    }

    fn iter_from_last(&self) -> impl Iterator<Item = &ContextEntry> {
        std::iter::successors(self.head.as_deref(), |node| node.parent.as_deref())
            .map(|node| &node.entry)
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.len)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn last(&self) -> Option<&ContextEntry> {
        self.head.as_deref().map(|node| &node.entry)
    }

    /// Returns the keys along the path, skipping the root's empty key.
    pub fn keys(&self) -> Vec<&str> {
        self.iter()
            .skip(1)
            .map(|entry| entry.key.as_str())
            .collect()
    }
}

impl From<Vec<ContextEntry>> for Context {
    fn from(entries: Vec<ContextEntry>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |context, entry| context.push_entry(entry))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Joins the entries as `key: type` separated by `/`.
impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Returns the context entry for `key` expecting `descriptor`.
pub fn get_context_entry<D: Descriptor + ?Sized>(key: impl Into<String>, descriptor: &D) -> ContextEntry {
    ContextEntry::new(key, descriptor.name())
}

/// Returns the root context for `descriptor`.
pub fn get_default_context<D: Descriptor + ?Sized>(descriptor: &D) -> Context {
    Context::root(descriptor)
}

/// Renders a context as an error path, e.g. `: Person/age: number`.
pub fn get_context_path(context: &Context) -> String {
    context.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Types;

    #[test]
    fn test_root_context() {
        let context = Context::root(&Types::string());
        assert_eq!(context.len(), 1);
        assert_eq!(context.entries()[0], ContextEntry::new("", "string"));
        assert_eq!(context.to_string(), ": string");
        assert!(context.keys().is_empty());
    }

    #[test]
    fn test_push_is_immutable() {
        let base = Context::root(&Types::arr());
        let first = base.push("0", &Types::number());
        let second = base.push("1", &Types::string());

        assert_eq!(base.len(), 1);
        assert_eq!(first.to_string(), ": Array/0: number");
        assert_eq!(second.to_string(), ": Array/1: string");
    }

    #[test]
    fn test_keys_and_last() {
        let context = Context::root(&Types::any())
            .push_entry(ContextEntry::new("a", "Object"))
            .push_entry(ContextEntry::new("b", "number"));

        assert_eq!(context.keys(), vec!["a", "b"]);
        assert_eq!(context.last(), Some(&ContextEntry::new("b", "number")));
        assert_eq!(get_context_path(&context), ": any/a: Object/b: number");
    }

    #[test]
    fn test_siblings_share_parent() {
        let parent = Context::root(&Types::obj()).push("items", &Types::arr());
        let children: Vec<_> = (0..3).map(|i| parent.push(i.to_string(), &Types::number())).collect();

        for (i, child) in children.iter().enumerate() {
            assert_eq!(child.len(), 3);
            assert_eq!(child.keys(), vec!["items".to_string(), i.to_string()]);
            let shared = child.head.as_ref().and_then(|node| node.parent.as_ref()).unwrap();
            assert!(Arc::ptr_eq(shared, parent.head.as_ref().unwrap()));
        }
        assert_eq!(parent.len(), 2);
    }

    #[test]
    fn test_from_entries_matches_pushes() {
        let pushed = Context::root(&Types::any()).push_entry(ContextEntry::new("a", "number"));
        let built = Context::from(vec![ContextEntry::new("", "any"), ContextEntry::new("a", "number")]);
        assert_eq!(pushed, built);
        assert_eq!(built.entries(), pushed.entries());
        assert_eq!(format!("{:?}", built), format!("{:?}", pushed.entries()));
    }

    #[test]
    fn test_empty_context_renders_empty() {
        assert_eq!(Context::default().to_string(), "");
        assert!(Context::default().is_empty());
    }
}
