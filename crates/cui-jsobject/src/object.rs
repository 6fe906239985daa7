//! Named nodes of the object graph.

use std::cell::Cell;

use tracing::{trace, warn};

use crate::error::{JsError, Result};
use crate::value::JsValue;

#[derive(Debug)]
enum Entry {
    Property(Box<dyn JsValue>),
    Child(JsObject),
}

/// A node of the object graph.
///
/// Entries keep their registration order. Re-registering a key replaces the
/// earlier entry in place, so the position of the first registration wins.
#[derive(Debug)]
pub struct JsObject {
    name: Option<String>,
    entries: Vec<(String, Entry)>,
    finalized: Cell<bool>,
}

impl JsObject {
    /// A node rendered as `name: {...}`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
            finalized: Cell::new(false),
        }
    }

    /// A top-level node rendered as `{...}` without prefix.
    pub fn root() -> Self {
        Self {
            name: None,
            entries: Vec::new(),
            finalized: Cell::new(false),
        }
    }

    pub fn builder(name: impl Into<String>) -> JsObjectBuilder {
        JsObjectBuilder {
            inner: Self::named(name),
        }
    }

    pub fn root_builder() -> JsObjectBuilder {
        JsObjectBuilder { inner: Self::root() }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized.get()
    }

    /// Number of registered entries, absent ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers a leaf. Absent values are kept but render nothing.
    pub fn add_property<V>(&mut self, name: impl Into<String>, value: V) -> Result<&mut Self>
    where
        V: JsValue + 'static,
    {
        let name = name.into();
        self.ensure_open(&name)?;
        self.insert(name, Entry::Property(Box::new(value)));
        Ok(self)
    }

    /// Registers a nested node. The child must be named.
    pub fn add_child(&mut self, child: JsObject) -> Result<&mut Self> {
        let Some(child_name) = child.name.clone() else {
            return Err(JsError::UnnamedChild {
                parent: self.label().to_string(),
            });
        };
        self.ensure_open(&child_name)?;
        self.insert(child_name, Entry::Child(child));
        Ok(self)
    }

    /// Renders the node, finalizing it.
    ///
    /// Returns `None` when neither a property nor a child contributed.
    pub fn to_notation(&self) -> Option<String> {
        self.finalized.set(true);
        let body = self.body_notation()?;
        Some(match &self.name {
            Some(name) => format!("{name}: {body}"),
            None => body,
        })
    }

    fn body_notation(&self) -> Option<String> {
        let parts: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(key, entry)| match entry {
                Entry::Property(value) => value.value_as_string().map(|v| format!("{key}:{v}")),
                Entry::Child(child) => child.to_notation(),
            })
            .collect();
        if parts.is_empty() {
            trace!(object = self.label(), "js object renders empty");
            return None;
        }
        Some(format!("{{{}}}", parts.join(",")))
    }

    fn ensure_open(&self, entry: &str) -> Result<()> {
        if self.finalized.get() {
            return Err(JsError::AlreadyFinalized {
                object: self.label().to_string(),
                entry: entry.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, key: String, entry: Entry) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((key, entry)),
        }
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<root>")
    }
}

/// Used as a value, a node renders its body without name, e.g. as an
/// element of the anonymous `series` list.
impl JsValue for JsObject {
    fn value_as_string(&self) -> Option<String> {
        self.finalized.set(true);
        self.body_notation()
    }
}

/// Infallible assembly of a fresh [`JsObject`].
///
/// The node under construction has never been rendered, so entries can
/// always be added.
#[derive(Debug)]
pub struct JsObjectBuilder {
    inner: JsObject,
}

impl JsObjectBuilder {
    #[must_use]
    pub fn property<V>(mut self, name: impl Into<String>, value: V) -> Self
    where
        V: JsValue + 'static,
    {
        self.inner.insert(name.into(), Entry::Property(Box::new(value)));
        self
    }

    /// Nests a named node. Unnamed nodes have no key and are skipped.
    #[must_use]
    pub fn child(mut self, child: JsObject) -> Self {
        match child.name.clone() {
            Some(child_name) => self.inner.insert(child_name, Entry::Child(child)),
            None => warn!(parent = self.inner.label(), "skipping unnamed child"),
        }
        self
    }

    /// Nests the node when there is one.
    #[must_use]
    pub fn child_opt(self, child: Option<JsObject>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn build(self) -> JsObject {
        self.inner
    }
}
