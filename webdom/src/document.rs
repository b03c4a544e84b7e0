//! Host document: mounts element descriptions and attaches their references.

use std::collections::HashMap;

use thiserror::Error;

use crate::element::Element;
use crate::node_ref::{NodeHandle, NodeRef};
use crate::render;

/// Errors raised by [`Document`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// Another mounted element already uses this id.
    #[error("element id '{0}' is already mounted in this document")]
    DuplicateId(String),

    #[error("no element with id '{0}' is mounted")]
    NotMounted(String),

    /// The id of a mounted element was written through its handle.
    #[error("the id of mounted element '{0}' cannot be changed")]
    IdChange(String),
}

struct Mounted {
    handle: NodeHandle,
    node_ref: NodeRef,
}

/// A flat set of mounted elements, keyed by id.
#[derive(Default)]
pub struct Document {
    nodes: Vec<Mounted>,
    named_refs: HashMap<String, NodeHandle>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an element and attach its reference.
    ///
    /// The reference is moved out of the element and kept by the document
    /// so it can be detached again on [`unmount`](Self::unmount).
    pub fn mount(&mut self, mut element: Element) -> Result<NodeHandle, MountError> {
        let id = element.dom_id().to_string();
        if self.get(&id).is_some() {
            log::warn!("[document] duplicate id {id}");
            return Err(MountError::DuplicateId(id));
        }

        let node_ref = std::mem::take(&mut element.node_ref);
        let handle = NodeHandle::new(element);
        self.attach(&id, &node_ref, &handle);
        log::debug!("[document] mounted {id} ({:?})", node_ref);

        self.nodes.push(Mounted {
            handle: handle.clone(),
            node_ref,
        });
        Ok(handle)
    }

    /// Unmount an element, detaching its reference.
    pub fn unmount(&mut self, id: &str) -> Result<Element, MountError> {
        let index = self
            .nodes
            .iter()
            .position(|m| m.handle.dom_id() == id)
            .ok_or_else(|| MountError::NotMounted(id.to_string()))?;
        let mounted = self.nodes.remove(index);
        self.detach(id, &mounted.node_ref);
        log::debug!("[document] unmounted {id}");
        Ok(mounted.handle.snapshot())
    }

    fn attach(&mut self, id: &str, node_ref: &NodeRef, handle: &NodeHandle) {
        match node_ref {
            NodeRef::None => {}
            NodeRef::Handle(object) => object.set(Some(handle.clone())),
            NodeRef::Named(name) => {
                log::warn!("[document] {id} uses legacy string ref '{name}'");
                self.named_refs.insert(name.clone(), handle.clone());
            }
            NodeRef::Callback(callback) => callback(Some(handle)),
        }
    }

    fn detach(&mut self, id: &str, node_ref: &NodeRef) {
        match node_ref {
            NodeRef::None => {}
            NodeRef::Handle(object) => object.set(None),
            NodeRef::Named(name) => {
                // Only drop the entry if it still points at this element.
                if self
                    .named_refs
                    .get(name)
                    .is_some_and(|h| h.dom_id() == id)
                {
                    self.named_refs.remove(name);
                }
            }
            NodeRef::Callback(callback) => callback(None),
        }
    }

    pub fn get(&self, id: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|m| m.handle.dom_id() == id)
            .map(|m| m.handle.clone())
    }

    /// Resolve a legacy string reference.
    pub fn named_ref(&self, name: &str) -> Option<NodeHandle> {
        self.named_refs.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current state of every mounted element, in mount order.
    pub fn elements(&self) -> Vec<Element> {
        self.nodes.iter().map(|m| m.handle.snapshot()).collect()
    }

    pub fn render_to_string(&self) -> String {
        render::render_all(&self.elements())
    }
}
