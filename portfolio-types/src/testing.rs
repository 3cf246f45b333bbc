//! In-memory stand-ins for the browser store and document.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::StoreError;
use crate::theme::{PreferenceStore, ThemeDocument, ThemeElement};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Behaves like storage disabled by privacy settings.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub write_attempts: RefCell<usize>,
}

impl PreferenceStore for FailingStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::read(key, "SecurityError"))
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        *self.write_attempts.borrow_mut() += 1;
        Err(StoreError::write(key, "QuotaExceededError"))
    }
}

#[derive(Debug, Default)]
pub struct FakeNode {
    attributes: RefCell<HashMap<String, String>>,
    text: RefCell<Option<String>>,
    children: RefCell<HashMap<String, Rc<FakeNode>>>,
}

impl FakeNode {
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    pub fn child(&self, selector: &str) -> Option<Rc<FakeNode>> {
        self.children.borrow().get(selector).cloned()
    }

    pub fn add_child(&self, selector: &str) -> Rc<FakeNode> {
        let node = Rc::new(FakeNode::default());
        self.children
            .borrow_mut()
            .insert(selector.to_string(), node.clone());
        node
    }
}

#[derive(Debug, Clone)]
pub struct FakeElement(Rc<FakeNode>);

impl ThemeElement for FakeElement {
    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.0.child(selector).map(FakeElement)
    }

    fn set_text_content(&self, text: &str) {
        *self.0.text.borrow_mut() = Some(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct FakeDocument {
    root_attributes: RefCell<HashMap<String, String>>,
    color_scheme: RefCell<Option<String>>,
    root_classes: RefCell<BTreeSet<String>>,
    elements: RefCell<HashMap<String, Rc<FakeNode>>>,
}

impl FakeDocument {
    pub fn with_root_attribute(name: &str, value: &str) -> Self {
        let document = Self::default();
        document.set_root_attribute(name, value);
        document
    }

    /// Adds an element with the given id and returns a handle for assertions.
    pub fn add_element(&self, id: &str) -> Rc<FakeNode> {
        let node = Rc::new(FakeNode::default());
        self.elements
            .borrow_mut()
            .insert(id.to_string(), node.clone());
        node
    }

    pub fn color_scheme(&self) -> Option<String> {
        self.color_scheme.borrow().clone()
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }
}

impl ThemeDocument for FakeDocument {
    type Element = FakeElement;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root_attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_color_scheme(&self, scheme: &str) {
        *self.color_scheme.borrow_mut() = Some(scheme.to_string());
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut classes = self.root_classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.borrow().get(id).cloned().map(FakeElement)
    }
}
