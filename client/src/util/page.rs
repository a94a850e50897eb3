//! `<body>` class and style access.
//!
//! The body element sits outside the Leptos view tree, so theme and
//! background changes are applied imperatively through [`Page`]. The browser
//! implementation tolerates a missing window, document, or body and no-ops
//! off the browser.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::{BTreeSet, HashMap};

/// The page-level element theme and background state is written to.
pub trait Page {
    /// Add or remove `class`.
    fn set_class(&self, class: &str, enabled: bool);
    /// Whether `class` is present. `None` when there is no page to read.
    fn has_class(&self, class: &str) -> Option<bool>;
    /// Set one inline style property.
    fn set_style(&self, property: &str, value: &str);
}

/// The document `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyPage;

impl Page for BodyPage {
    fn set_class(&self, class: &str, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = body() else {
                return;
            };
            let classes = body.class_list();
            let _ = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, enabled);
        }
    }

    fn has_class(&self, class: &str) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            body().map(|b| b.class_list().contains(class))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            None
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = body() else {
                return;
            };
            let _ = body.style().set_property(property, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (property, value);
        }
    }
}

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}

/// In-memory page for native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPage {
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<HashMap<String, String>>,
    /// When set, class writes are ignored (a page that keeps its own state).
    pinned: bool,
}

#[cfg(test)]
impl MemoryPage {
    pub fn with_class(class: &str) -> Self {
        let page = Self::default();
        page.classes.borrow_mut().insert(class.to_owned());
        page
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }
}

#[cfg(test)]
impl Page for MemoryPage {
    fn set_class(&self, class: &str, enabled: bool) {
        if self.pinned {
            return;
        }
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> Option<bool> {
        Some(self.classes.borrow().contains(class))
    }

    fn set_style(&self, property: &str, value: &str) {
        self.styles.borrow_mut().insert(property.to_owned(), value.to_owned());
    }
}
