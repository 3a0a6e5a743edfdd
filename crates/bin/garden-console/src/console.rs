//! Console rendering of page elements.

use std::sync::{Mutex, PoisonError};

use garden_app::elements::ElementId;
use garden_app::ports::Element;
use tracing::{debug, info};

/// A page element rendered as log output.
///
/// Only changes are reported, so a steady device produces a quiet console.
#[derive(Debug)]
pub struct ConsoleElement {
    id: ElementId,
    text: Mutex<String>,
    class: Mutex<String>,
}

impl ConsoleElement {
    #[must_use]
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            text: Mutex::default(),
            class: Mutex::default(),
        }
    }

    /// Text currently shown.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Class list currently applied.
    #[must_use]
    pub fn class(&self) -> String {
        self.class.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Store `value` in `slot`, returning whether it differed.
fn replace(slot: &Mutex<String>, value: &str) -> bool {
    let mut current = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if *current == value {
        return false;
    }
    value.clone_into(&mut current);
    true
}

impl Element for ConsoleElement {
    fn set_text(&self, text: &str) {
        if replace(&self.text, text) {
            info!(element = self.id.dom_id(), "{text}");
        }
    }

    fn set_class(&self, class: &str) {
        if replace(&self.class, class) {
            debug!(element = self.id.dom_id(), class, "class changed");
        }
    }
}
