//! Element port: a renderable target on the page.

/// One page element the dashboard writes to.
///
/// Setters take `&self`: elements are shared between the poll loop and click
/// handlers, and every write is last-write-wins.
pub trait Element {
    /// Replace the visible text. For an actuator button this is its label.
    fn set_text(&self, text: &str);

    /// Replace the full class list.
    fn set_class(&self, class: &str);
}
