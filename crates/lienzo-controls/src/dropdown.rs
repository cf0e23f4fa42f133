//! Enumerated option picker.
//!
//! Also serves [`ControlKind::ColorPalette`](lienzo_params::ControlKind)
//! parameters — a palette is a dropdown whose options happen to be color
//! names; the swatch rendering belongs to the platform layer.

use lienzo_binding::ControlSurface;
use lienzo_params::Value;

/// Dropdown selecting one option out of the parameter's options list.
///
/// A model value absent from the options list leaves nothing selected but
/// is retained as the displayed title, so a commit in that state parses
/// back to an equal value and the equality gate keeps it inert.
#[derive(Debug, Default)]
pub struct DropdownControl {
    options: Vec<String>,
    selected: Option<usize>,
    unmatched: Option<String>,
}

impl DropdownControl {
    /// Empty dropdown; the binding pushes the options on attach.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selectable options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Title of the selected option, if any is selected.
    pub fn selected_title(&self) -> Option<&str> {
        self.selected.and_then(|i| self.options.get(i)).map(String::as_str)
    }

    /// Select the option at `index`, as a user pick would. Commit afterwards.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
            self.unmatched = None;
        }
    }

    fn display_title(&self) -> Option<&str> {
        self.selected_title().or(self.unmatched.as_deref())
    }
}

impl ControlSurface for DropdownControl {
    fn display_value(&self) -> Value {
        Value::Choice(self.display_title().unwrap_or_default().to_string())
    }

    fn set_display_value(&mut self, value: &Value) {
        if let Some(title) = value.as_str() {
            self.selected = self.options.iter().position(|o| o == title);
            self.unmatched = if self.selected.is_none() && !title.is_empty() {
                Some(title.to_string())
            } else {
                None
            };
        }
    }

    fn set_options(&mut self, options: &[String]) {
        // Re-select by title when it survives the rebuild; the binding
        // repaints the selection right after, so a vanished title is
        // resolved by the store's fallback policy, not guessed here.
        let previous = self.display_title().map(str::to_string);
        self.options = options.to_vec();
        self.selected = previous
            .as_ref()
            .and_then(|title| self.options.iter().position(|o| o == title));
        self.unmatched = if self.selected.is_none() { previous } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> DropdownControl {
        let mut dd = DropdownControl::new();
        dd.set_options(&["A".into(), "B".into(), "C".into()]);
        dd
    }

    #[test]
    fn select_by_index() {
        let mut dd = abc();
        dd.select(2);
        assert_eq!(dd.selected_title(), Some("C"));
        assert_eq!(dd.display_value(), Value::Choice("C".into()));
    }

    #[test]
    fn model_selection_by_title() {
        let mut dd = abc();
        dd.set_display_value(&Value::Choice("B".into()));
        assert_eq!(dd.selected_title(), Some("B"));
    }

    #[test]
    fn unknown_title_keeps_display_without_selection() {
        let mut dd = abc();
        dd.set_display_value(&Value::Choice("Z".into()));
        assert_eq!(dd.selected_title(), None);
        // The displayed title round-trips, keeping a later commit inert.
        assert_eq!(dd.display_value(), Value::Choice("Z".into()));
    }

    #[test]
    fn user_pick_replaces_unmatched_display() {
        let mut dd = abc();
        dd.set_display_value(&Value::Choice("Z".into()));
        dd.select(1);
        assert_eq!(dd.display_value(), Value::Choice("B".into()));
    }

    #[test]
    fn rebuild_keeps_surviving_selection() {
        let mut dd = abc();
        dd.select(1);
        dd.set_options(&["B".into(), "C".into()]);
        assert_eq!(dd.selected_title(), Some("B"));
    }

    #[test]
    fn rebuild_drops_vanished_selection() {
        let mut dd = abc();
        dd.select(0);
        dd.set_options(&["X".into(), "Y".into()]);
        assert_eq!(dd.selected_title(), None);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut dd = abc();
        dd.select(1);
        dd.select(9);
        assert_eq!(dd.selected_title(), Some("B"));
    }
}
