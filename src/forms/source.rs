use std::collections::{HashMap, HashSet};

/// Read-only view over the inputs of a form.
pub trait FormSource {
    /// Current text of the input named `id`.
    fn value(&self, id: &str) -> Option<String>;

    fn checked(&self, id: &str) -> bool;

    /// Value of the selected option in the single-choice `group`.
    fn selected(&self, group: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct MapFormSource {
    values: HashMap<String, String>,
    checked: HashSet<String>,
    selected: HashMap<String, String>,
}

impl MapFormSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, id: &str, value: impl Into<String>) -> Self {
        self.set_value(id, value);
        self
    }

    pub fn with_checked(mut self, id: &str, checked: bool) -> Self {
        self.set_checked(id, checked);
        self
    }

    pub fn with_selected(mut self, group: &str, value: impl Into<String>) -> Self {
        self.selected.insert(group.to_string(), value.into());
        self
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), value.into());
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if checked {
            self.checked.insert(id.to_string());
        } else {
            self.checked.remove(id);
        }
    }
}

impl FormSource for MapFormSource {
    fn value(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }

    fn checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    fn selected(&self, group: &str) -> Option<String> {
        self.selected.get(group).cloned()
    }
}
