//! Flat key/value form serialization.
//!
//! A submitted form becomes a [`FormFields`] map that serializes to a flat
//! JSON object (`{"username": "...", "password": "..."}`). When a field name
//! repeats, the last value wins. File inputs are skipped.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::JsCast as _;

/// Form fields keyed by input `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::default();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// A submit event whose default navigation can be suppressed.
pub trait SubmitSource {
    /// Stop the browser from performing the form's own navigation.
    fn suppress_navigation(&self);

    /// Snapshot of the submitted form's fields.
    fn fields(&self) -> FormFields;
}

/// Take over a form submission: cancel the native navigation first, then
/// capture the fields.
pub fn intercept_submit<S: SubmitSource + ?Sized>(event: &S) -> FormFields {
    event.suppress_navigation();
    event.fields()
}

impl SubmitSource for web_sys::SubmitEvent {
    fn suppress_navigation(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn fields(&self) -> FormFields {
        let Some(form) = self
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            log::warn!("submit event without a form target");
            return FormFields::default();
        };
        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            log::warn!("form data unavailable for submitted form");
            return FormFields::default();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return FormFields::default();
        };
        entries
            .flatten()
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }
}
