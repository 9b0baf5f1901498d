//! Assessment form state.
//!
//! Each consumption field sits behind a checkbox. A field only accepts text
//! while visible, and hiding it discards whatever was entered so stale
//! values never reach the calculation.

use crate::fields::{ConsumptionField, FieldCategory};
use crate::input::RawConsumptionForm;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    form: RawConsumptionForm,
    visible: BTreeSet<ConsumptionField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, field: ConsumptionField) -> bool {
        self.visible.contains(&field)
    }

    /// Flip a field's visibility, clearing its text when it is hidden.
    ///
    /// Returns the new visibility.
    pub fn toggle(&mut self, field: ConsumptionField) -> bool {
        if self.visible.remove(&field) {
            self.form.text_mut(field).clear();
            if field == ConsumptionField::SolarCapacity {
                self.form.solar_panels.clear();
            }
            false
        } else {
            self.visible.insert(field);
            true
        }
    }

    /// Store text for a visible field. Returns false if the field is hidden.
    pub fn set_text(&mut self, field: ConsumptionField, text: impl Into<String>) -> bool {
        if !self.is_visible(field) {
            return false;
        }
        *self.form.text_mut(field) = text.into();
        true
    }

    pub fn text(&self, field: ConsumptionField) -> &str {
        self.form.text(field)
    }

    /// Panel count shares a checkbox with solar capacity.
    pub fn set_solar_panels(&mut self, text: impl Into<String>) -> bool {
        if !self.is_visible(ConsumptionField::SolarCapacity) {
            return false;
        }
        self.form.solar_panels = text.into();
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = Some(name.into());
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.form.address = Some(address.into());
    }

    /// Number of consumption fields currently shown.
    ///
    /// Solar capacity counts once. See [`FormState::visible_keys`] for the
    /// header figure.
    pub fn active_fields(&self) -> usize {
        self.visible.len()
    }

    /// Visible form keys, as the assessment header counts them.
    ///
    /// The solar checkbox shows two keys, panel count and capacity.
    pub fn visible_keys(&self) -> usize {
        self.visible.len() + usize::from(self.is_visible(ConsumptionField::SolarCapacity))
    }

    /// Number of categories with at least one visible field.
    pub fn active_categories(&self) -> usize {
        FieldCategory::ALL
            .iter()
            .filter(|category| category.fields().any(|field| self.is_visible(field)))
            .count()
    }

    /// Number of consumption fields holding text.
    pub fn filled_fields(&self) -> usize {
        ConsumptionField::ALL
            .iter()
            .filter(|field| !self.form.text(**field).is_empty())
            .count()
    }

    /// Non-empty form entries, as the assessment header counts them.
    ///
    /// Adds name, address and panel count to [`FormState::filled_fields`].
    pub fn filled_inputs(&self) -> usize {
        let details = [
            self.form.name.as_deref(),
            self.form.address.as_deref(),
            Some(self.form.solar_panels.as_str()),
        ];
        let filled_details = details
            .iter()
            .filter(|text| matches!(text, Some(text) if !text.is_empty()))
            .count();
        self.filled_fields() + filled_details
    }

    pub fn to_form(&self) -> RawConsumptionForm {
        self.form.clone()
    }
}
