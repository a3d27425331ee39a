//! Date-picker widget events.

use crate::model::date::TodoDate;

/// Outcome emitted by the date-picker widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerEvent {
    /// Picker closed without a selection; draft date unchanged.
    Dismissed,
    /// User confirmed a calendar day.
    Selected(TodoDate),
}

impl DatePickerEvent {
    /// Selected date, if any.
    pub fn selected(self) -> Option<TodoDate> {
        match self {
            Self::Dismissed => None,
            Self::Selected(date) => Some(date),
        }
    }
}
