//! Field kinds for the inline-edit renderers

/// One entry of a fixed select list: raw code persisted, label displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Kind of a scalar field. Every renderer matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Email,
    Tel,
    Textarea,
    Checkbox,
    Select(&'static [SelectOption]),
    Country,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Select(_) => "select",
            Self::Country => "country",
        }
    }

    /// `type` attribute for kinds edited through a plain `<input>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Tel => Some("tel"),
            Self::Textarea | Self::Checkbox | Self::Select(_) | Self::Country => None,
        }
    }

    /// Options of a select field, empty for every other kind.
    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            Self::Select(options) => options,
            _ => &[],
        }
    }

    /// Label of the option whose code equals `code`.
    pub fn option_label(&self, code: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == code)
            .map(|o| o.label)
    }
}

/// Input used for one sub-field of a nested record or list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    Number,
    Date,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Textarea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM_TYPES: &[SelectOption] = &[
        SelectOption::new("SGL", "Individual"),
        SelectOption::new("DBL", "Doble"),
    ];

    #[test]
    fn test_select_resolves_option_labels() {
        let kind = ScalarKind::Select(ROOM_TYPES);
        assert_eq!(kind.option_label("DBL"), Some("Doble"));
        assert_eq!(kind.option_label("SUITE"), None);
        assert_eq!(kind.as_str(), "select");
    }

    #[test]
    fn test_only_plain_inputs_have_input_type() {
        assert_eq!(ScalarKind::Email.input_type(), Some("email"));
        assert_eq!(ScalarKind::Checkbox.input_type(), None);
        assert!(ScalarKind::Country.options().is_empty());
    }
}
