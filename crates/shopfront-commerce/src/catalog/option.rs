//! Product options and URL-backed option selection.
//!
//! A variant selection lives entirely in the query string as
//! `?<optionId>=<valueId>` pairs so it can be shared and bookmarked.

use serde::{Deserialize, Serialize};
use shopfront_core::QueryParams;

use crate::ids::{OptionId, ValueId};

/// How a multiple-choice option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayStyle {
    #[default]
    RadioButtons,
    RectangleBoxes,
    Swatch,
    DropdownList,
}

impl DisplayStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStyle::RadioButtons => "radio",
            DisplayStyle::RectangleBoxes => "rectangle",
            DisplayStyle::Swatch => "swatch",
            DisplayStyle::DropdownList => "dropdown",
        }
    }
}

/// One selectable value of a multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    pub entity_id: ValueId,
    pub label: String,
    #[serde(default)]
    pub is_default: bool,
    /// Swatch colours, for [`DisplayStyle::Swatch`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hex_colors: Vec<String>,
}

impl OptionValue {
    pub fn new(entity_id: ValueId, label: impl Into<String>) -> Self {
        Self {
            entity_id,
            label: label.into(),
            is_default: false,
            hex_colors: Vec::new(),
        }
    }
}

/// Option-type specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum OptionKind {
    /// Pick one value from a list.
    MultipleChoice {
        #[serde(default)]
        display_style: DisplayStyle,
        values: Vec<OptionValue>,
    },
    /// A toggle backed by two value ids.
    Checkbox {
        label: String,
        checked_value_id: ValueId,
        unchecked_value_id: ValueId,
    },
}

/// A configurable product option (size, colour, gift wrap...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub entity_id: OptionId,
    pub display_name: String,
    #[serde(default)]
    pub is_required: bool,
    pub kind: OptionKind,
}

impl ProductOption {
    /// Create a multiple-choice option with radio buttons.
    pub fn multiple_choice(
        entity_id: OptionId,
        display_name: impl Into<String>,
        values: Vec<OptionValue>,
    ) -> Self {
        Self {
            entity_id,
            display_name: display_name.into(),
            is_required: false,
            kind: OptionKind::MultipleChoice {
                display_style: DisplayStyle::default(),
                values,
            },
        }
    }

    /// Value ids this option accepts.
    pub fn value_ids(&self) -> Vec<ValueId> {
        match &self.kind {
            OptionKind::MultipleChoice { values, .. } => {
                values.iter().map(|value| value.entity_id).collect()
            }
            OptionKind::Checkbox {
                checked_value_id,
                unchecked_value_id,
                ..
            } => vec![*checked_value_id, *unchecked_value_id],
        }
    }

    /// The value currently in effect: the URL selection when it names one of
    /// this option's values, otherwise the catalog default.
    pub fn selected_value_id(&self, selection: &OptionSelection) -> Option<ValueId> {
        let from_url = selection
            .selected_value(self.entity_id)
            .filter(|value| self.value_ids().contains(value));
        if from_url.is_some() {
            return from_url;
        }

        match &self.kind {
            OptionKind::MultipleChoice { values, .. } => values
                .iter()
                .find(|value| value.is_default)
                .map(|value| value.entity_id),
            OptionKind::Checkbox {
                unchecked_value_id, ..
            } => Some(*unchecked_value_id),
        }
    }

    /// Whether a checkbox option is checked under this selection.
    pub fn is_checked(&self, selection: &OptionSelection) -> bool {
        match &self.kind {
            OptionKind::Checkbox {
                checked_value_id, ..
            } => self.selected_value_id(selection) == Some(*checked_value_id),
            OptionKind::MultipleChoice { .. } => false,
        }
    }
}

/// Selected option values, in URL order.
///
/// Built from query pairs whose key and value both parse as integers. The
/// first pair for an option wins; anything unparsable is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSelection {
    pairs: Vec<(OptionId, ValueId)>,
}

impl OptionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read selections from a request query.
    pub fn from_query(query: &QueryParams) -> Self {
        let mut selection = Self::new();
        for (key, value) in query.iter() {
            let (Ok(option), Ok(value)) = (OptionId::parse(key), ValueId::parse(value)) else {
                continue;
            };
            if selection.selected_value(option).is_none() {
                selection.pairs.push((option, value));
            }
        }
        selection
    }

    /// Value selected for an option, if any.
    pub fn selected_value(&self, option: OptionId) -> Option<ValueId> {
        self.pairs
            .iter()
            .find(|(id, _)| *id == option)
            .map(|(_, value)| *value)
    }

    /// Select a value, replacing any earlier choice for the option in place.
    pub fn select(&mut self, option: OptionId, value: ValueId) {
        match self.pairs.iter_mut().find(|(id, _)| *id == option) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((option, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionId, ValueId)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Query parameters for the upstream product fetch.
    pub fn to_query(&self) -> QueryParams {
        self.pairs
            .iter()
            .map(|(option, value)| (option.to_string(), value.to_string()))
            .collect()
    }
}

/// Query string after choosing `value_id` for `option_id`.
///
/// The option's key is set to the value: its first occurrence keeps its
/// position, later duplicates are dropped, a new key goes last. Every other
/// parameter is left exactly as it was.
pub fn select_option_value(
    current: &QueryParams,
    option_id: OptionId,
    value_id: ValueId,
) -> QueryParams {
    let mut next = current.clone();
    next.set(option_id.to_string(), value_id.to_string());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_option() -> ProductOption {
        let mut medium = OptionValue::new(ValueId::new(140), "M");
        medium.is_default = true;
        ProductOption::multiple_choice(
            OptionId::new(134),
            "Size",
            vec![
                OptionValue::new(ValueId::new(139), "S"),
                medium,
                OptionValue::new(ValueId::new(141), "L"),
            ],
        )
    }

    fn gift_wrap() -> ProductOption {
        ProductOption {
            entity_id: OptionId::new(200),
            display_name: "Gift wrap".to_string(),
            is_required: false,
            kind: OptionKind::Checkbox {
                label: "Wrap it".to_string(),
                checked_value_id: ValueId::new(201),
                unchecked_value_id: ValueId::new(202),
            },
        }
    }

    #[test]
    fn test_select_appends_new_key() {
        let next = select_option_value(&QueryParams::new(), OptionId::new(134), ValueId::new(139));
        assert_eq!(next.to_query_string(), "134=139");
    }

    #[test]
    fn test_select_replaces_in_place() {
        let current = QueryParams::parse("134=139&ref=home&200=201");
        let next = select_option_value(&current, OptionId::new(134), ValueId::new(141));
        assert_eq!(next.to_query_string(), "134=141&ref=home&200=201");
    }

    #[test]
    fn test_select_collapses_duplicates() {
        let current = QueryParams::parse("134=139&utm=x&134=140");
        let next = select_option_value(&current, OptionId::new(134), ValueId::new(141));
        assert_eq!(next.to_query_string(), "134=141&utm=x");
    }

    #[test]
    fn test_select_preserves_unrelated_params() {
        let current = QueryParams::parse("q=red+shoes&page=2");
        let next = select_option_value(&current, OptionId::new(7), ValueId::new(8));
        assert_eq!(next.get("q"), Some("red shoes"));
        assert_eq!(next.get("page"), Some("2"));
        assert_eq!(next.iter().last(), Some(("7", "8")));
    }

    #[test]
    fn test_select_is_pure() {
        let current = QueryParams::parse("134=139");
        let _ = select_option_value(&current, OptionId::new(134), ValueId::new(140));
        assert_eq!(current.to_query_string(), "134=139");
    }

    #[test]
    fn test_options_compose() {
        let first = select_option_value(&QueryParams::new(), OptionId::new(134), ValueId::new(139));
        let both = select_option_value(&first, OptionId::new(200), ValueId::new(201));
        let selection = OptionSelection::from_query(&both);
        assert_eq!(selection.selected_value(OptionId::new(134)), Some(ValueId::new(139)));
        assert_eq!(selection.selected_value(OptionId::new(200)), Some(ValueId::new(201)));
    }

    #[test]
    fn test_from_query_drops_invalid_pairs() {
        let query = QueryParams::parse("134=139&size=large&135=abc&x1=2&&136=&137=7");
        let selection = OptionSelection::from_query(&query);
        let pairs: Vec<(i64, i64)> = selection.iter().map(|(o, v)| (o.get(), v.get())).collect();
        assert_eq!(pairs, vec![(134, 139), (137, 7)]);
    }

    #[test]
    fn test_from_query_first_occurrence_wins() {
        let selection = OptionSelection::from_query(&QueryParams::parse("134=139&134=141"));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.selected_value(OptionId::new(134)), Some(ValueId::new(139)));
    }

    #[test]
    fn test_selection_to_query() {
        let mut selection = OptionSelection::new();
        selection.select(OptionId::new(134), ValueId::new(139));
        selection.select(OptionId::new(200), ValueId::new(201));
        selection.select(OptionId::new(134), ValueId::new(140));
        assert_eq!(selection.to_query().to_query_string(), "134=140&200=201");
    }

    #[test]
    fn test_selected_value_falls_back_to_default() {
        let option = size_option();
        assert_eq!(
            option.selected_value_id(&OptionSelection::new()),
            Some(ValueId::new(140))
        );

        let chosen = OptionSelection::from_query(&QueryParams::parse("134=141"));
        assert_eq!(option.selected_value_id(&chosen), Some(ValueId::new(141)));

        let foreign = OptionSelection::from_query(&QueryParams::parse("134=999"));
        assert_eq!(option.selected_value_id(&foreign), Some(ValueId::new(140)));
    }

    #[test]
    fn test_unknown_option_ignored() {
        let selection = OptionSelection::from_query(&QueryParams::parse("999=1"));
        assert_eq!(
            size_option().selected_value_id(&selection),
            Some(ValueId::new(140))
        );
    }

    #[test]
    fn test_checkbox_state() {
        let option = gift_wrap();
        assert!(!option.is_checked(&OptionSelection::new()));

        let checked = OptionSelection::from_query(&QueryParams::parse("200=201"));
        assert!(option.is_checked(&checked));
        assert!(!size_option().is_checked(&checked));
    }

    #[test]
    fn test_option_wire_format() {
        let option: ProductOption = serde_json::from_str(
            r##"{
                "entityId": 134,
                "displayName": "Colour",
                "isRequired": true,
                "kind": {
                    "type": "MultipleChoice",
                    "displayStyle": "Swatch",
                    "values": [
                        {"entityId": 139, "label": "Red", "hexColors": ["#ff0000"]},
                        {"entityId": 140, "label": "Blue", "isDefault": true}
                    ]
                }
            }"##,
        )
        .unwrap();

        assert!(option.is_required);
        match &option.kind {
            OptionKind::MultipleChoice {
                display_style,
                values,
            } => {
                assert_eq!(*display_style, DisplayStyle::Swatch);
                assert_eq!(values[0].hex_colors, vec!["#ff0000"]);
                assert!(values[1].is_default);
            }
            other => panic!("unexpected kind {:?}", other),
        }

        let checkbox: ProductOption = serde_json::from_str(
            r#"{
                "entityId": 200,
                "displayName": "Gift wrap",
                "kind": {
                    "type": "Checkbox",
                    "label": "Wrap it",
                    "checkedValueId": 201,
                    "uncheckedValueId": 202
                }
            }"#,
        )
        .unwrap();
        assert_eq!(checkbox, gift_wrap());
    }
}
