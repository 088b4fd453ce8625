//! Form field value objects and field metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type-safe field values
///
/// Serialized untagged so the request body carries plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    /// Get the numeric value (None for text values)
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Identifier of a select option, either a numeric code or a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionId {
    Code(i64),
    Name(&'static str),
}

impl OptionId {
    pub fn to_value(self) -> FieldValue {
        match self {
            OptionId::Code(n) => FieldValue::Number(n),
            OptionId::Name(s) => FieldValue::Text(s.to_string()),
        }
    }

    pub fn matches(self, value: &FieldValue) -> bool {
        match (self, value) {
            (OptionId::Code(a), FieldValue::Number(b)) => a == *b,
            (OptionId::Name(a), FieldValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// One entry of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub id: OptionId,
    pub title: &'static str,
}

impl SelectOption {
    pub const fn code(id: i64, title: &'static str) -> Self {
        Self {
            id: OptionId::Code(id),
            title,
        }
    }

    pub const fn name(id: &'static str, title: &'static str) -> Self {
        Self {
            id: OptionId::Name(id),
            title,
        }
    }
}

/// Control type and its constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number {
        min: i64,
        max: Option<i64>,
        step: i64,
    },
    Select {
        options: &'static [SelectOption],
    },
}

/// How an edit of a field is turned into a partial form update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeRule {
    /// Merge only the edited field
    Merge,
    /// Merge the edited field and write the same value to the named field
    Mirror(&'static str),
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: FieldKind,
    pub change_rule: ChangeRule,
}

impl FieldSpec {
    /// Create a number field with the given lower bound and a step of 1
    pub const fn number(id: &'static str, title: &'static str, min: i64) -> Self {
        Self {
            id,
            title,
            kind: FieldKind::Number {
                min,
                max: None,
                step: 1,
            },
            change_rule: ChangeRule::Merge,
        }
    }

    /// Create a select field
    pub const fn select(
        id: &'static str,
        title: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            id,
            title,
            kind: FieldKind::Select { options },
            change_rule: ChangeRule::Merge,
        }
    }

    /// Set the upper bound of a number field
    pub const fn max(self, max: i64) -> Self {
        let kind = match self.kind {
            FieldKind::Number { min, step, .. } => FieldKind::Number {
                min,
                max: Some(max),
                step,
            },
            other => other,
        };
        Self { kind, ..self }
    }

    /// Set the arrow-key increment of a number field
    pub const fn step(self, step: i64) -> Self {
        let kind = match self.kind {
            FieldKind::Number { min, max, .. } => FieldKind::Number { min, max, step },
            other => other,
        };
        Self { kind, ..self }
    }

    /// Mirror every edit of this field into `target`
    pub const fn mirrors(self, target: &'static str) -> Self {
        Self {
            change_rule: ChangeRule::Mirror(target),
            ..self
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self.kind, FieldKind::Number { .. })
    }

    /// Clamp a number into the field's declared range
    pub fn clamp(&self, n: i64) -> i64 {
        match self.kind {
            FieldKind::Number { min, max, .. } => {
                let n = n.max(min);
                max.map_or(n, |max| n.min(max))
            }
            FieldKind::Select { .. } => n,
        }
    }

    /// Step a number field up or down; unset values start at `min`
    pub fn stepped(&self, current: Option<&FieldValue>, up: bool) -> Option<FieldValue> {
        let FieldKind::Number { min, step, .. } = self.kind else {
            return None;
        };
        let next = match current.and_then(FieldValue::as_number) {
            Some(n) if up => n.saturating_add(step),
            Some(n) => n.saturating_sub(step),
            None => min,
        };
        Some(FieldValue::Number(self.clamp(next)))
    }

    /// Cycle a select field to the next or previous option
    pub fn cycled(&self, current: Option<&FieldValue>, forward: bool) -> Option<FieldValue> {
        let FieldKind::Select { options } = self.kind else {
            return None;
        };
        if options.is_empty() {
            return None;
        }
        let len = options.len();
        let index = match current.and_then(|v| options.iter().position(|o| o.id.matches(v))) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        Some(options[index].id.to_value())
    }

    /// Parse a typed number draft and clamp it into range
    pub fn parse_draft(&self, draft: &str) -> Option<FieldValue> {
        if !self.is_number() {
            return None;
        }
        let n: i64 = draft.trim().parse().ok()?;
        Some(FieldValue::Number(self.clamp(n)))
    }

    /// Build the partial update produced by setting this field to `value`
    pub fn patch(&self, value: FieldValue) -> FormValue {
        let mut patch = FormValue::default();
        if let ChangeRule::Mirror(target) = self.change_rule {
            patch.insert(target, value.clone());
        }
        patch.insert(self.id, value);
        patch
    }

    /// Human readable value: option title for selects, the number otherwise
    pub fn display_value(&self, value: Option<&FieldValue>) -> Option<String> {
        let value = value?;
        match self.kind {
            FieldKind::Select { options } => Some(
                options
                    .iter()
                    .find(|o| o.id.matches(value))
                    .map(|o| o.title.to_string())
                    .unwrap_or_else(|| value.to_string()),
            ),
            FieldKind::Number { .. } => Some(value.to_string()),
        }
    }
}

/// Current values of the form, keyed by field id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValue(BTreeMap<String, FieldValue>);

impl FormValue {
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id)
    }

    pub fn insert(&mut self, id: &str, value: FieldValue) {
        self.0.insert(id.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Union of `self` and `patch`, with `patch` winning on shared keys
    pub fn merged(&self, patch: &FormValue) -> FormValue {
        let mut merged = self.clone();
        for (id, value) in &patch.0 {
            merged.0.insert(id.clone(), value.clone());
        }
        merged
    }
}

impl<const N: usize> From<[(&str, FieldValue); N]> for FormValue {
    fn from(entries: [(&str, FieldValue); N]) -> Self {
        let mut value = FormValue::default();
        for (id, v) in entries {
            value.insert(id, v);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEVELS: &[SelectOption] = &[
        SelectOption::code(1, "Low"),
        SelectOption::code(2, "Medium"),
        SelectOption::code(3, "High"),
    ];

    const NAMES: &[SelectOption] = &[
        SelectOption::name("No", "No"),
        SelectOption::name("Yes", "Yes"),
    ];

    mod number_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_builder_sets_constraints() {
            let spec = FieldSpec::number("age", "Age", 18).max(99).step(5);
            assert_eq!(
                spec.kind,
                FieldKind::Number {
                    min: 18,
                    max: Some(99),
                    step: 5
                }
            );
            assert_eq!(spec.change_rule, ChangeRule::Merge);
        }

        #[test]
        fn test_clamp_respects_bounds() {
            let spec = FieldSpec::number("age", "Age", 18).max(99);
            assert_eq!(spec.clamp(5), 18);
            assert_eq!(spec.clamp(150), 99);
            assert_eq!(spec.clamp(42), 42);
        }

        #[test]
        fn test_clamp_without_max() {
            let spec = FieldSpec::number("income", "Income", 0);
            assert_eq!(spec.clamp(1_000_000), 1_000_000);
            assert_eq!(spec.clamp(-3), 0);
        }

        #[test]
        fn test_stepped_from_unset_starts_at_min() {
            let spec = FieldSpec::number("age", "Age", 18).max(99);
            assert_eq!(spec.stepped(None, true), Some(FieldValue::Number(18)));
            assert_eq!(spec.stepped(None, false), Some(FieldValue::Number(18)));
        }

        #[test]
        fn test_stepped_uses_step_and_clamps() {
            let spec = FieldSpec::number("rate", "Rate", 0).step(100);
            let current = FieldValue::Number(250);
            assert_eq!(
                spec.stepped(Some(&current), true),
                Some(FieldValue::Number(350))
            );
            assert_eq!(
                spec.stepped(Some(&FieldValue::Number(50)), false),
                Some(FieldValue::Number(0))
            );
        }

        #[test]
        fn test_parse_draft_clamps() {
            let spec = FieldSpec::number("age", "Age", 18).max(99);
            assert_eq!(spec.parse_draft("7"), Some(FieldValue::Number(18)));
            assert_eq!(spec.parse_draft("123"), Some(FieldValue::Number(99)));
            assert_eq!(spec.parse_draft("35"), Some(FieldValue::Number(35)));
            assert_eq!(spec.parse_draft(""), None);
        }

        #[test]
        fn test_cycled_is_none_for_numbers() {
            let spec = FieldSpec::number("age", "Age", 18);
            assert!(spec.cycled(None, true).is_none());
        }
    }

    mod select_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycled_from_unset() {
            let spec = FieldSpec::select("level", "Level", LEVELS);
            assert_eq!(spec.cycled(None, true), Some(FieldValue::Number(1)));
            assert_eq!(spec.cycled(None, false), Some(FieldValue::Number(3)));
        }

        #[test]
        fn test_cycled_wraps() {
            let spec = FieldSpec::select("level", "Level", LEVELS);
            let last = FieldValue::Number(3);
            assert_eq!(spec.cycled(Some(&last), true), Some(FieldValue::Number(1)));
            let first = FieldValue::Number(1);
            assert_eq!(
                spec.cycled(Some(&first), false),
                Some(FieldValue::Number(3))
            );
        }

        #[test]
        fn test_cycled_named_options() {
            let spec = FieldSpec::select("overTime", "Overtime", NAMES);
            let no = FieldValue::Text("No".to_string());
            assert_eq!(
                spec.cycled(Some(&no), true),
                Some(FieldValue::Text("Yes".to_string()))
            );
        }

        #[test]
        fn test_display_value_uses_option_title() {
            let spec = FieldSpec::select("level", "Level", LEVELS);
            assert_eq!(
                spec.display_value(Some(&FieldValue::Number(2))),
                Some("Medium".to_string())
            );
            assert_eq!(spec.display_value(None), None);
        }

        #[test]
        fn test_option_id_does_not_match_other_type() {
            assert!(!OptionId::Code(1).matches(&FieldValue::Text("1".to_string())));
            assert!(!OptionId::Name("1").matches(&FieldValue::Number(1)));
        }
    }

    mod change_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_merge_patch_touches_only_own_field() {
            let spec = FieldSpec::number("age", "Age", 18);
            let patch = spec.patch(FieldValue::Number(30));
            assert_eq!(patch, FormValue::from([("age", FieldValue::Number(30))]));
        }

        #[test]
        fn test_mirror_patch_sets_both_fields() {
            let spec = FieldSpec::number("yearsSinceLastPromotion", "Promotion", 0)
                .mirrors("yearsInCurrentRole");
            let patch = spec.patch(FieldValue::Number(4));
            assert_eq!(
                patch,
                FormValue::from([
                    ("yearsInCurrentRole", FieldValue::Number(4)),
                    ("yearsSinceLastPromotion", FieldValue::Number(4)),
                ])
            );
        }
    }

    mod form_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_merged_overwrites_and_keeps_others() {
            let base = FormValue::from([
                ("age", FieldValue::Number(30)),
                ("gender", FieldValue::Text("Male".to_string())),
            ]);
            let patch = FormValue::from([("age", FieldValue::Number(31))]);
            let merged = base.merged(&patch);
            assert_eq!(merged.get("age"), Some(&FieldValue::Number(31)));
            assert_eq!(
                merged.get("gender"),
                Some(&FieldValue::Text("Male".to_string()))
            );
            assert_eq!(merged.len(), 2);
        }

        #[test]
        fn test_serializes_as_flat_object() {
            let value = FormValue::from([
                ("age", FieldValue::Number(30)),
                ("overTime", FieldValue::Text("Yes".to_string())),
            ]);
            let json = serde_json::to_value(&value).unwrap();
            assert_eq!(json, serde_json::json!({"age": 30, "overTime": "Yes"}));
        }

        #[test]
        fn test_default_is_empty() {
            assert!(FormValue::default().is_empty());
        }
    }
}
