//! Order form data and the decimal input sanitizer

use serde::{Deserialize, Serialize};

/// Brace shell color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BraceColor {
    #[default]
    Graphite,
    Navy,
}

impl BraceColor {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Graphite => Self::Navy,
            Self::Navy => Self::Graphite,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Graphite => "Graphite",
            Self::Navy => "Navy",
        }
    }
}

/// Which leg the brace is fitted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegSide {
    #[default]
    Left,
    Right,
}

impl LegSide {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// The two leg measurement fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    Upper,
    Lower,
}

/// User-editable order fields, serialized as the submission payload.
///
/// The size fields always hold a sanitized decimal string (see
/// [`sanitize_decimal`]), never a raw keystroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub color: BraceColor,
    pub leg: LegSide,
    pub size_upper: String,
    pub size_lower: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            color: BraceColor::default(),
            leg: LegSide::default(),
            size_upper: "0".to_string(),
            size_lower: "0".to_string(),
        }
    }
}

impl OrderForm {
    /// Replace the color selection; all other fields unchanged
    pub fn set_color(&mut self, color: BraceColor) {
        self.color = color;
    }

    /// Replace the leg selection; all other fields unchanged
    pub fn set_leg(&mut self, leg: LegSide) {
        self.leg = leg;
    }

    pub fn size(&self, field: SizeField) -> &str {
        match field {
            SizeField::Upper => &self.size_upper,
            SizeField::Lower => &self.size_lower,
        }
    }

    fn size_mut(&mut self, field: SizeField) -> &mut String {
        match field {
            SizeField::Upper => &mut self.size_upper,
            SizeField::Lower => &mut self.size_lower,
        }
    }

    /// Type a character into a size field. The field is rebuilt through the
    /// sanitizer, so the stored value is always a valid decimal string.
    ///
    /// A field holding the placeholder "0" is replaced when a digit is typed
    /// (appending would sanitize "05" straight back to "0").
    pub fn input_size_char(&mut self, field: SizeField, c: char) {
        let current = self.size(field);
        let raw = if current == "0" && c.is_ascii_digit() {
            c.to_string()
        } else {
            format!("{current}{c}")
        };
        *self.size_mut(field) = sanitize_decimal(&raw);
    }

    /// Backspace in a size field. An emptied field falls back to "0".
    pub fn backspace_size(&mut self, field: SizeField) {
        let mut value = self.size(field).to_string();
        value.pop();
        *self.size_mut(field) = sanitize_decimal(&value);
    }

    /// True when the field's value parses and exceeds 50 inches. The value is
    /// kept as-is either way; the caller only raises an advisory.
    pub fn size_out_of_range(&self, field: SizeField) -> bool {
        self.size(field)
            .parse::<f64>()
            .map(|v| v > 50.0)
            .unwrap_or(false)
    }
}

/// Reduce raw text to the longest prefix matching
/// `("1".."9" digit* | "0") ("." digit{0,2})?`, or "0" when no prefix
/// matches. Extra fractional digits are truncated, never rounded.
pub fn sanitize_decimal(raw: &str) -> String {
    let bytes = raw.as_bytes();

    // Integer part: a single standalone "0", or a nonzero digit followed by
    // any further digits.
    let mut end = match bytes.first() {
        Some(b'0') => 1,
        Some(b'1'..=b'9') => {
            let mut i = 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            i
        }
        _ => return "0".to_string(),
    };

    // Optional decimal point with up to two fractional digits.
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        let mut frac = 0;
        while frac < 2 && bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            frac += 1;
        }
    }

    raw[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod sanitizer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_plain_integer_passes_through() {
            assert_eq!(sanitize_decimal("12"), "12");
        }

        #[test]
        fn test_standalone_zero_is_valid() {
            assert_eq!(sanitize_decimal("0"), "0");
        }

        #[test]
        fn test_leading_zeros_keep_only_the_first() {
            assert_eq!(sanitize_decimal("007"), "0");
            assert_eq!(sanitize_decimal("00.5"), "0");
        }

        #[test]
        fn test_zero_then_fraction_is_valid() {
            assert_eq!(sanitize_decimal("0.5"), "0.5");
        }

        #[test]
        fn test_fraction_truncated_to_two_digits() {
            assert_eq!(sanitize_decimal("12.345"), "12.34");
            assert_eq!(sanitize_decimal("0.999"), "0.99");
        }

        #[test]
        fn test_trailing_decimal_point_is_kept() {
            assert_eq!(sanitize_decimal("12."), "12.");
        }

        #[test]
        fn test_no_valid_prefix_yields_zero() {
            assert_eq!(sanitize_decimal(""), "0");
            assert_eq!(sanitize_decimal(".5"), "0");
            assert_eq!(sanitize_decimal("abc"), "0");
            assert_eq!(sanitize_decimal("-3"), "0");
        }

        #[test]
        fn test_trailing_garbage_dropped() {
            assert_eq!(sanitize_decimal("5a7"), "5");
            assert_eq!(sanitize_decimal("12.3.4"), "12.3");
            assert_eq!(sanitize_decimal("12x.5"), "12");
        }

        #[test]
        fn test_idempotent() {
            for raw in ["007", "12.345", "00.5", "0.5", "", "12.", "5a7", "49.99"] {
                let once = sanitize_decimal(raw);
                assert_eq!(sanitize_decimal(&once), once, "input {raw:?}");
            }
        }
    }

    mod order_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults() {
            let order = OrderForm::default();
            assert_eq!(order.color, BraceColor::Graphite);
            assert_eq!(order.leg, LegSide::Left);
            assert_eq!(order.size_upper, "0");
            assert_eq!(order.size_lower, "0");
        }

        #[test]
        fn test_set_color_leaves_other_fields() {
            let mut order = OrderForm::default();
            order.set_color(BraceColor::Navy);
            assert_eq!(order.color, BraceColor::Navy);
            assert_eq!(order.leg, LegSide::Left);
            assert_eq!(order.size_upper, "0");
        }

        #[test]
        fn test_typing_replaces_placeholder_zero() {
            let mut order = OrderForm::default();
            order.input_size_char(SizeField::Upper, '5');
            assert_eq!(order.size_upper, "5");
        }

        #[test]
        fn test_typing_builds_a_decimal() {
            let mut order = OrderForm::default();
            for c in "12.34".chars() {
                order.input_size_char(SizeField::Upper, c);
            }
            assert_eq!(order.size_upper, "12.34");
        }

        #[test]
        fn test_zero_point_fraction_entry() {
            let mut order = OrderForm::default();
            order.input_size_char(SizeField::Lower, '.');
            assert_eq!(order.size_lower, "0.");
            order.input_size_char(SizeField::Lower, '5');
            assert_eq!(order.size_lower, "0.5");
        }

        #[test]
        fn test_third_fractional_digit_ignored() {
            let mut order = OrderForm::default();
            for c in "1.234".chars() {
                order.input_size_char(SizeField::Upper, c);
            }
            assert_eq!(order.size_upper, "1.23");
        }

        #[test]
        fn test_non_numeric_char_ignored() {
            let mut order = OrderForm::default();
            order.input_size_char(SizeField::Upper, '7');
            order.input_size_char(SizeField::Upper, 'x');
            assert_eq!(order.size_upper, "7");
        }

        #[test]
        fn test_backspace_pops_and_resanitizes() {
            let mut order = OrderForm::default();
            for c in "12.3".chars() {
                order.input_size_char(SizeField::Upper, c);
            }
            order.backspace_size(SizeField::Upper);
            assert_eq!(order.size_upper, "12.");
            order.backspace_size(SizeField::Upper);
            assert_eq!(order.size_upper, "12");
        }

        #[test]
        fn test_backspace_on_empty_falls_back_to_zero() {
            let mut order = OrderForm::default();
            order.input_size_char(SizeField::Upper, '5');
            order.backspace_size(SizeField::Upper);
            assert_eq!(order.size_upper, "0");
        }

        #[test]
        fn test_out_of_range_detection() {
            let mut order = OrderForm::default();
            order.input_size_char(SizeField::Upper, '5');
            order.input_size_char(SizeField::Upper, '1');
            assert!(order.size_out_of_range(SizeField::Upper));
            // Value is reported, not clamped
            assert_eq!(order.size_upper, "51");

            assert!(!order.size_out_of_range(SizeField::Lower));
        }

        #[test]
        fn test_boundary_value_50_is_in_range() {
            let mut order = OrderForm::default();
            order.input_size_char(SizeField::Lower, '5');
            order.input_size_char(SizeField::Lower, '0');
            assert!(!order.size_out_of_range(SizeField::Lower));
        }

        #[test]
        fn test_serializes_with_wire_field_names() {
            let mut order = OrderForm::default();
            order.set_color(BraceColor::Navy);
            order.set_leg(LegSide::Right);
            order.size_upper = "12.5".to_string();

            let json = serde_json::to_value(&order).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "color": "navy",
                    "leg": "right",
                    "sizeUpper": "12.5",
                    "sizeLower": "0",
                })
            );
        }
    }
}
