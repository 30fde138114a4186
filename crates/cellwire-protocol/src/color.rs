//! Color literals given as loosely-typed JSON.

use cellwire_core::{Color, ColorInput};
use serde_json::Value;

use crate::error::Result;

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Normalize a JSON color literal.
///
/// Accepts a hex string (`"#ff0000"`), an array of three integers in
/// `0..=255`, or a `{red, green, blue}` map of fractions. Channels
/// missing from a map are `0.0`, since the service omits zero channels.
/// Anything else is [`cellwire_core::Error::UnsupportedColorFormat`].
pub fn color_from_literal(value: &Value) -> Result<Color> {
    let input = classify(value)
        .ok_or_else(|| cellwire_core::Error::UnsupportedColorFormat(value.to_string()))?;
    Ok(Color::normalize(input)?)
}

fn classify(value: &Value) -> Option<ColorInput> {
    match value {
        Value::String(s) => Some(ColorInput::Hex(s.clone())),
        Value::Array(items) if items.len() == 3 => {
            let mut rgb = [0u8; 3];
            for (slot, item) in rgb.iter_mut().zip(items) {
                *slot = item.as_u64().and_then(|n| u8::try_from(n).ok())?;
            }
            Some(ColorInput::Rgb8(rgb))
        }
        Value::Object(map)
            if map
                .iter()
                .all(|(k, v)| CHANNELS.contains(&k.as_str()) && v.is_number()) =>
        {
            let channel = |k: &str| map.get(k).and_then(Value::as_f64).unwrap_or(0.0);
            Some(ColorInput::Fractional(Color::new(
                channel("red"),
                channel("green"),
                channel("blue"),
            )))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_all_shapes_agree() {
        let red = Color::new(1.0, 0.0, 0.0);
        assert_eq!(color_from_literal(&json!("#FF0000")).unwrap(), red);
        assert_eq!(color_from_literal(&json!([255, 0, 0])).unwrap(), red);
        assert_eq!(color_from_literal(&json!({"red": 1.0})).unwrap(), red);
    }

    #[test]
    fn test_fractional_map_passes_through() {
        let c = color_from_literal(&json!({"red": 0.2, "green": 0.4, "blue": 0.6, "alpha": 1}));
        assert_eq!(c.unwrap(), Color::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_rejects_other_shapes() {
        for bad in [
            json!(42),
            json!(null),
            json!([255, 0]),
            json!([256, 0, 0]),
            json!([-1, 0, 0]),
            json!({"hue": 0.5}),
            json!({"red": "1"}),
            json!("#12345"),
        ] {
            assert!(
                matches!(
                    color_from_literal(&bad),
                    Err(Error::Core(cellwire_core::Error::UnsupportedColorFormat(_)))
                ),
                "{bad} should be rejected"
            );
        }
    }
}
