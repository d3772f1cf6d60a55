//! Hex color parsing and darkening.
//!
//! Colors are accepted as `#rgb` or `#rrggbb` (the leading `#` is optional)
//! and always re-encoded as lowercase `#rrggbb`.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("'{0}' is not a hex color (expected #rgb or #rrggbb)")]
    NotHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let hex = input.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(input.to_string()));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::NotHex(input.to_string()));

        match digits.len() {
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self {
                    r: expand(&digits[0..1])?,
                    g: expand(&digits[1..2])?,
                    b: expand(&digits[2..3])?,
                })
            }
            _ => Err(ColorError::NotHex(input.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Subtract `amount` from every channel, clamping each one at zero.
    pub fn darkened_by(self, amount: i32) -> Self {
        let shift = |c: u8| (i32::from(c) - amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Channel offset for a darkening percentage: `round(2.55 * percent)`.
pub fn darken_amount(percent: f64) -> i32 {
    (2.55 * percent).round() as i32
}

/// Darken a hex color by `percent` of the full channel range.
///
/// Each channel is clamped to `[0, 255]` independently before encoding, so
/// negative percentages lighten and saturate at white.
pub fn darken(color: &str, percent: f64) -> Result<String, ColorError> {
    let rgb = Rgb::parse_hex(color)?;
    Ok(rgb.darkened_by(darken_amount(percent)).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("#ff0000", Rgb::new(255, 0, 0))]
    #[case("00ff00", Rgb::new(0, 255, 0))]
    #[case("#0000FF", Rgb::new(0, 0, 255))]
    #[case("#abc", Rgb::new(0xaa, 0xbb, 0xcc))]
    fn parses_hex_forms(#[case] input: &str, #[case] expected: Rgb) {
        assert_eq!(Rgb::parse_hex(input).unwrap(), expected);
    }

    #[rstest]
    #[case("rgba(255, 255, 255, 0.1)")]
    #[case("#12345")]
    #[case("#gggggg")]
    #[case("")]
    #[case("#+1+2+3")]
    fn rejects_non_hex(#[case] input: &str) {
        assert!(Rgb::parse_hex(input).is_err());
    }

    #[test]
    fn darkens_forest_green_like_the_widget() {
        // amt = round(2.55 * 10) = 26
        assert_eq!(darken("#059669", 10.0).unwrap(), "#007c4f");
        assert_eq!(darken("#112233", 10.0).unwrap(), "#000819");
    }

    #[test]
    fn darken_clamps_channels_independently() {
        assert_eq!(darken("#ff0a80", 100.0).unwrap(), "#000000");
        assert_eq!(darken("#fafafa", -10.0).unwrap(), "#ffffff");
    }

    #[test]
    fn darken_normalizes_case_and_shorthand() {
        assert_eq!(darken("#ABCDEF", 0.0).unwrap(), "#abcdef");
        assert_eq!(darken("#fff", 0.0).unwrap(), "#ffffff");
    }

    proptest! {
        #[test]
        fn darken_by_zero_is_identity(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Rgb::new(r, g, b).to_hex();
            prop_assert_eq!(darken(&color, 0.0).unwrap(), color);
        }

        #[test]
        fn darken_never_increases_a_channel(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            percent in 0.0f64..=100.0,
        ) {
            let original = Rgb::new(r, g, b);
            let darker = Rgb::parse_hex(&darken(&original.to_hex(), percent).unwrap()).unwrap();
            prop_assert!(darker.r <= original.r);
            prop_assert!(darker.g <= original.g);
            prop_assert!(darker.b <= original.b);
        }

        #[test]
        fn darken_output_is_six_digit_hex(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            percent in -200.0f64..=200.0,
        ) {
            let out = darken(&Rgb::new(r, g, b).to_hex(), percent).unwrap();
            prop_assert_eq!(out.len(), 7);
            prop_assert!(out.starts_with('#'));
            prop_assert!(out[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn darkening_is_monotonic_in_percent(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            low in 0.0f64..=50.0,
            extra in 0.0f64..=50.0,
        ) {
            let color = Rgb::new(r, g, b).to_hex();
            let a = Rgb::parse_hex(&darken(&color, low).unwrap()).unwrap();
            let z = Rgb::parse_hex(&darken(&color, low + extra).unwrap()).unwrap();
            prop_assert!(z.r <= a.r && z.g <= a.g && z.b <= a.b);
        }
    }
}
