use std::str::FromStr;

use crate::{prelude::*, quantity::KilowattHourRate};

/// `#RRGGBB` color as understood by Pango markup.
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub struct HexColor(String);

impl HexColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |offset: usize| u8::from_str_radix(&self.0[offset..offset + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ensure!(
            s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit()),
            "`{s}` is not a `#RRGGBB` color",
        );
        Ok(Self(s.to_ascii_uppercase()))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Band {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug)]
pub struct ColorThresholds {
    min: KilowattHourRate,
    max: KilowattHourRate,
}

impl ColorThresholds {
    pub fn try_new(min: KilowattHourRate, max: KilowattHourRate) -> Result<Self> {
        ensure!(
            min.0.0.is_finite() && max.0.0.is_finite(),
            "the color thresholds must be finite numbers, got {min} and {max}",
        );
        ensure!(min < max, "the lower color threshold ({min}) must be below the upper one ({max})");
        Ok(Self { min, max })
    }

    /// Both thresholds belong to the outer bands.
    pub fn band_of(self, price: KilowattHourRate) -> Band {
        if price <= self.min {
            Band::Low
        } else if price >= self.max {
            Band::High
        } else {
            Band::Medium
        }
    }

    /// Position of the price between the thresholds, `0.0..=1.0`.
    fn fraction_of(self, price: KilowattHourRate) -> f64 {
        ((price.0 - self.min.0) / (self.max.0 - self.min.0)).0.clamp(0.0, 1.0)
    }
}

/// Thresholds together with the colors assigned to the bands.
///
/// The first palette color is the low band and the last one is the high band.
/// The colors in between split the medium band into equal steps.
#[derive(Clone, Debug)]
pub struct ColorScale {
    thresholds: ColorThresholds,
    low: HexColor,
    medium: Vec<HexColor>,
    high: HexColor,
}

impl ColorScale {
    pub fn try_new(thresholds: ColorThresholds, mut palette: Vec<HexColor>) -> Result<Self> {
        ensure!(palette.len() >= 3, "the palette needs at least 3 colors, got {}", palette.len());
        let high = palette.pop().context("empty palette")?;
        let low = palette.remove(0);
        Ok(Self { thresholds, low, medium: palette, high })
    }

    pub fn band_of(&self, price: KilowattHourRate) -> Band {
        self.thresholds.band_of(price)
    }

    pub fn price_to_color(&self, price: KilowattHourRate) -> &HexColor {
        match self.band_of(price) {
            Band::Low => &self.low,
            Band::High => &self.high,
            Band::Medium => {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss
                )]
                let index = (self.thresholds.fraction_of(price) * self.medium.len() as f64) as usize;
                &self.medium[index.min(self.medium.len() - 1)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[&str]) -> Result<Vec<HexColor>> {
        colors.iter().map(|color| color.parse::<HexColor>()).collect()
    }

    fn scale(min: f64, max: f64, colors: &[&str]) -> Result<ColorScale> {
        ColorScale::try_new(ColorThresholds::try_new(min.into(), max.into())?, palette(colors)?)
    }

    #[test]
    fn test_bands() -> Result {
        let thresholds = ColorThresholds::try_new(KilowattHourRate::from(5.0), KilowattHourRate::from(15.0))?;
        for price in [-3.0, 0.0, 4.99, 5.0] {
            assert_eq!(thresholds.band_of(KilowattHourRate::from(price)), Band::Low, "{price}");
        }
        for price in [5.01, 10.0, 13.7, 14.99] {
            assert_eq!(thresholds.band_of(KilowattHourRate::from(price)), Band::Medium, "{price}");
        }
        for price in [15.0, 15.01, 20.0, 1000.0] {
            assert_eq!(thresholds.band_of(KilowattHourRate::from(price)), Band::High, "{price}");
        }
        Ok(())
    }

    #[test]
    fn test_thresholds_must_be_ordered() {
        assert!(ColorThresholds::try_new(KilowattHourRate::from(5.0), KilowattHourRate::from(5.0)).is_err());
        assert!(ColorThresholds::try_new(KilowattHourRate::from(8.0), KilowattHourRate::from(2.0)).is_err());
    }

    #[test]
    fn test_thresholds_must_be_finite() {
        for (min, max) in [
            (2.0, f64::NAN),
            (f64::NAN, 8.0),
            (2.0, f64::INFINITY),
            (f64::NEG_INFINITY, 8.0),
        ] {
            assert!(
                ColorThresholds::try_new(KilowattHourRate::from(min), KilowattHourRate::from(max))
                    .is_err(),
                "{min}..{max}",
            );
        }
    }

    #[test]
    fn test_three_colors() -> Result {
        let scale = scale(5.0, 15.0, &["#00FF00", "#FFFF00", "#FF0000"])?;
        assert_eq!(scale.price_to_color(KilowattHourRate::from(5.0)).to_string(), "#00FF00");
        assert_eq!(scale.price_to_color(KilowattHourRate::from(5.01)).to_string(), "#FFFF00");
        assert_eq!(scale.price_to_color(KilowattHourRate::from(14.99)).to_string(), "#FFFF00");
        assert_eq!(scale.price_to_color(KilowattHourRate::from(15.0)).to_string(), "#FF0000");
        Ok(())
    }

    #[test]
    fn test_medium_band_grading() -> Result {
        let scale = scale(2.0, 8.0, &["#25AA00", "#72A300", "#BD9A00", "#EA7500", "#FF4400"])?;
        assert_eq!(scale.price_to_color(KilowattHourRate::from(2.5)).to_string(), "#72A300");
        assert_eq!(scale.price_to_color(KilowattHourRate::from(5.0)).to_string(), "#BD9A00");
        assert_eq!(scale.price_to_color(KilowattHourRate::from(7.9)).to_string(), "#EA7500");
        Ok(())
    }

    #[test]
    fn test_palette_too_short() -> Result {
        let thresholds = ColorThresholds::try_new(KilowattHourRate::from(2.0), KilowattHourRate::from(8.0))?;
        assert!(ColorScale::try_new(thresholds, palette(&["#000000", "#FFFFFF"])?).is_err());
        Ok(())
    }

    #[test]
    fn test_hex_color() -> Result {
        let color = "#ea7500".parse::<HexColor>()?;
        assert_eq!(color.to_string(), "#EA7500");
        assert_eq!(color.rgb(), (0xEA, 0x75, 0x00));
        assert!("EA7500".parse::<HexColor>().is_err());
        assert!("#EA75".parse::<HexColor>().is_err());
        assert!("#GG7500".parse::<HexColor>().is_err());
        Ok(())
    }
}
