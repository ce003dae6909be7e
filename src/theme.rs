//! Presentation mapping: glyphs, gradients and display formatting
//!
//! Everything here is a pure function of a [`WeatherReport`] (or part of one).
//! Components call into this module; nothing here touches state.

use artbox::{Color as ArtColor, Fill, LinearGradient};
use chrono::NaiveDate;
use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Glyph shown for condition codes outside the table.
pub const FALLBACK_ICON: &str = "🌡️";

/// OpenWeather icon code → glyph, day and night variants.
const ICONS: [(&str, &str); 18] = [
    ("01d", "☀️"),
    ("01n", "🌙"),
    ("02d", "⛅"),
    ("02n", "☁️"),
    ("03d", "☁️"),
    ("03n", "☁️"),
    ("04d", "☁️"),
    ("04n", "☁️"),
    ("09d", "🌧️"),
    ("09n", "🌧️"),
    ("10d", "🌦️"),
    ("10n", "🌧️"),
    ("11d", "⛈️"),
    ("11n", "⛈️"),
    ("13d", "❄️"),
    ("13n", "❄️"),
    ("50d", "🌫️"),
    ("50n", "🌫️"),
];

/// Look up the glyph for an OpenWeather icon code. Never fails.
pub fn icon_for(code: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK_ICON)
}

/// Background gradient bracket, chosen from the temperature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Backdrop {
    /// No result yet
    Default,
    /// Above 25°C
    Hot,
    /// Above 15°C
    Warm,
    /// Above 5°C
    Mild,
    /// 5°C and below
    Cold,
}

/// Pick the backdrop for a temperature; `None` means no result yet.
///
/// Brackets are strict: exactly 25, 15 and 5 fall to the next lower one.
pub fn gradient_for(temperature_c: Option<f64>) -> Backdrop {
    match temperature_c {
        None => Backdrop::Default,
        Some(t) if t > 25.0 => Backdrop::Hot,
        Some(t) if t > 15.0 => Backdrop::Warm,
        Some(t) if t > 5.0 => Backdrop::Mild,
        Some(_) => Backdrop::Cold,
    }
}

type Rgb = (u8, u8, u8);

impl Backdrop {
    /// Start and end stops of the 135° gradient
    pub fn stops(self) -> (Rgb, Rgb) {
        match self {
            Backdrop::Default => ((0x66, 0x7e, 0xea), (0x76, 0x4b, 0xa2)),
            Backdrop::Hot => ((0xf0, 0x93, 0xfb), (0xf5, 0x57, 0x6c)),
            Backdrop::Warm => ((0x4f, 0xac, 0xfe), (0x00, 0xf2, 0xfe)),
            Backdrop::Mild => ((0x43, 0xe9, 0x7b), (0x38, 0xf9, 0xd7)),
            Backdrop::Cold => ((0xa8, 0xed, 0xea), (0xfe, 0xd6, 0xe3)),
        }
    }

    /// Stops as terminal colors, for borders and plain text
    pub fn colors(self) -> (Color, Color) {
        let ((r1, g1, b1), (r2, g2, b2)) = self.stops();
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2))
    }

    /// Fill for artbox-rendered text
    pub fn fill(self) -> Fill {
        let ((r1, g1, b1), (r2, g2, b2)) = self.stops();
        Fill::Linear(LinearGradient::horizontal(
            ArtColor::rgb(r1, g1, b1),
            ArtColor::rgb(r2, g2, b2),
        ))
    }
}

/// Round half up, so -2.5 becomes -2 and 18.5 becomes 19.
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

/// Upper-case the first letter of every word: "light rain" → "Light Rain".
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Long en-US date, e.g. "Thursday, October 15, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// One card in the details row
#[derive(Clone, Debug, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

pub fn details(report: &WeatherReport) -> [Detail; 4] {
    [
        Detail {
            icon: "🌡️",
            label: "Feels Like",
            value: format!("{}°C", round_temperature(report.feels_like_c)),
        },
        Detail {
            icon: "💧",
            label: "Humidity",
            value: format!("{}%", report.humidity_pct),
        },
        Detail {
            icon: "💨",
            label: "Wind Speed",
            value: format!("{} m/s", report.wind_speed_ms),
        },
        Detail {
            icon: "🎚️",
            label: "Pressure",
            value: format!("{} hPa", report.pressure_hpa),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_table() {
        let expected = [
            ("01d", "☀️"),
            ("01n", "🌙"),
            ("02d", "⛅"),
            ("02n", "☁️"),
            ("03d", "☁️"),
            ("04n", "☁️"),
            ("09d", "🌧️"),
            ("10d", "🌦️"),
            ("10n", "🌧️"),
            ("11n", "⛈️"),
            ("13d", "❄️"),
            ("50n", "🌫️"),
        ];
        for (code, glyph) in expected {
            assert_eq!(icon_for(code), glyph, "code {code}");
        }
    }

    #[test]
    fn test_every_known_code_has_a_glyph() {
        for (code, _) in ICONS {
            assert_ne!(icon_for(code), FALLBACK_ICON, "code {code}");
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in ["", "01", "01D", "99d", " 01d", "clear"] {
            assert_eq!(icon_for(code), FALLBACK_ICON, "code {code:?}");
        }
    }

    #[test]
    fn test_gradient_brackets() {
        assert_eq!(gradient_for(None), Backdrop::Default);
        assert_eq!(gradient_for(Some(30.0)), Backdrop::Hot);
        assert_eq!(gradient_for(Some(25.1)), Backdrop::Hot);
        assert_eq!(gradient_for(Some(20.0)), Backdrop::Warm);
        assert_eq!(gradient_for(Some(10.0)), Backdrop::Mild);
        assert_eq!(gradient_for(Some(0.0)), Backdrop::Cold);
        assert_eq!(gradient_for(Some(-20.0)), Backdrop::Cold);
    }

    #[test]
    fn test_gradient_boundaries_fall_lower() {
        assert_eq!(gradient_for(Some(25.0)), Backdrop::Warm);
        assert_eq!(gradient_for(Some(15.0)), Backdrop::Mild);
        assert_eq!(gradient_for(Some(5.0)), Backdrop::Cold);
    }

    #[test]
    fn test_backdrop_stops_are_distinct() {
        let all = [
            Backdrop::Default,
            Backdrop::Hot,
            Backdrop::Warm,
            Backdrop::Mild,
            Backdrop::Cold,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.stops(), b.stops(), "{a:?} vs {b:?}");
            }
        }
        assert_eq!(
            Backdrop::Default.colors().0,
            Color::Rgb(0x66, 0x7e, 0xea)
        );
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_temperature(18.5), 19);
        assert_eq!(round_temperature(18.49), 18);
        assert_eq!(round_temperature(-2.5), -2);
        assert_eq!(round_temperature(-2.6), -3);
        assert_eq!(round_temperature(0.0), 0);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("clear sky"), "Clear Sky");
        assert_eq!(capitalize_words("light  rain"), "Light  Rain");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(format_date(date), "Thursday, October 15, 2026");

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(date), "Monday, January 1, 2024");
    }

    #[test]
    fn test_details() {
        let report = WeatherReport {
            feels_like_c: 18.6,
            humidity_pct: 50.0,
            wind_speed_ms: 3.6,
            pressure_hpa: 1012.0,
            ..Default::default()
        };

        let values: Vec<_> = details(&report).into_iter().map(|d| d.value).collect();
        assert_eq!(values, vec!["19°C", "50%", "3.6 m/s", "1012 hPa"]);
    }
}
