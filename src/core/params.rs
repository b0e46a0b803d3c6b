// params.rs - Detection parameters, presets and scan modes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::composition::Metrics;
use super::error::IslandError;

/// Thresholds and target dinucleotide for one detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub min_window_size: usize,
    pub min_gc_fraction: f64,
    pub min_obs_exp_ratio: f64,
    pub merge_gap: usize,
    #[serde(with = "symbol")]
    pub first_symbol: u8,
    #[serde(with = "symbol")]
    pub second_symbol: u8,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            min_window_size: 200,
            min_gc_fraction: 0.5,
            min_obs_exp_ratio: 0.6,
            merge_gap: 100,
            first_symbol: b'C',
            second_symbol: b'G',
        }
    }
}

impl Parameters {
    /// Create parameters from a named preset
    pub fn from_preset(preset: &str) -> Result<Self, String> {
        match preset.to_lowercase().as_str() {
            "gardiner-garden" | "default" => Ok(Self::default()),
            "takai-jones" => Ok(Self {
                min_window_size: 500,
                min_gc_fraction: 0.55,
                min_obs_exp_ratio: 0.65,
                ..Self::default()
            }),
            _ => Err(format!(
                "Unknown preset: {}. Use: gardiner-garden, takai-jones",
                preset
            )),
        }
    }

    /// Check every threshold against its valid domain
    pub fn validate(&self) -> Result<(), IslandError> {
        if self.min_window_size < 1 {
            return Err(IslandError::InvalidParameters(
                "minimum window size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_gc_fraction) {
            return Err(IslandError::InvalidParameters(format!(
                "minimum GC fraction must be between 0.0 and 1.0, got {}",
                self.min_gc_fraction
            )));
        }
        if !self.min_obs_exp_ratio.is_finite() || self.min_obs_exp_ratio < 0.0 {
            return Err(IslandError::InvalidParameters(format!(
                "minimum observed/expected ratio must be a finite value >= 0.0, got {}",
                self.min_obs_exp_ratio
            )));
        }
        for (name, symbol) in [("first", self.first_symbol), ("second", self.second_symbol)] {
            if !symbol.is_ascii_graphic() {
                return Err(IslandError::InvalidParameters(format!(
                    "{} symbol must be a printable ASCII character, got byte {}",
                    name, symbol
                )));
            }
        }
        Ok(())
    }

    /// Whether a window with these metrics passes both thresholds
    #[inline]
    pub fn qualifies(&self, metrics: &Metrics) -> bool {
        metrics.gc_fraction >= self.min_gc_fraction
            && metrics.obs_exp_ratio >= self.min_obs_exp_ratio
    }

    /// Target dinucleotide as text, e.g. "CG"
    pub fn dinucleotide(&self) -> String {
        format!("{}{}", self.first_symbol as char, self.second_symbol as char)
    }

    /// True when the composition index built for `other` can serve these parameters
    pub fn same_symbols(&self, other: &Parameters) -> bool {
        self.first_symbol == other.first_symbol && self.second_symbol == other.second_symbol
    }
}

/// Serde helper storing a symbol byte as a one-character string
mod symbol {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str((*value as char).encode_utf8(&mut buf))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(de::Error::custom(format!(
                "expected a single ASCII symbol, got '{}'",
                s
            ))),
        }
    }
}

/// What the scanner reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Extended, merged islands
    Islands,
    /// Every qualifying fixed-size window, overlapping, unmerged
    Windows,
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "islands" | "takai-jones" => Ok(ScanMode::Islands),
            "windows" | "fixed" => Ok(ScanMode::Windows),
            _ => Err(format!("Invalid scan mode: {}. Use: islands, windows", s)),
        }
    }
}

impl ScanMode {
    pub fn description(&self) -> &str {
        match self {
            ScanMode::Islands => "extended and merged islands",
            ScanMode::Windows => "qualifying fixed-size windows (no extension, no merge)",
        }
    }
}
