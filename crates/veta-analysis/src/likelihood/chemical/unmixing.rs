//! Spectral unmixing.
//!
//! [`SpectralUnmixer`] is the seam for real unmixing physics. The default
//! [`LibraryUnmixer`] is a band matcher: a mineral is detected when its
//! diagnostic absorption bands appear in the sample, and its abundance is
//! estimated from the depth of the matched features.

use veta_core::types::SpectralSample;

/// One mineral identified in a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MineralDetection {
    pub mineral: String,
    /// Estimated areal abundance in [0.0, 1.0].
    pub abundance: f64,
    /// Match confidence in [0.0, 1.0].
    pub confidence: f64,
}

/// Output of unmixing one sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnmixingResult {
    pub detections: Vec<MineralDetection>,
    /// Share of the sample's features the fit could not explain.
    pub uncertainty: f64,
    /// False when the sample had nothing to fit.
    pub fitted: bool,
}

pub trait SpectralUnmixer: Send + Sync {
    fn unmix(&self, sample: &SpectralSample) -> UnmixingResult;
}

/// Reference absorption bands for one mineral.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry {
    pub mineral: &'static str,
    pub bands_nm: &'static [f64],
}

/// Built-in SWIR reference library.
pub const REFERENCE_LIBRARY: &[LibraryEntry] = &[
    LibraryEntry { mineral: "kaolinite", bands_nm: &[1395.0, 2165.0, 2206.0] },
    LibraryEntry { mineral: "alunite", bands_nm: &[1480.0, 1762.0, 2165.0] },
    LibraryEntry { mineral: "sericite", bands_nm: &[1408.0, 2200.0, 2350.0] },
    LibraryEntry { mineral: "illite", bands_nm: &[1410.0, 2205.0, 2345.0] },
    LibraryEntry { mineral: "pyrophyllite", bands_nm: &[1393.0, 2167.0] },
    LibraryEntry { mineral: "chlorite", bands_nm: &[2250.0, 2330.0] },
    LibraryEntry { mineral: "epidote", bands_nm: &[1550.0, 2255.0, 2340.0] },
    LibraryEntry { mineral: "biotite", bands_nm: &[2250.0, 2380.0] },
    LibraryEntry { mineral: "montmorillonite", bands_nm: &[1410.0, 1910.0, 2208.0] },
    LibraryEntry { mineral: "hectorite", bands_nm: &[1390.0, 1910.0, 2310.0] },
    LibraryEntry { mineral: "gypsum", bands_nm: &[1450.0, 1490.0, 1750.0, 1940.0] },
    LibraryEntry { mineral: "borax", bands_nm: &[1480.0, 1730.0, 2050.0] },
    LibraryEntry { mineral: "ulexite", bands_nm: &[1460.0, 1780.0, 1980.0] },
    LibraryEntry { mineral: "calcite", bands_nm: &[1995.0, 2155.0, 2340.0] },
    LibraryEntry { mineral: "siderite", bands_nm: &[1050.0, 2330.0] },
];

/// Band matcher over a reference library.
#[derive(Debug, Clone)]
pub struct LibraryUnmixer {
    library: Vec<LibraryEntry>,
    /// Max distance (nm) between a sample feature and a reference band.
    tolerance_nm: f64,
}

impl Default for LibraryUnmixer {
    fn default() -> Self {
        Self {
            library: REFERENCE_LIBRARY.to_vec(),
            tolerance_nm: 12.0,
        }
    }
}

impl LibraryUnmixer {
    pub fn with_library(library: Vec<LibraryEntry>, tolerance_nm: f64) -> Self {
        Self {
            library,
            tolerance_nm,
        }
    }
}

impl SpectralUnmixer for LibraryUnmixer {
    fn unmix(&self, sample: &SpectralSample) -> UnmixingResult {
        if sample.features.is_empty() {
            return UnmixingResult::default();
        }

        let mut explained = vec![false; sample.features.len()];
        let mut detections = Vec::new();

        for entry in &self.library {
            let mut depths = Vec::with_capacity(entry.bands_nm.len());
            for band in entry.bands_nm {
                let hit = sample
                    .features
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| (f.wavelength_nm - band).abs() <= self.tolerance_nm)
                    .max_by(|a, b| a.1.depth.total_cmp(&b.1.depth));
                if let Some((idx, feature)) = hit {
                    explained[idx] = true;
                    depths.push(feature.depth.clamp(0.0, 1.0));
                }
            }
            if depths.is_empty() {
                continue;
            }
            let matched_fraction = depths.len() as f64 / entry.bands_nm.len() as f64;
            let mean_depth = depths.iter().sum::<f64>() / depths.len() as f64;
            detections.push(MineralDetection {
                mineral: entry.mineral.to_string(),
                abundance: (mean_depth * matched_fraction).clamp(0.0, 1.0),
                confidence: matched_fraction,
            });
        }

        let unexplained = explained.iter().filter(|e| !**e).count();
        UnmixingResult {
            detections,
            uncertainty: unexplained as f64 / sample.features.len() as f64,
            fitted: true,
        }
    }
}
