//! Chemical (spectral) likelihood.

pub mod alteration;
pub mod engine;
pub mod scan;
pub mod unmixing;

pub use alteration::{AlterationAssemblage, AlterationScore};
pub use engine::{ChemicalAssessment, ChemicalLikelihood, UncertaintyBreakdown};
pub use scan::SpectralScan;
pub use unmixing::{LibraryUnmixer, MineralDetection, SpectralUnmixer, UnmixingResult};
