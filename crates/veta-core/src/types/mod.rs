//! Value types shared by every stage of the pipeline.
//!
//! Everything here is plain data: `serde`-serializable, no embedded
//! behavior beyond small classification helpers.

pub mod age;
pub mod commodity;
pub mod distributions;
pub mod evidence;
pub mod target;

pub use age::{parse_age, ParsedAge};
pub use commodity::{Commodity, EvidenceType};
pub use distributions::{
    ConfidenceClass, IndependenceCorrection, LikelihoodDistribution, PosteriorDistribution,
    PriorDistribution, PriorFactors,
};
pub use evidence::{AbsorptionFeature, ChemicalEvidence, EvidenceCollections, FieldObservation, SpectralSample};
pub use target::{
    GeologicalTarget, Location, MetamorphicGrade, Preservation, Stratigraphy, Structure,
    WeatheringIntensity,
};
