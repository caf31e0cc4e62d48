pub mod classification;
pub mod profile;

pub use classification::{
    AdvancedWaste, AnalysisMethod, ClassificationResult, ErrorResult, ImagePayload,
    PackagingAnalysis, ProductDetails, ProductResult, ScanMode, SimpleWaste, SimpleWasteKind,
    WasteCategory,
};
pub use profile::{
    Achievement, EnvironmentalRank, ImpactData, ImpactEquivalents, ProfileView, UserProfile,
    WasteBreakdownEntry,
};
