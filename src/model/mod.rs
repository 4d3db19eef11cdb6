pub mod config;
pub mod extraction;
pub mod report;

pub use config::Config;
pub use extraction::{ExtractedClaims, ExtractedProducts, Product};
pub use report::{AnalysisReport, InfringementLikelihood, InfringementVerdict, ProductAssessment};
