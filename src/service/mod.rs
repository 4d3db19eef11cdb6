pub mod analysis;
pub mod claims;
pub mod infringement;
pub mod llm;
pub mod openai;
pub mod products;
pub mod sanitize;

pub use analysis::AnalysisService;
pub use claims::ClaimsService;
pub use infringement::InfringementService;
pub use llm::LanguageModel;
pub use openai::OpenAiClient;
pub use products::ProductsService;
