pub mod analyzer;
pub mod parser;
pub mod prompt;
pub mod types;
pub mod validator;

pub use analyzer::SentimentAnalyzer;
pub use parser::parse_response;
pub use prompt::{build_prompt, format_comments};
pub use types::{comment_text, AnalysisResult};
pub use validator::{validate, validate_comments};
