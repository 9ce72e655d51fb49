mod engine;
mod extractor;
mod llm;
mod output;
mod render;
mod summarizer;

// Function boundary detection
mod boundary;
mod languages;

pub use extractor::extract_function;
pub use languages::Language;
pub use llm::{create_generator, Generator};
pub use output::{save_summary, SaveFormat};
pub use render::MarkdownRenderer;
pub use summarizer::{PromptBuilder, Summarizer};

// Export the main engine
pub use engine::Engine;
