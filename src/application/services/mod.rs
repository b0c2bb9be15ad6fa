mod translation_pipeline;

pub use translation_pipeline::{PipelineError, TranslationPipeline};
