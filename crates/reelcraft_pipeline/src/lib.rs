//! Pipeline steps for turning a model-suggested topic into a production kit.
//!
//! A run has four steps, each awaited in turn:
//!
//! 1. [`generate_video_topics`] asks the model for candidate topics and
//!    [`extract_topics`] splits the answer into [`Topic`]s
//! 2. [`select_topic_index`] picks one, explicitly or on the console
//! 3. [`generate_visual_prompts`] asks for five POV moments as JSON
//! 4. [`prepare_leonardo_instructions`] and [`prepare_workflow_guide`] write
//!    the markdown guides
//!
//! [`run_pipeline`] chains them using a [`PipelineContext`] built by
//! [`setup_environment`].
//!
//! [`Topic`]: reelcraft_core::Topic

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod documents;
mod environment;
mod extraction;
mod orchestrator;
mod prompts;
mod request;
mod selection;
mod topics;

pub use config::{ApiConfig, ModelsConfig, OutputConfig, ReelcraftConfig, TopicsConfig};
pub use documents::{
    INSTRUCTIONS_SUFFIX, WORKFLOW_SUFFIX, prepare_leonardo_instructions, prepare_workflow_guide,
    render_leonardo_instructions, render_workflow_guide,
};
pub use environment::{PipelineContext, load_dotenv, resolve_api_key, setup_environment};
pub use extraction::{
    BoldStrategy, DEFAULT_MINIMUM_MATCHES, ExtractionStrategy, LineStrategy,
    NumberedListStrategy, TopicExtractor, extract_topics,
};
pub use orchestrator::{
    DocumentPaths, MISSING_MOMENT, PREVIEW_CHARS, RunSummary, TopicsStep, print_previews,
    render_documents, run_pipeline, run_topics_step,
};
pub use prompts::{
    EXCERPT_CHARS, PROMPTS_SUFFIX, PromptOutcome, generate_visual_prompts, load_visual_prompts,
    parse_visual_prompts, visual_prompts_instruction,
};
pub use selection::{
    INVALID_INPUT, INVALID_SELECTION, SelectionInput, TopicSelection, prompt_for_topic,
    select_topic_index,
};
pub use topics::{TOPICS_FILE, TOPICS_INSTRUCTION, generate_video_topics, save_topics};
