//! Prompt management records.
//!
//! Covers the response of the prompt versions endpoint: a [`PromptVersion`]
//! wraps the [`PromptConfigData`] that was committed, which in turn nests the
//! prompt's messages, input and output declarations and demonstrations.

mod types;

pub use types::{
    DemonstrationColumn, Demonstrations, InputType, MessageRole, OutputType, PromptConfigData,
    PromptInput, PromptMessage, PromptOutput, PromptVersion, PromptingTechnique,
};
