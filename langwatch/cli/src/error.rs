//! Error types for the `lwm` binary.

use std::path::PathBuf;

use model_record::ModelError;
use thiserror::Error;

/// Errors that can occur while checking a document.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read standard input: {0}")]
    ReadStdin(#[source] std::io::Error),

    /// The input is not JSON at all
    #[error("input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The model name is not one `lwm models` lists
    #[error("unknown model '{0}'. Run 'lwm models' to see available models.")]
    UnknownModel(String),

    /// The document does not fit the model
    #[error("{model}: {source}")]
    Model {
        model: &'static str,
        #[source]
        source: ModelError,
    },

    /// Parsing the serialized form did not reproduce the parsed value
    #[error("{0}: serialized document does not parse back to the same value")]
    RoundTrip(&'static str),
}
