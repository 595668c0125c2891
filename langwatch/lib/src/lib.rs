//! LangWatch API Records
//!
//! Typed request and response records for the LangWatch HTTP API as used by
//! scenario testing. Every type converts losslessly to and from its JSON
//! document through [`model_record::ModelRecord`] (or
//! [`model_record::WireValue`] for unions) and keeps keys it does not declare.
//!
//! ## Available Modules
//!
//! - [`prompts`] - Prompt versions and their configuration
//! - [`scenario`] - Scenario run events and chat messages
//!
//! ## Examples
//!
//! ```
//! use langwatch_models::prelude::*;
//! use serde_json::json;
//!
//! let event = ScenarioEvent::from_wire(json!({
//!     "type": "SCENARIO_MESSAGE_SNAPSHOT",
//!     "timestamp": 1718000000000u64,
//!     "batch_run_id": "batch_1",
//!     "scenario_id": "checkout",
//!     "scenario_run_id": "run_1",
//!     "messages": [{"role": "user", "content": "hi"}]
//! }))
//! .unwrap();
//!
//! assert_eq!(event.batch_run_id(), "batch_1");
//! ```

pub mod prelude;
pub mod prompts;
pub mod scenario;

pub use model_record::{AdditionalProperties, Field, ModelError, ModelRecord, WireValue};
