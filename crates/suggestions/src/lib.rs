//! Suggestion application engine.
//!
//! Takes an AI suggestion payload and a platform's draft and produces the
//! updated draft. One generic engine, parameterized by a static
//! [`PlatformProfile`] per advertising platform.

pub mod coerce;
pub mod defaults;
pub mod mapper;
pub mod merge;
pub mod normalizer;
pub mod platforms;
pub mod profile;
pub mod range;
pub mod sequencer;
pub mod validity;

pub use defaults::apply_defaults;
pub use mapper::map_value;
pub use merge::merge_array;
pub use normalizer::normalize;
pub use platforms::profile_for;
pub use profile::{DefaultValue, FieldKind, FieldSpec, PlatformProfile};
pub use range::clamp_range;
pub use sequencer::{auto_apply, ApplyReport, ApplyState, AutoApplySequencer};
pub use validity::{is_launch_ready, is_step_valid, missing_fields};
