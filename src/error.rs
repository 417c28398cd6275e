use thiserror::Error;

/// Everything that can make a step of the opener skip its work.
///
/// None of these leave the crate through the tick loop: the sequencer turns
/// them into [`StepEvent::Skipped`](crate::opener::StepEvent::Skipped).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpenerError {
	#[error("missing input: {0}")]
	MissingInput(&'static str),
	#[error("computation failed: {0}")]
	ComputationFailure(String),
	#[error("dispatch failed: {0}")]
	DispatchFailure(String),
	#[error("telemetry sink failed: {0}")]
	Telemetry(String),
	#[error("invalid options: {0}")]
	InvalidOptions(String),
}

pub type OpenerResult<T> = Result<T, OpenerError>;
