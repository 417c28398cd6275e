//! Optional diagnostics receiving every step report.

use crate::{
	error::{OpenerError, OpenerResult},
	opener::StepReport,
};
use std::{cell::RefCell, rc::Rc};

/// Receiver of step reports.
///
/// Errors are logged by the opener and never stop the step.
pub trait Telemetry {
	fn record(&mut self, report: &StepReport) -> OpenerResult<()>;
}

/// Logs steps which did anything at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;
impl Telemetry for LogTelemetry {
	fn record(&mut self, report: &StepReport) -> OpenerResult<()> {
		if !report.is_quiet() {
			info!("{}", report);
		}
		Ok(())
	}
}

/// Keeps all reports in memory, up to `limit` of them.
#[derive(Debug, Default, Clone)]
pub struct MemoryTelemetry {
	pub reports: Vec<StepReport>,
	pub limit: Option<usize>,
}
impl MemoryTelemetry {
	pub fn with_limit(limit: usize) -> Self {
		Self {
			reports: Vec::new(),
			limit: Some(limit),
		}
	}
}
impl Telemetry for MemoryTelemetry {
	fn record(&mut self, report: &StepReport) -> OpenerResult<()> {
		if let Some(limit) = self.limit {
			if self.reports.len() >= limit {
				return Err(OpenerError::Telemetry(format!(
					"report limit of {} reached",
					limit
				)));
			}
		}
		self.reports.push(report.clone());
		Ok(())
	}
}

/// Shared sink, so host can read it while the opener owns a handle.
impl<T: Telemetry> Telemetry for Rc<RefCell<T>> {
	fn record(&mut self, report: &StepReport) -> OpenerResult<()> {
		self.try_borrow_mut()
			.map_err(|e| OpenerError::Telemetry(e.to_string()))?
			.record(report)
	}
}
