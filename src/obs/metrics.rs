// self
use crate::{
	obs::{CallOutcome, TokenOutcome},
	platform::PlatformKind,
};

/// Records a resource call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(platform: PlatformKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"zerion_api_call_total",
			"platform" => platform.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (platform, outcome);
	}
}

/// Records a token exchange outcome via the global metrics recorder (when enabled).
pub fn record_token_outcome(platform: PlatformKind, outcome: TokenOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"zerion_api_token_total",
			"platform" => platform.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (platform, outcome);
	}
}
