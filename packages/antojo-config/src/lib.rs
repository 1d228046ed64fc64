mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, CoveragePolicy, Geo, Ranking, Search, Service, Suggestions};

use std::{fs, path::Path};

/// Longest geohash the planner can ask the codec for.
const MAX_PLACE_PRECISION: usize = 22;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.geo.place_precision == 0 || cfg.geo.place_precision > MAX_PLACE_PRECISION {
		return Err(Error::Validation {
			message: format!(
				"geo.place_precision must be between 1 and {MAX_PLACE_PRECISION}."
			),
		});
	}

	for (path, weight) in [
		("ranking.zone_weight", cfg.ranking.zone_weight),
		("ranking.spice_weight", cfg.ranking.spice_weight),
		("ranking.price_weight", cfg.ranking.price_weight),
		("ranking.tags_weight", cfg.ranking.tags_weight),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation {
				message: format!("{path} must be a finite number."),
			});
		}
		if weight < 0.0 {
			return Err(Error::Validation {
				message: format!("{path} must be zero or greater."),
			});
		}
	}

	if cfg.ranking.zone_weight
		+ cfg.ranking.spice_weight
		+ cfg.ranking.price_weight
		+ cfg.ranking.tags_weight
		<= 0.0
	{
		return Err(Error::Validation {
			message: "At least one ranking weight must be greater than zero.".to_string(),
		});
	}
	if !cfg.ranking.reason_threshold.is_finite() || cfg.ranking.reason_threshold < 0.0 {
		return Err(Error::Validation {
			message: "ranking.reason_threshold must be zero or greater.".to_string(),
		});
	}
	if cfg.suggestions.limit == 0 {
		return Err(Error::Validation {
			message: "suggestions.limit must be greater than zero.".to_string(),
		});
	}

	Ok(())
}
