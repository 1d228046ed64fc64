use antojo_config::{Config, CoveragePolicy, Error, validate};

fn parse(raw: &str) -> Config {
	toml::from_str(raw).expect("config should parse")
}

#[test]
fn defaults_are_valid() {
	let cfg = Config::default();

	assert!(validate(&cfg).is_ok());
	assert_eq!(cfg.geo.place_precision, 10);
	assert_eq!(cfg.search.coverage, CoveragePolicy::Fail);
	assert_eq!(cfg.suggestions.limit, 12);
	assert!(
		(cfg.ranking.zone_weight
			+ cfg.ranking.spice_weight
			+ cfg.ranking.price_weight
			+ cfg.ranking.tags_weight
			- 1.0)
			.abs() < 1e-9
	);
}

#[test]
fn empty_toml_yields_defaults() {
	let cfg = parse("");

	assert!(validate(&cfg).is_ok());
	assert_eq!(cfg.service.log_level, "info");
}

#[test]
fn parses_partial_override() {
	let cfg = parse(
		"\
[search]
coverage = \"partial\"

[ranking]
zone_weight = 0.6
spice_weight = 0.4
price_weight = 0.0
tags_weight = 0.0
",
	);

	assert!(validate(&cfg).is_ok());
	assert_eq!(cfg.search.coverage, CoveragePolicy::Partial);
	assert_eq!(cfg.ranking.zone_weight, 0.6);
	// Untouched sections keep their defaults.
	assert_eq!(cfg.geo.place_precision, 10);
}

#[test]
fn rejects_unknown_coverage_policy() {
	let result: Result<Config, _> = toml::from_str("[search]\ncoverage = \"best-effort\"\n");

	assert!(result.is_err());
}

#[test]
fn rejects_zero_precision() {
	let cfg = parse("[geo]\nplace_precision = 0\n");

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_oversized_precision() {
	let cfg = parse("[geo]\nplace_precision = 23\n");

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_negative_weight() {
	let cfg = parse("[ranking]\nspice_weight = -0.1\n");

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_all_zero_weights() {
	let cfg = parse(
		"\
[ranking]
zone_weight = 0.0
spice_weight = 0.0
price_weight = 0.0
tags_weight = 0.0
",
	);

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_negative_reason_threshold() {
	let cfg = parse("[ranking]\nreason_threshold = -0.5\n");

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_suggestion_limit() {
	let cfg = parse("[suggestions]\nlimit = 0\n");

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_blank_log_level() {
	let cfg = parse("[service]\nlog_level = \"  \"\n");

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}
