use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::{Table, Value};

use legalease_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_table() -> Table {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.")
}

fn set_value(root: &mut Table, path: &[&str], value: Value) {
	let (last, parents) = path.split_last().expect("Path must be non-empty.");
	let mut table = root;

	for key in parents {
		table = table
			.get_mut(*key)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Template config must include [{key}]."));
	}

	table.insert((*last).to_string(), value);
}

fn sample_toml_with(path: &[&str], value: Value) -> String {
	let mut root = sample_table();

	set_value(&mut root, path, value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("legalease_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> legalease_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = legalease_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation_error(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");

	let message = err.to_string();

	assert!(message.contains(expected), "Unexpected error message: {message}");
}

#[test]
fn sample_config_loads() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string()).expect("Expected valid config.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:5000");
	assert_eq!(cfg.ranking.top_n, 5);
	assert_eq!(cfg.ranking.weights.keyword, 10);
	assert_eq!(cfg.advocates.recent_cases_preview, 3);
	assert_eq!(cfg.corpus.path, env::temp_dir().join("data/legal-cases.json"));
}

#[test]
fn optional_sections_fall_back_to_defaults() {
	let payload = "\
[service]
http_bind = \"127.0.0.1:5000\"
log_level = \"debug\"

[corpus]
path = \"/srv/legalease/cases.json\"
";
	let cfg = load_payload(payload.to_string()).expect("Expected valid config.");

	assert_eq!(cfg.ranking.top_n, 5);
	assert_eq!(cfg.ranking.min_term_chars, 3);
	assert_eq!(cfg.ranking.weights.problem_statement, 5);
	assert_eq!(cfg.ranking.weights.law_explanation, 2);
	assert_eq!(cfg.advocates.recent_cases_preview, 3);
	assert_eq!(cfg.service.cors_allow_origin.as_deref(), Some("*"));
	assert_eq!(cfg.corpus.path, PathBuf::from("/srv/legalease/cases.json"));
}

#[test]
fn missing_config_file_is_a_read_error() {
	let path = env::temp_dir().join("legalease_config_test_missing.toml");
	let err = legalease_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error kind: {err:?}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
	let err = load_payload("[service\nhttp_bind = ".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error kind: {err:?}");
}

#[test]
fn http_bind_must_be_a_socket_address() {
	expect_validation_error(
		sample_toml_with(&["service", "http_bind"], Value::String("localhost".to_string())),
		"service.http_bind must be a socket address",
	);
}

#[test]
fn top_n_must_be_positive() {
	expect_validation_error(
		sample_toml_with(&["ranking", "top_n"], Value::Integer(0)),
		"ranking.top_n must be greater than zero.",
	);
}

#[test]
fn min_term_chars_must_be_positive() {
	expect_validation_error(
		sample_toml_with(&["ranking", "min_term_chars"], Value::Integer(0)),
		"ranking.min_term_chars must be greater than zero.",
	);
}

#[test]
fn keyword_weight_must_dominate() {
	expect_validation_error(
		sample_toml_with(&["ranking", "weights", "problem_statement"], Value::Integer(10)),
		"ranking.weights.keyword must be greater than",
	);
	expect_validation_error(
		sample_toml_with(&["ranking", "weights", "law_explanation"], Value::Integer(12)),
		"ranking.weights.keyword must be greater than",
	);
}

#[test]
fn blank_cors_origin_is_normalized_away() {
	let cfg = load_payload(sample_toml_with(
		&["service", "cors_allow_origin"],
		Value::String(String::new()),
	))
	.expect("Expected valid config.");

	assert!(cfg.service.cors_allow_origin.is_none());
}

#[test]
fn example_config_points_at_bundled_corpus() {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../legalease.example.toml");
	let cfg = legalease_config::load(&path).expect("Failed to load example config.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:5000");
	assert!(cfg.corpus.path.ends_with("data/legal-cases.json"));
	assert!(cfg.corpus.path.is_file(), "Missing corpus at {:?}.", cfg.corpus.path);
}
