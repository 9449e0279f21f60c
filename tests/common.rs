use gumdrop::Options;
use httpmock::MockServer;

use goose::config::GooseConfiguration;
use goose::metrics::GooseMetrics;
use goose::prelude::*;

use auto_lasttest::AutoSettings;

/// Not all functions are used by all tests, so we enable allow(dead_code) to avoid
/// compiler warnings during testing.

/// The following options are configured by default, if not set to a custom value:
///  --host <mock-server>
///  --users 1
///  --hatch-rate 1
///  --iterations 1
///
/// A single iteration makes the number of requests each endpoint receives exact.
/// Metrics are not reset when running a fixed number of iterations, and goose
/// rejects `--no-reset-metrics` together with `--iterations`.
pub fn build_configuration(server: &MockServer, custom: Vec<&str>) -> GooseConfiguration {
    // Start with an empty configuration.
    let mut configuration: Vec<&str> = vec![];
    // Declare server_url here no matter what, so its lifetime is sufficient when needed.
    let server_url = server.base_url();

    // Merge in all custom options first.
    configuration.extend_from_slice(&custom);

    // Default to using mock server if not otherwise configured.
    if !configuration.contains(&"--host") {
        configuration.extend_from_slice(&["--host", &server_url]);
    }

    // Default to testing with 1 user if not otherwise configured.
    if !configuration.contains(&"--users") {
        configuration.extend_from_slice(&["--users", "1"]);
    }

    // Default to hatch 1 user per second if not otherwise configured.
    if !configuration.contains(&"--hatch-rate") {
        configuration.extend_from_slice(&["--hatch-rate", "1"]);
    }

    // Default to a single iteration unless the test runs for a fixed time.
    if !configuration.contains(&"--run-time") && !configuration.contains(&"--iterations") {
        configuration.extend_from_slice(&["--iterations", "1"]);
    }

    // Parse these options to generate a GooseConfiguration.
    GooseConfiguration::parse_args_default(&configuration)
        .expect("failed to parse options and generate a configuration")
}

/// Settings for tests: no pacing, so an iteration completes immediately.
#[allow(dead_code)]
pub fn unpaced_settings() -> AutoSettings {
    AutoSettings {
        throughput: None,
        ..Default::default()
    }
}

/// Build a GooseAttack running a single scenario.
#[allow(dead_code)]
pub fn build_load_test(configuration: GooseConfiguration, scenario: Scenario) -> GooseAttack {
    GooseAttack::initialize_with_config(configuration)
        .expect("failed to initialize load test")
        .register_scenario(scenario)
}

/// Run the actual load test, returning the GooseMetrics.
pub async fn run_load_test(goose_attack: GooseAttack) -> GooseMetrics {
    goose_attack
        .execute()
        .await
        .expect("failed to execute load test")
}

/// Paths of the requests in a goose `--request-log` written with
/// `--request-format Json`, in the order they were logged.
#[allow(dead_code)]
pub fn logged_request_paths(file_name: &str) -> Vec<String> {
    let log = std::fs::read_to_string(file_name).expect("failed to read request log");
    log.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let request: serde_json::Value =
                serde_json::from_str(line).expect("failed to parse request log line");
            let url = request["final_url"]
                .as_str()
                .filter(|url| !url.is_empty())
                .or_else(|| request["raw"]["url"].as_str())
                .expect("request log line without url");
            url::Url::parse(url).expect("invalid url in request log").path().to_string()
        })
        .collect()
}

/// Helper to delete test artifacts, if existing.
#[allow(dead_code)]
pub fn cleanup_files(files: &[&str]) {
    for file in files {
        if std::path::Path::new(file).exists() {
            std::fs::remove_file(file).expect("failed to remove file");
        }
    }
}
