//! Static parameters of the load test.
//!
//! Every simulated user reads the same tables. They are never mutated, so they
//! are shared across users without any synchronization.

/// Identifiers probed with `GET /rest/{id}`.
pub const AUTO_IDS: [u32; 9] = [1, 20, 30, 40, 50, 60, 70, 80, 90];

/// Substrings of model names probed with `GET /rest?modell=...`. Each one occurs
/// in AUDI, BMW, MERCEDES or PORSCHE.
pub const MODEL_SUBSTRINGS: [&str; 3] = ["a", "o", "e"];

/// Chassis numbers (FGNR) probed with `GET /rest?fgnr=...`, formatted as
/// `<prefix>-<number>-<checksum>`.
pub const CHASSIS_NUMBERS: [&str; 9] = [
    "1-0001-6", "1-0020-6", "1-0030-6", "1-0040-6", "1-0050-6", "1-0060-6", "1-0070-6",
    "1-0080-6", "1-0090-6",
];

/// Keywords probed with `GET /rest?<keyword>=true`, each with the name its
/// requests are aggregated under in the metrics.
pub const KEYWORDS: [(&str, &str); 2] = [("sport", "/rest?sport"), ("komfort", "/rest?komfort")];

/// Minimum number of concurrent simulated users.
pub const MIN_USERS: usize = 500;

/// Maximum number of concurrent simulated users. Equal to [`MIN_USERS`]: the
/// population is constant, there is no ramp.
pub const MAX_USERS: usize = 500;

/// Task executions per second per simulated user.
pub const THROUGHPUT: f64 = 0.1;

/// Host used when `--host` is not passed on the command line.
pub const DEFAULT_HOST: &str = "https://localhost:3000";

/// Per-request timeout, in seconds. Same as the goose client's default.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
