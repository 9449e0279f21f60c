//! # auto-lasttest
//!
//! Goose load test for the Auto REST API.
//!
//! Every simulated user runs a single scenario, `AutoRequests`, made of four
//! weighted, read-only tasks:
//!
//! | Task | Weight | Requests |
//! |---|---|---|
//! | `fetch-by-id` | 100 | `GET /rest/{id}` for 9 identifiers |
//! | `fetch-by-model-substring` | 200 | `GET /rest?modell=<s>` for 3 substrings |
//! | `fetch-by-chassis-number` | 150 | `GET /rest?fgnr=<n>` for 9 chassis numbers |
//! | `fetch-by-keyword` | 150 | `GET /rest?<keyword>=true` for 2 keywords |
//!
//! By default 500 users are started at once, each pacing itself at 0.1 tasks
//! per second, and certificate verification is disabled so the self-signed
//! certificate of the test instance is accepted.
//!
//! Scheduling, user management, metrics and reports are goose's. Run the
//! binary with any goose option, for example:
//!
//! ```bash
//! cargo run --release -- --host https://localhost:3000 --run-time 5m --report-file report.html
//! ```
//!
//! The scenario can also be registered on a goose attack built elsewhere:
//!
//! ```rust,no_run
//! use goose::prelude::*;
//! use auto_lasttest::AutoSettings;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GooseError> {
//!     let settings = AutoSettings {
//!         users: 10,
//!         hatch_rate: "2".to_string(),
//!         ..Default::default()
//!     };
//!     auto_lasttest::register(GooseAttack::initialize()?, &settings)?
//!         .execute()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod pacing;
pub mod request;
pub mod settings;
pub mod task;
pub mod tls;

use log::debug;
use strum::IntoEnumIterator;

use goose::prelude::*;

pub use crate::pacing::ConstantThroughput;
pub use crate::request::AutoRequest;
pub use crate::settings::AutoSettings;
pub use crate::task::AutoTask;

/// Name of the scenario every simulated user runs.
pub const SCENARIO_NAME: &str = "AutoRequests";

/// Build the scenario: the optional TLS on-start hook, then every task with its
/// weight and the configured pacing.
pub fn auto_scenario(settings: &AutoSettings) -> Result<Scenario, GooseError> {
    let pacing = settings.pacing()?;
    let mut scenario = scenario!(SCENARIO_NAME);

    if settings.accept_invalid_certs {
        scenario = scenario.register_transaction(tls::accept_invalid_certs());
    }

    for task in AutoTask::iter() {
        debug!(
            "registering {} with weight {} ({:.1}%)",
            task.name(),
            task.weight(),
            task.probability() * 100.0
        );
        scenario = scenario.register_transaction(task.weighted_transaction(pacing)?);
    }

    Ok(scenario)
}

/// Apply `settings` as defaults of `attack` and register the Auto scenario.
pub fn register(attack: GooseAttack, settings: &AutoSettings) -> Result<GooseAttack, GooseError> {
    let attack = settings.apply(attack)?;
    Ok(attack.register_scenario(auto_scenario(settings)?))
}
