//! Run defaults of the load test.
//!
//! The values are handed to goose as [`GooseDefault`]s, so anything given on
//! the command line (`--users`, `--hatch-rate`, `--host`, ...) still wins.

use log::debug;
use std::time::Duration;

use goose::prelude::*;

use crate::data::{DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, MAX_USERS, MIN_USERS, THROUGHPUT};
use crate::pacing::ConstantThroughput;

/// Population, pacing and client defaults of the load test.
///
/// [`AutoSettings::default`] holds the fixed values of the Auto load test.
#[derive(Clone, Debug)]
pub struct AutoSettings {
    /// Number of simulated users.
    pub users: usize,
    /// Users started per second, in goose's `--hatch-rate` syntax.
    pub hatch_rate: String,
    /// Task executions per second per user, `None` to run tasks back to back.
    pub throughput: Option<f64>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// Per-request timeout, used when `--timeout` is not set.
    pub timeout: Duration,
    /// Host used when `--host` is not set.
    pub host: String,
}

impl Default for AutoSettings {
    fn default() -> Self {
        // Hatching MIN_USERS per second starts the whole population at once.
        AutoSettings {
            users: MAX_USERS,
            hatch_rate: MIN_USERS.to_string(),
            throughput: Some(THROUGHPUT),
            accept_invalid_certs: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl AutoSettings {
    /// Check the settings for values goose or the pacing would reject later.
    pub fn validate(&self) -> Result<(), GooseError> {
        if self.users == 0 {
            return Err(invalid_option(
                "users",
                "0",
                "at least one simulated user is required",
            ));
        }

        match self.hatch_rate.parse::<f64>() {
            Ok(rate) if rate.is_finite() && rate > 0.0 => (),
            _ => {
                return Err(invalid_option(
                    "hatch_rate",
                    &self.hatch_rate,
                    "hatch rate must be a positive number of users per second",
                ))
            }
        }

        self.pacing()?;

        if self.timeout.is_zero() {
            return Err(invalid_option(
                "timeout",
                "0",
                "request timeout must be greater than zero",
            ));
        }

        if self.host.is_empty() {
            return Err(invalid_option("host", "", "a default host is required"));
        }

        Ok(())
    }

    /// The pacing policy, if a throughput is configured.
    pub fn pacing(&self) -> Result<Option<ConstantThroughput>, GooseError> {
        self.throughput.map(ConstantThroughput::new).transpose()
    }

    /// Validate the settings and set them as defaults of `attack`.
    pub fn apply(&self, attack: GooseAttack) -> Result<GooseAttack, GooseError> {
        self.validate()?;
        debug!("applying {:?}", self);

        let timeout = self.timeout.as_secs_f64().to_string();
        let attack = attack
            .set_default(GooseDefault::Users, self.users)?
            .set_default(GooseDefault::HatchRate, self.hatch_rate.as_str())?
            .set_default(GooseDefault::Host, self.host.as_str())?
            .set_default(GooseDefault::Timeout, timeout.as_str())?;

        match self.throughput {
            Some(throughput) => debug!(
                "{} users pacing at {} tasks/s each",
                self.users, throughput
            ),
            None => debug!("{} users without pacing", self.users),
        }

        Ok(*attack)
    }
}

fn invalid_option(option: &str, value: &str, detail: &str) -> GooseError {
    GooseError::InvalidOption {
        option: option.to_string(),
        value: value.to_string(),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = AutoSettings::default();
        assert_eq!(settings.users, 500);
        assert_eq!(settings.hatch_rate, "500");
        assert_eq!(settings.throughput, Some(0.1));
        assert!(settings.accept_invalid_certs);
        assert_eq!(settings.timeout, Duration::from_secs(60));
        assert!(settings.validate().is_ok());
        assert_eq!(
            settings.pacing().unwrap().unwrap().interval(),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn no_pacing() {
        let settings = AutoSettings {
            throughput: None,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        assert!(settings.pacing().unwrap().is_none());
    }

    #[test]
    fn invalid_settings() {
        let invalid = [
            AutoSettings {
                users: 0,
                ..Default::default()
            },
            AutoSettings {
                hatch_rate: "0".to_string(),
                ..Default::default()
            },
            AutoSettings {
                hatch_rate: "fast".to_string(),
                ..Default::default()
            },
            AutoSettings {
                throughput: Some(0.0),
                ..Default::default()
            },
            AutoSettings {
                throughput: Some(f64::NAN),
                ..Default::default()
            },
            AutoSettings {
                timeout: Duration::ZERO,
                ..Default::default()
            },
            AutoSettings {
                host: String::new(),
                ..Default::default()
            },
        ];

        for settings in invalid {
            match settings.validate() {
                Err(GooseError::InvalidOption { .. }) => (),
                other => panic!("{:?} should be rejected, got {:?}", settings, other),
            }
        }
    }
}
