//! Tolerate the self-signed certificate of the test instance.

use log::warn;
use reqwest::Client;
use std::sync::Once;
use std::time::Duration;

use goose::config::GooseConfiguration;
use goose::prelude::*;
use goose::util;

use crate::data::DEFAULT_TIMEOUT_SECS;

/// User agent of every simulated user.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

static INSECURE_WARNING: Once = Once::new();

/// On-start transaction replacing the user's client with one that skips
/// certificate verification.
///
/// Runs once per simulated user, but the warning about it is logged once per
/// process.
pub fn accept_invalid_certs() -> Transaction {
    transaction!(install_insecure_client)
        .set_name("accept-invalid-certs")
        .set_on_start()
}

/// Per-request timeout goose resolved from `--timeout` or
/// [`GooseDefault::Timeout`], in the same way goose configures its own client.
pub fn request_timeout(configuration: &GooseConfiguration) -> Duration {
    match util::get_float_from_string(configuration.timeout.clone()) {
        Some(seconds) if seconds.is_finite() && seconds > 0.0 => Duration::from_secs_f32(seconds),
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

async fn install_insecure_client(user: &mut GooseUser) -> TransactionResult {
    INSECURE_WARNING.call_once(|| {
        warn!("certificate verification is disabled for all simulated users");
    });

    let builder = Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .timeout(request_timeout(&user.config))
        .gzip(true);
    user.set_client_builder(builder).await?;

    Ok(())
}
