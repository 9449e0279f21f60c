//! The four tasks a simulated user chooses from.
//!
//! Each task is a fixed, ordered sequence of GET requests plus a relative
//! weight. Goose turns the weights into selection frequency: within a
//! scenario a transaction with weight 200 runs twice as often as one with
//! weight 100.

use log::debug;
use std::sync::Arc;
use std::time::Instant;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use goose::prelude::*;

use crate::data::{AUTO_IDS, CHASSIS_NUMBERS, KEYWORDS, MODEL_SUBSTRINGS};
use crate::pacing::ConstantThroughput;
use crate::request::AutoRequest;

/// A read-only task against the Auto API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum AutoTask {
    /// `GET /rest/{id}` for every identifier.
    #[strum(serialize = "fetch-by-id")]
    FetchById,
    /// `GET /rest?modell=<substring>` for every model substring.
    #[strum(serialize = "fetch-by-model-substring")]
    FetchByModel,
    /// `GET /rest?fgnr=<chassis number>` for every chassis number.
    #[strum(serialize = "fetch-by-chassis-number")]
    FetchByChassisNumber,
    /// `GET /rest?<keyword>=true` for every keyword.
    #[strum(serialize = "fetch-by-keyword")]
    FetchByKeyword,
}

impl AutoTask {
    /// Name of the task, also used as the goose transaction name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Relative selection weight.
    pub fn weight(self) -> usize {
        match self {
            AutoTask::FetchById => 100,
            AutoTask::FetchByModel => 200,
            AutoTask::FetchByChassisNumber => 150,
            AutoTask::FetchByKeyword => 150,
        }
    }

    /// Sum of the weights of all tasks.
    pub fn total_weight() -> usize {
        AutoTask::iter().map(AutoTask::weight).sum()
    }

    /// Probability that this task is picked on a scheduling tick.
    pub fn probability(self) -> f64 {
        self.weight() as f64 / AutoTask::total_weight() as f64
    }

    /// The requests this task issues, in order.
    pub fn requests(self) -> Vec<AutoRequest> {
        match self {
            AutoTask::FetchById => AUTO_IDS.iter().map(|id| AutoRequest::by_id(*id)).collect(),
            AutoTask::FetchByModel => MODEL_SUBSTRINGS
                .iter()
                .map(|substring| AutoRequest::by_query("modell", substring, "/rest?modell"))
                .collect(),
            AutoTask::FetchByChassisNumber => CHASSIS_NUMBERS
                .iter()
                .map(|chassis_number| AutoRequest::by_query("fgnr", chassis_number, "/rest?fgnr"))
                .collect(),
            AutoTask::FetchByKeyword => KEYWORDS
                .iter()
                .map(|&(keyword, name)| AutoRequest::by_query(keyword, "true", name))
                .collect(),
        }
    }

    /// Build an unweighted goose transaction running this task.
    ///
    /// With `pacing` set, the transaction sleeps for the rest of its slot before
    /// returning. Transaction times in goose's report then span the whole slot
    /// (10 seconds at the default throughput); request times are unaffected.
    pub fn transaction(self, pacing: Option<ConstantThroughput>) -> Transaction {
        let closure: TransactionFunction = Arc::new(move |user| {
            Box::pin(async move { self.run(user, pacing).await })
        });

        Transaction::new(closure).set_name(self.name())
    }

    /// Build a goose transaction running this task, weighted by [`AutoTask::weight`].
    pub fn weighted_transaction(
        self,
        pacing: Option<ConstantThroughput>,
    ) -> Result<Transaction, GooseError> {
        self.transaction(pacing).set_weight(self.weight())
    }

    /// Issue every request of the task, one after the other.
    ///
    /// A failed request does not stop the sequence. Goose has already recorded
    /// it; the last error is handed back once all requests were sent so the
    /// transaction is counted as failed too.
    async fn run(self, user: &mut GooseUser, pacing: Option<ConstantThroughput>) -> TransactionResult {
        let started = Instant::now();
        let mut last_error = None;

        for request in self.requests() {
            if let Err(error) = request.send(user).await {
                debug!("{}: {} failed: {}", self.name(), request.path, error);
                last_error = Some(error);
            }
        }

        if let Some(pacing) = pacing {
            pacing.wait(started.elapsed()).await;
        }

        match last_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
