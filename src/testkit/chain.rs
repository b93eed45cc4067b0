//! Scripted chain collaborators.
//!
//! Each collaborator pops the next scripted result per call and records
//! when it was called (in `tokio` time, so paused-clock tests can assert
//! on delays).

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::application::shutdown::ShutdownTrigger;
use crate::domain::{Amount, Recipient, Target, TxReceipt};
use crate::error::{Error, ExecutionError, Result};
use crate::port::{BalanceReader, ChainReader, TransactionExecutor};

// ---------------------------------------------------------------------------
// ScriptedReader
// ---------------------------------------------------------------------------

/// A reader that replays a fixed list of results.
///
/// With [`ScriptedReader::stop_when_exhausted`], the last scripted read
/// fires shutdown so the loop ends after exactly the scripted number of
/// iterations.
pub struct ScriptedReader {
    script: Mutex<VecDeque<Result<Amount>>>,
    calls: Arc<Mutex<Vec<Instant>>>,
    stop: Option<ShutdownTrigger>,
}

impl ScriptedReader {
    pub fn new(script: Vec<Result<Amount>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
            stop: None,
        }
    }

    /// Script of successful reads.
    pub fn values(values: impl IntoIterator<Item = Amount>) -> Self {
        Self::new(values.into_iter().map(Ok).collect())
    }

    #[must_use]
    pub fn stop_when_exhausted(mut self, trigger: ShutdownTrigger) -> Self {
        self.stop = Some(trigger);
        self
    }

    /// Instants of every `read` call so far.
    pub fn calls(&self) -> Arc<Mutex<Vec<Instant>>> {
        self.calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ChainReader for ScriptedReader {
    async fn read(&self, _target: &Target) -> Result<Amount> {
        self.calls.lock().push(Instant::now());
        let mut script = self.script.lock();
        let next = script.pop_front();
        if script.is_empty() {
            if let Some(stop) = &self.stop {
                stop.trigger();
            }
        }
        next.unwrap_or_else(|| Err(Error::Read("script exhausted".into())))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// A failed read, as a scripted entry.
pub fn read_error(message: &str) -> Result<Amount> {
    Err(Error::Read(message.to_string()))
}

// ---------------------------------------------------------------------------
// ScriptedBalance
// ---------------------------------------------------------------------------

/// A balance reader that replays results and repeats the last one.
pub struct ScriptedBalance {
    script: Mutex<VecDeque<Result<Amount>>>,
    last: Mutex<Amount>,
    calls: Mutex<usize>,
}

impl ScriptedBalance {
    pub fn new(script: Vec<Result<Amount>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Amount::ZERO),
            calls: Mutex::new(0),
        }
    }

    /// Always report `balance`.
    pub fn fixed(balance: Amount) -> Self {
        let reader = Self::new(Vec::new());
        *reader.last.lock() = balance;
        reader
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl BalanceReader for ScriptedBalance {
    async fn balance(&self) -> Result<Amount> {
        *self.calls.lock() += 1;
        match self.script.lock().pop_front() {
            Some(Ok(balance)) => {
                *self.last.lock() = balance;
                Ok(balance)
            }
            Some(Err(e)) => Err(e),
            None => Ok(*self.last.lock()),
        }
    }

    fn asset(&self) -> &'static str {
        "ETH"
    }
}

// ---------------------------------------------------------------------------
// ScriptedExecutor
// ---------------------------------------------------------------------------

/// An executor that records every call and fails on request.
pub struct ScriptedExecutor {
    fail_attempts: Vec<usize>,
    executions: Mutex<Vec<(Recipient, Amount)>>,
}

impl ScriptedExecutor {
    /// Every execution succeeds.
    pub fn succeeding() -> Self {
        Self::failing_on(Vec::new())
    }

    /// Executions with these 1-based attempt numbers fail.
    pub fn failing_on(fail_attempts: Vec<usize>) -> Self {
        Self {
            fail_attempts,
            executions: Mutex::new(Vec::new()),
        }
    }

    pub fn executions(&self) -> Vec<(Recipient, Amount)> {
        self.executions.lock().clone()
    }
}

#[async_trait]
impl TransactionExecutor for ScriptedExecutor {
    async fn execute(&self, recipient: &Recipient, amount: Amount) -> Result<TxReceipt> {
        let attempt = {
            let mut executions = self.executions.lock();
            executions.push((recipient.clone(), amount));
            executions.len()
        };
        if self.fail_attempts.contains(&attempt) {
            return Err(ExecutionError::SubmissionFailed(format!("scripted failure {attempt}")).into());
        }
        Ok(TxReceipt::new(format!("0x{attempt:064x}")))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
