//! Replays recorded interactions from a cassette.

use std::collections::{BTreeMap, VecDeque};

use super::format::{Cassette, Interaction};
use crate::error::{Error, Result};

/// Serves recorded interactions in order, one queue per `(port, method)`.
///
/// Calls to different methods may interleave freely; only the order within
/// one method is checked against the recording.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: BTreeMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: BTreeMap<(String, String), VecDeque<Interaction>> = BTreeMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the cassette has no (more)
    /// interactions for the given port/method pair, listing what the
    /// cassette does offer.
    pub fn try_next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction> {
        let key = (port.to_string(), method.to_string());
        if let Some(next) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return Ok(next);
        }
        let available: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((p, m), queue)| format!("{p}::{m} ({})", queue.len()))
            .collect();
        Err(Error::Cassette(format!(
            "cassette exhausted: no interactions left for {port}::{method}; remaining: [{}]",
            available.join(", ")
        )))
    }

    /// Like [`try_next_interaction`](Self::try_next_interaction), for tests
    /// that treat a short cassette as a bug.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        match self.try_next_interaction(port, method) {
            Ok(interaction) => interaction,
            Err(err) => panic!("{err}"),
        }
    }
}
