use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::MessageInfo;

use std::time::Duration;

/// Report a single ant sends to the supervisor after building its solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub ant_id: usize,
    pub iteration: usize,
    pub num_bins: usize,
    pub evaluations: usize,
    pub fallbacks: usize,
    pub cpu_time: Duration,
}

impl Message {
    pub fn new(
        ant_id: usize,
        iteration: usize,
        num_bins: usize,
        evaluations: usize,
        fallbacks: usize,
        cpu_time: Duration,
    ) -> Self {
        Self {
            ant_id,
            iteration,
            num_bins,
            evaluations,
            fallbacks,
            cpu_time,
        }
    }
}

impl supervisor::Message for Message {
    fn id(&self) -> usize {
        self.ant_id
    }

    fn get_info(&self) -> MessageInfo {
        MessageInfo::new(
            self.evaluations,
            self.fallbacks,
            self.cpu_time,
            self.num_bins,
        )
    }
}
