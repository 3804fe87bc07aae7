use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::sync::mpsc::Sender;
use std::time::Duration;

pub trait Supervisor<MessageType: Message> {
    /// Registers a new ant for the running iteration and hands out its channel and id.
    fn new_ant(&mut self) -> (Sender<MessageType>, usize);

    /// Collects everything the ants of the finished iteration reported.
    fn prepare_next(&mut self, iteration: usize) -> MessageInfo;

    /// Forgets everything collected so far, used when a run restarts.
    fn reset(&mut self);
}

pub trait Message {
    fn id(&self) -> usize;
    fn get_info(&self) -> MessageInfo;
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub constructions: usize,
    pub evaluations: usize,
    pub fallbacks: usize,
    pub cpu_time: Duration,
    pub bins_sum: usize,
    pub best_bins: Option<usize>,
}

impl MessageInfo {
    pub fn new(
        evaluations: usize,
        fallbacks: usize,
        cpu_time: Duration,
        num_bins: usize,
    ) -> Self {
        Self {
            constructions: 1,
            evaluations,
            fallbacks,
            cpu_time,
            bins_sum: num_bins,
            best_bins: Some(num_bins),
        }
    }

    pub fn mean_bins(&self) -> f64 {
        if self.constructions == 0 {
            return 0.0;
        }
        self.bins_sum as f64 / self.constructions as f64
    }
}

fn min_bins(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl Add for MessageInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            constructions: self.constructions + other.constructions,
            evaluations: self.evaluations + other.evaluations,
            fallbacks: self.fallbacks + other.fallbacks,
            cpu_time: self.cpu_time + other.cpu_time,
            bins_sum: self.bins_sum + other.bins_sum,
            best_bins: min_bins(self.best_bins, other.best_bins),
        }
    }
}

impl AddAssign for MessageInfo {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
