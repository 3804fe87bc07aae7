use crate::metaheuristic::as_rank;
use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::{Message, MessageInfo};

use csv::Writer;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{sink, Sink, Write};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// One csv row, summing the reports of one ant over `aggregation_rate` iterations.
#[derive(Debug, Serialize)]
struct AntRecord {
    iteration: usize,
    ant_id: usize,
    constructions: usize,
    best_bins: Option<usize>,
    mean_bins: f64,
    evaluations: usize,
    fallbacks: usize,
    cpu_time_us: u64,
}

pub struct Supervisor<W: Write> {
    pub sender: Sender<as_rank::Message>,
    receiver: Receiver<as_rank::Message>,
    ants: usize,
    pending: BTreeMap<usize, MessageInfo>,
    totals: MessageInfo,
    aggregation_rate: usize,
    writer: Option<Writer<W>>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(aggregation_rate: usize, writer: Writer<W>) -> Self {
        let (tx, rx) = mpsc::channel();
        Supervisor {
            sender: tx,
            receiver: rx,
            ants: 0,
            pending: BTreeMap::new(),
            totals: MessageInfo::default(),
            aggregation_rate: aggregation_rate.max(1),
            writer: Some(writer),
        }
    }

    /// Everything reported since the supervisor was created or reset.
    pub fn totals(&self) -> MessageInfo {
        self.totals
    }

    /// Writes out partially aggregated rows, for runs that stop between two aggregation points.
    pub fn flush(&mut self, iteration: usize) {
        self.write_pending(iteration);
        if let Some(writer) = self.writer.as_mut() {
            if let Err(err) = writer.flush() {
                warn!("could not flush ant statistics: {}", err);
            }
        }
    }

    fn write_pending(&mut self, iteration: usize) {
        let pending = std::mem::take(&mut self.pending);
        let writer = match self.writer.as_mut() {
            Some(writer) => writer,
            None => return,
        };

        for (ant_id, info) in pending.into_iter() {
            let record = AntRecord {
                iteration,
                ant_id,
                constructions: info.constructions,
                best_bins: info.best_bins,
                mean_bins: info.mean_bins(),
                evaluations: info.evaluations,
                fallbacks: info.fallbacks,
                cpu_time_us: info.cpu_time.as_micros() as u64,
            };
            if let Err(err) = writer.serialize(record) {
                warn!("could not write statistics of ant {}: {}", ant_id, err);
            }
        }
    }
}

impl<W: Write> supervisor::Supervisor<as_rank::Message> for Supervisor<W> {
    fn new_ant(&mut self) -> (Sender<as_rank::Message>, usize) {
        // ids restart at 1 every iteration
        self.ants += 1;
        (self.sender.clone(), self.ants)
    }

    fn prepare_next(&mut self, iteration: usize) -> MessageInfo {
        let mut iteration_info = MessageInfo::default();
        while let Ok(message) = self.receiver.try_recv() {
            let info = message.get_info();
            iteration_info += info;
            *self.pending.entry(message.id()).or_default() += info;
        }

        self.totals += iteration_info;
        self.ants = 0;
        if iteration % self.aggregation_rate == 0 {
            self.write_pending(iteration);
        }

        iteration_info
    }

    fn reset(&mut self) {
        self.ants = 0;
        self.pending = BTreeMap::new();
        self.totals = MessageInfo::default();
        let (tx, rx) = mpsc::channel();
        self.sender = tx;
        self.receiver = rx;
    }
}

impl Supervisor<Sink> {
    /// A supervisor that only aggregates and never writes.
    pub fn silent() -> Self {
        let mut supervisor = Supervisor::new(1, Writer::from_writer(sink()));
        supervisor.writer = None;
        supervisor
    }
}

impl Default for Supervisor<Sink> {
    fn default() -> Self {
        Supervisor::silent()
    }
}
