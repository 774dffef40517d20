//! Identity and timestamp collaborators for structure construction.
//!
//! Structures never reach for a global id source or clock; the caller hands
//! these in, so tests can run with reproducible ids and instants.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a magical structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StructureId(Uuid);

impl StructureId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out structure ids. Every id must be unique for the process lifetime.
pub trait IdGenerator {
    fn next_id(&mut self) -> StructureId;
}

/// Production id source backed by random 128-bit identifiers.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> StructureId {
        StructureId(Uuid::new_v4())
    }
}

/// Deterministic id stream for tests. Ids are drawn from a seeded ChaCha8
/// stream, so equal seeds replay the same sequence while ids within one
/// stream stay distinct.
#[derive(Debug)]
pub struct SeededIds {
    stream: ChaCha8Rng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> StructureId {
        StructureId(Uuid::from_u128(self.stream.gen()))
    }
}

/// Source of construction timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Frozen clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
