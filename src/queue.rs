//! Touch queue between the input side and the frame loop.
//!
//! Pointer samples may arrive on a different thread than the one rendering
//! frames. Instead of sharing the trail behind a lock, the input side pushes
//! into a lock-free SPSC ring (`rtrb`) and the [`TrailDriver`], which owns the
//! engine, drains every pending sample at the start of each frame before
//! aging and compositing. The engine itself is never touched by two threads.

use crate::trail::TrailEngine;
use glam::Vec2;
use rtrb::{Consumer, Producer, RingBuffer};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Default queue capacity (must be power of 2)
pub const DEFAULT_CAPACITY: usize = 1024;

/// Counters shared by both halves
#[derive(Debug, Default)]
pub struct QueueStats {
    /// Samples accepted by the queue
    pub pushed: AtomicU64,
    /// Samples dropped because the queue was full
    pub dropped: AtomicU64,
    /// Samples handed to the engine
    pub drained: AtomicU64,
}

/// Split a queue of `capacity` slots around `engine`.
///
/// # Panics
/// Panics if capacity is not a power of 2
pub fn touch_queue(engine: TrailEngine, capacity: usize) -> (TouchSender, TrailDriver) {
    assert!(capacity.is_power_of_two(), "Touch queue capacity must be a power of 2");
    let (producer, consumer) = RingBuffer::new(capacity);
    let stats = Arc::new(QueueStats::default());
    (
        TouchSender { inner: producer, stats: Arc::clone(&stats) },
        TrailDriver { engine, inner: consumer, stats, reported_drops: 0 },
    )
}

/// Input half: never blocks.
pub struct TouchSender {
    inner: Producer<Vec2>,
    stats: Arc<QueueStats>,
}

impl TouchSender {
    /// Queue one normalized sample. Returns false if it was dropped.
    #[inline]
    pub fn push(&mut self, point: Vec2) -> bool {
        match self.inner.push(point) {
            Ok(()) => {
                self.stats.pushed.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(_) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    pub fn stats(&self) -> Arc<QueueStats> {
        Arc::clone(&self.stats)
    }
}

/// Frame half: owns the engine and the consumer end of the queue.
pub struct TrailDriver {
    engine: TrailEngine,
    inner: Consumer<Vec2>,
    stats: Arc<QueueStats>,
    reported_drops: u64,
}

impl TrailDriver {
    /// Feed every pending sample to the engine, in arrival order.
    /// Returns how many were drained.
    pub fn drain(&mut self) -> usize {
        let mut n = 0;
        while let Ok(point) = self.inner.pop() {
            self.engine.add_touch(point);
            n += 1;
        }
        self.stats.drained.fetch_add(n as u64, Ordering::Relaxed);
        n
    }

    /// One frame: drain input, then age, evict and redraw.
    pub fn frame(&mut self, delta: f32) {
        self.drain();
        let dropped = self.stats.dropped.load(Ordering::Relaxed);
        if dropped > self.reported_drops {
            warn!(dropped = dropped - self.reported_drops, "touch queue full; samples lost");
            self.reported_drops = dropped;
        }
        self.engine.update(delta);
    }

    pub fn engine(&self) -> &TrailEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TrailEngine {
        &mut self.engine
    }

    pub fn stats(&self) -> Arc<QueueStats> {
        Arc::clone(&self.stats)
    }

    /// Samples waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.inner.slots()
    }
}
