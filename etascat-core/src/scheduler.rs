//! Event-ordering engine of the ETAS simulation.
//!
//! The scheduler merges two lanes of candidate future events into one
//! time-ordered stream: the next background occurrence and a priority queue
//! holding, for every still-active excitation source, the next occurrence
//! time that source would produce. The offspring tree is unbounded in
//! principle, so the queue is expanded lazily: a source enters the queue only
//! once its first occurrence time has actually been drawn, and leaves it
//! permanently once a draw yields no further occurrence in finite time.

use crate::parameters::ProcessParameters;
use crate::sampling::{draw_magnitude, next_background_occurrence, next_offspring_occurrence};
use crate::{FloatValue, Time};
use rand::Rng;
use std::collections::BinaryHeap;

/// A realized earthquake: simulated occurrence time and magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEvent {
    pub time: Time,
    pub magnitude: FloatValue,
}

/// One still-active triggering lane, rooted at a past earthquake.
///
/// Owned exclusively by the scheduler's queue; re-armed in place each time it
/// produces an offspring and dropped once retired.
#[derive(Debug, Clone, Copy)]
struct ExcitationSource {
    origin_time: Time,
    magnitude: FloatValue,
    next_occurrence: Time,
}

// Reversed ordering on the next occurrence time so that the std max-heap
// yields the earliest candidate first. Draws are continuous, so exact ties
// have probability zero and the tie behavior is arbitrary.
impl PartialEq for ExcitationSource {
    fn eq(&self, other: &Self) -> bool {
        self.next_occurrence == other.next_occurrence
    }
}

impl Eq for ExcitationSource {}

impl PartialOrd for ExcitationSource {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExcitationSource {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.next_occurrence.total_cmp(&self.next_occurrence)
    }
}

/// State machine producing ETAS events in strictly increasing time order.
///
/// Each call to [`EventScheduler::next_event`] consumes exactly three uniform
/// draws in a fixed order: one to resample the lane that produced the event
/// (background redraw or source re-arm), one for the magnitude, and one to
/// decide whether the new event spawns an excitation source of its own.
/// Construction consumes one additional draw for the initial background
/// occurrence. This fixed protocol is what makes seeded runs reproducible.
#[derive(Debug, Clone)]
pub struct EventScheduler {
    process: ProcessParameters,
    current_time: Time,
    next_background: Time,
    sources: BinaryHeap<ExcitationSource>,
}

impl EventScheduler {
    /// Start the process at time zero with an empty active-source set.
    pub fn new<R: Rng + ?Sized>(process: ProcessParameters, rng: &mut R) -> Self {
        let next_background = next_background_occurrence(rng.gen(), 0.0, &process);
        Self {
            process,
            current_time: 0.0,
            next_background,
            sources: BinaryHeap::new(),
        }
    }

    /// Produce the next event of the merged stream.
    pub fn next_event<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CatalogEvent {
        let offspring_is_next = self
            .sources
            .peek()
            .map_or(false, |source| source.next_occurrence < self.next_background);

        if offspring_is_next {
            if let Some(mut source) = self.sources.pop() {
                self.current_time = source.next_occurrence;

                // Re-arm the source; a draw without finite next occurrence
                // retires it
                let rearmed = next_offspring_occurrence(
                    rng.gen(),
                    source.origin_time,
                    source.magnitude,
                    self.current_time,
                    &self.process,
                );
                if let Some(next_occurrence) = rearmed {
                    source.next_occurrence = next_occurrence;
                    self.sources.push(source);
                }
            }
        } else {
            self.current_time = self.next_background;
            self.next_background =
                next_background_occurrence(rng.gen(), self.current_time, &self.process);
        }

        let magnitude = draw_magnitude(
            rng.gen(),
            self.process.mmin,
            self.process.mmax,
            self.process.beta,
        );

        // The new earthquake may itself start triggering
        let spawned = next_offspring_occurrence(
            rng.gen(),
            self.current_time,
            magnitude,
            self.current_time,
            &self.process,
        );
        if let Some(next_occurrence) = spawned {
            self.sources.push(ExcitationSource {
                origin_time: self.current_time,
                magnitude,
                next_occurrence,
            });
        }

        CatalogEvent {
            time: self.current_time,
            magnitude,
        }
    }

    /// Simulated time of the most recent event.
    pub fn current_time(&self) -> Time {
        self.current_time
    }

    /// Number of excitation sources that are armed with a finite next
    /// occurrence time.
    pub fn active_source_count(&self) -> usize {
        self.sources.len()
    }
}
