//! Catalog generation driver.
//!
//! Runs the event scheduler for a warm-up period whose events are discarded,
//! then fills pre-sized output buffers with the requested number of
//! `(time, magnitude)` pairs in emission order. The driver owns the pseudo
//! random bit generator (ChaCha8, seeded from the caller-supplied seed); the
//! scheduler consumes exactly three uniforms per event plus one at start-up,
//! so a run is fully determined by parameters, seed, warm-up count and
//! output length.

use crate::errors::{EtasError, EtasResult};
use crate::parameters::ProcessParameters;
use crate::scheduler::EventScheduler;
use crate::{FloatValue, Time};
use log::debug;
use ndarray::{Array1, ArrayViewMut1};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fill caller-allocated buffers with a simulated catalog.
///
/// The first `n_skip` events are generated and thrown away so that the
/// active-source population can move away from the artificial empty-queue
/// state at time zero. The warm-up is a plain fixed-count discard, not a
/// stationarity test.
///
/// Fails with [`EtasError::SizeMismatch`] before any simulation state is
/// created if the two buffers differ in length; on error the buffers are
/// left untouched.
pub fn generate_catalog(
    process: &ProcessParameters,
    n_skip: usize,
    seed: u64,
    mut magnitudes: ArrayViewMut1<'_, FloatValue>,
    mut times: ArrayViewMut1<'_, Time>,
) -> EtasResult<()> {
    if magnitudes.len() != times.len() {
        return Err(EtasError::SizeMismatch {
            magnitudes: magnitudes.len(),
            times: times.len(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut scheduler = EventScheduler::new(process.clone(), &mut rng);

    for _ in 0..n_skip {
        scheduler.next_event(&mut rng);
    }
    debug!(
        "discarded {} warm-up events; {} excitation sources active at t = {}",
        n_skip,
        scheduler.active_source_count(),
        scheduler.current_time()
    );

    for (time, magnitude) in times.iter_mut().zip(magnitudes.iter_mut()) {
        let event = scheduler.next_event(&mut rng);
        *time = event.time;
        *magnitude = event.magnitude;
    }
    debug!(
        "generated {} events up to t = {}",
        times.len(),
        scheduler.current_time()
    );

    Ok(())
}

/// An owned simulated catalog: equal-length time and magnitude sequences in
/// strictly increasing time order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub times: Array1<Time>,
    pub magnitudes: Array1<FloatValue>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Convenience wrapper over [`generate_catalog`] that allocates the output
/// buffers.
pub fn simulate_catalog(
    process: &ProcessParameters,
    n: usize,
    n_skip: usize,
    seed: u64,
) -> EtasResult<Catalog> {
    let mut times = Array1::zeros(n);
    let mut magnitudes = Array1::zeros(n);
    generate_catalog(
        process,
        n_skip,
        seed,
        magnitudes.view_mut(),
        times.view_mut(),
    )?;
    Ok(Catalog { times, magnitudes })
}
