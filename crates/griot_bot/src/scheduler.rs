//! Time-of-day scheduling of pipeline cycles.

use crate::{CycleOutcome, PostPipeline};
use chrono::{DateTime, Local, NaiveTime};
use griot_error::GriotResult;
use griot_interface::{ContentGenerator, PostStore, Publisher};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Triggers pipeline cycles at configured times of day.
///
/// Two functionally equivalent operating modes:
/// - [`run_once`](Scheduler::run_once): one cycle per external invocation
///   (an outside timer drives the cadence; quota alone prevents
///   over-posting across invocations)
/// - [`run`](Scheduler::run): a long-lived cooperative loop that binds
///   today's remaining quota to the earliest upcoming time slots and fires
///   them in order, one cycle at a time, never overlapping
///
/// The loop polls at a low frequency rather than busy-waiting. There is no
/// cancellation primitive beyond process termination; a cycle already past
/// its publish step is never interrupted mid-flight by this component.
///
/// The clock is injected so slot binding and firing order are testable;
/// production uses [`Local::now`].
pub struct Scheduler<G, P, S, C = fn() -> DateTime<Local>> {
    pipeline: PostPipeline<G, P, S>,
    times: Vec<NaiveTime>,
    poll_interval: Duration,
    clock: C,
}

impl<G, P, S> Scheduler<G, P, S>
where
    G: ContentGenerator,
    P: Publisher,
    S: PostStore,
{
    /// Create a scheduler on the process-local clock.
    pub fn new(pipeline: PostPipeline<G, P, S>, times: Vec<NaiveTime>, poll_interval: Duration) -> Self {
        Self::with_clock(pipeline, times, poll_interval, Local::now)
    }
}

impl<G, P, S, C> Scheduler<G, P, S, C>
where
    G: ContentGenerator,
    P: Publisher,
    S: PostStore,
    C: Fn() -> DateTime<Local> + Send + Sync,
{
    /// Create a scheduler with an explicit clock.
    pub fn with_clock(
        pipeline: PostPipeline<G, P, S>,
        mut times: Vec<NaiveTime>,
        poll_interval: Duration,
        clock: C,
    ) -> Self {
        times.sort();
        Self {
            pipeline,
            times,
            poll_interval,
            clock,
        }
    }

    /// External-trigger mode: run exactly one cycle, dated by the clock.
    pub async fn run_once(&self) -> GriotResult<CycleOutcome> {
        self.pipeline.run_cycle_on((self.clock)().date_naive()).await
    }

    /// Long-lived mode: fire today's bound slots in order, then return.
    ///
    /// At start, only as many of the earliest upcoming time slots are bound
    /// as quota remains for today. A cycle failure abandons that slot and
    /// moves on to the next; the error has already been logged by the
    /// pipeline's failure path.
    #[instrument(skip(self))]
    pub async fn run(&self) -> GriotResult<()> {
        let start = (self.clock)();
        let today = start.date_naive();

        let remaining = self.pipeline.remaining_quota(today).await?;
        if remaining == 0 {
            info!("Daily quota already spent, nothing to schedule");
            return Ok(());
        }

        let slots: Vec<NaiveTime> = self
            .times
            .iter()
            .copied()
            .filter(|t| *t >= start.time())
            .take(remaining as usize)
            .collect();
        info!(
            bound = slots.len(),
            remaining,
            "Bound schedule slots for today"
        );

        for slot in slots {
            if !self.wait_until(today, slot).await {
                warn!(slot = %slot, "Day rolled over before the slot fired, stopping");
                break;
            }

            match self.pipeline.run_cycle_on(today).await {
                Ok(CycleOutcome::Published(record)) => {
                    info!(slot = %slot, seq = record.sequence_number, "Scheduled post published");
                }
                Ok(CycleOutcome::QuotaExhausted) => {
                    info!(slot = %slot, "Quota spent ahead of schedule, stopping");
                    break;
                }
                Err(e) => {
                    error!(slot = %slot, error = %e, "Scheduled cycle failed, slot abandoned");
                }
            }
        }

        Ok(())
    }

    /// Cooperative wait until `slot` arrives on `today`.
    ///
    /// Returns false if the calendar day changes first.
    async fn wait_until(&self, today: chrono::NaiveDate, slot: NaiveTime) -> bool {
        loop {
            let now = (self.clock)();
            if now.date_naive() > today {
                return false;
            }
            if now.date_naive() == today && now.time() >= slot {
                return true;
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
