use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Run `on_tick` every `period` until it returns false or the round gate
/// stops naming `generation`
///
/// The first tick fires one full period after the call, not immediately.
/// The gate is watched alongside the timer, so flipping it wakes the task
/// straight away instead of at the next tick.
pub(crate) async fn run_periodic<F>(
    period: Duration,
    generation: u64,
    mut gate: watch::Receiver<Option<u64>>,
    mut on_tick: F,
) where
    F: FnMut() -> bool,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !on_tick() {
                    break;
                }
            }

            changed = gate.changed() => {
                if changed.is_err() || *gate.borrow_and_update() != Some(generation) {
                    break;
                }
            }
        }
    }
}
