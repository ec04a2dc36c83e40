//! # Metronome Driver
//!
//! A fixed-period tick source with a four-beat count-in. During the count-in
//! each tick sounds the click and nothing else; from the fifth tick onward
//! every tick is a musical beat and the click stays silent. The driver runs
//! until its [`StopHandle`] is cancelled.

use std::time::Duration;

use crate::timer::{StopHandle, Timer};

/// Silent count-in beats before the first musical callback.
pub const COUNT_IN_TICKS: u32 = 4;

/// Tick period for a tempo: 60000/bpm milliseconds. `bpm` must be positive;
/// there is no period for a tempo of zero.
pub fn period(bpm: u16) -> Duration {
    debug_assert!(bpm > 0, "tempo must be positive");
    Duration::from_secs_f64(60.0 / bpm as f64)
}

/// Start ticking at `bpm`. The first [`COUNT_IN_TICKS`] ticks invoke
/// `on_click` only; every later tick invokes `on_beat` only. Returns the
/// handle that cancels all future ticks.
pub fn start(
    timer: &dyn Timer,
    bpm: u16,
    mut on_click: impl FnMut() + 'static,
    mut on_beat: impl FnMut() + 'static,
) -> StopHandle {
    let mut count_in = COUNT_IN_TICKS;
    timer.every(
        period(bpm),
        Box::new(move || {
            if count_in > 0 {
                on_click();
                count_in -= 1;
                return;
            }
            on_beat();
        }),
    )
}
