//! Embassy async tasks
//!
//! Every task runs its own ticker loop against the shared lot. No task
//! waits for another; each pass is bounded and then yields.

pub mod display;
pub mod expiry;
pub mod input;
pub mod matrix;
pub mod web;
pub mod wifi;

pub use display::{display_task, Oled};
pub use expiry::expiry_task;
pub use input::{input_task, Buttons};
pub use matrix::{matrix_task, MatrixDriver};
pub use web::web_task;
pub use wifi::{cyw43_task, net_task, WifiRunner};

use embassy_time::{Duration, Instant};
use parklot_core::time::Millis;

/// Milliseconds since boot, wrapping
pub fn now_ms() -> Millis {
    Instant::now().as_millis() as Millis
}

/// Ticker period from a configured millisecond value
pub fn period(ms: Millis) -> Duration {
    Duration::from_millis(u64::from(ms.max(1)))
}
