//! Request pacing between page fetches.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

const MIN_DELAY_MS: u64 = 2000;
const MAX_DELAY_MS: u64 = 4000;

/// Sleeps for a jittered interval so page fetches do not hammer a board
/// at a fixed rhythm.
pub async fn page_pause() {
    // ThreadRng is not Send, so it must be dropped before the await.
    let ms = jitter_ms();
    debug!("Pausing {ms}ms before next page");
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn jitter_ms() -> u64 {
    rand::thread_rng().gen_range(MIN_DELAY_MS..=MAX_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_stays_in_bounds() {
        for _ in 0..100 {
            let ms = jitter_ms();
            assert!((MIN_DELAY_MS..=MAX_DELAY_MS).contains(&ms));
        }
    }
}
