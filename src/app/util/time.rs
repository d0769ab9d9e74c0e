use std::time::Instant;

pub fn elapsed_in_millis(started: Instant) -> u128 {
    started.elapsed().as_millis()
}
