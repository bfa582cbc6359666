/// Decide whether the radio counts as active at `now_ms`.
///
/// An advertisement heard at most `hold_ms` ago keeps the signal high;
/// with nothing heard yet the answer is `false`.
pub fn heard_recently(last_heard_ms: Option<u64>, now_ms: u64, hold_ms: u64) -> bool {
    match last_heard_ms {
        Some(heard) => now_ms.saturating_sub(heard) <= hold_ms,
        None => false,
    }
}
