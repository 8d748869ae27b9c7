//! Identifier generation
//!
//! Ids combine the host-clock second (hex) with a monotonic counter, so two
//! calls within the same second still differ. Counters are never reset:
//! `clear` wipes books and trades but ids stay unique for the whole process
//! lifetime.

/// Generates unique id strings of the form `{seconds:x}-{tag}{counter}`.
///
/// Orders and trades each use their own generator (tags `""` and `"trade-"`).
#[derive(Debug)]
pub struct IdGenerator {
    tag: &'static str,
    counter: u64,
}

impl IdGenerator {
    pub const fn new(tag: &'static str) -> Self {
        Self { tag, counter: 0 }
    }

    /// Mint the next id for the given host-clock second
    pub fn next(&mut self, now: i64) -> String {
        self.counter += 1;
        format!("{:x}-{}{}", now, self.tag, self.counter)
    }
}
