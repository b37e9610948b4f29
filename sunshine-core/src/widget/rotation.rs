//! Quote rotation timer.
//!
//! A one-shot deadline that re-arms itself each time it fires. The UI checks
//! it once per frame and schedules its next wakeup for [`QuoteRotator::time_until_due`].

use std::time::{Duration, Instant};

use rand::Rng;

use crate::quotes::QuoteList;

/// Holds the quote list, the displayed quote, and the next firing time.
#[derive(Debug, Clone)]
pub struct QuoteRotator {
    quotes: QuoteList,
    current: String,
    next_due: Instant,
}

impl QuoteRotator {
    /// Show a first quote right away and arm the timer for `period`.
    pub fn start<R: Rng + ?Sized>(quotes: QuoteList, now: Instant, period: Duration, rng: &mut R) -> Self {
        let current = quotes.choose(rng).to_string();
        Self {
            quotes,
            current,
            next_due: now + period,
        }
    }

    /// The quote currently displayed.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn quotes(&self) -> &QuoteList {
        &self.quotes
    }

    /// When the timer fires next.
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Time left before the next firing, zero if overdue.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Fire if the deadline has passed.
    ///
    /// `period` is read at firing time, so a changed interval only affects
    /// the deadline armed by this firing. Returns whether a new quote was
    /// picked.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, period: Duration, rng: &mut R) -> bool {
        if now < self.next_due {
            return false;
        }
        self.current = self.quotes.choose(rng).to_string();
        self.next_due = now + period;
        tracing::trace!(quote = %self.current, "Rotated quote");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quotes(items: &[&str]) -> QuoteList {
        QuoteList::new(items.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_first_quote_shown_immediately() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Instant::now();
        let rotator = QuoteRotator::start(quotes(&["a", "b"]), now, Duration::from_secs(120), &mut rng);

        assert!(rotator.quotes().contains(rotator.current()));
        assert_eq!(rotator.next_due(), now + Duration::from_secs(120));
    }

    #[test]
    fn test_tick_before_deadline_does_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        let now = Instant::now();
        let mut rotator = QuoteRotator::start(quotes(&["a", "b"]), now, Duration::from_secs(10), &mut rng);

        assert!(!rotator.tick(now + Duration::from_secs(9), Duration::from_secs(10), &mut rng));
        assert_eq!(rotator.next_due(), now + Duration::from_secs(10));
    }

    #[test]
    fn test_every_displayed_quote_is_member() {
        let mut rng = StdRng::seed_from_u64(3);
        let list = quotes(&["sun", "rain", "cloud", "wind"]);
        let period = Duration::from_secs(1);
        let mut now = Instant::now();
        let mut rotator = QuoteRotator::start(list.clone(), now, period, &mut rng);

        for _ in 0..100 {
            now += period;
            assert!(rotator.tick(now, period, &mut rng));
            assert!(list.contains(rotator.current()));
        }
    }

    #[test]
    fn test_single_quote_always_shown() {
        let mut rng = StdRng::seed_from_u64(4);
        let period = Duration::from_secs(1);
        let mut now = Instant::now();
        let mut rotator = QuoteRotator::start(quotes(&["only"]), now, period, &mut rng);

        for _ in 0..20 {
            now += period;
            rotator.tick(now, period, &mut rng);
            assert_eq!(rotator.current(), "only");
        }
    }

    #[test]
    fn test_interval_change_applies_on_next_rearm() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let mut rotator = QuoteRotator::start(quotes(&["a"]), start, Duration::from_secs(120), &mut rng);

        // A shorter interval does not pull the armed deadline in.
        assert!(!rotator.tick(start + Duration::from_secs(5), Duration::from_secs(2), &mut rng));
        assert_eq!(rotator.next_due(), start + Duration::from_secs(120));

        // Once it fires, the new interval arms the next deadline.
        let fired_at = start + Duration::from_secs(120);
        assert!(rotator.tick(fired_at, Duration::from_secs(2), &mut rng));
        assert_eq!(rotator.next_due(), fired_at + Duration::from_secs(2));
    }

    #[test]
    fn test_time_until_due_saturates() {
        let mut rng = StdRng::seed_from_u64(6);
        let now = Instant::now();
        let rotator = QuoteRotator::start(quotes(&["a"]), now, Duration::from_secs(3), &mut rng);

        assert_eq!(rotator.time_until_due(now), Duration::from_secs(3));
        assert_eq!(rotator.time_until_due(now + Duration::from_secs(10)), Duration::ZERO);
    }
}
