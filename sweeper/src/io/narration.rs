//! Round-by-round terminal narration of a draw.
//!
//! [`Narrator`] consumes the engine's [`DrawEvent`]s and turns them into
//! paced text. Pauses go through a [`Pacer`] so tests can record them
//! instead of sleeping.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::core::types::{DrawEvent, DrawOrder};

const SEPARATOR: &str = "------------------------------------";

/// Presentational delay between narration steps.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Pacer that blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Writes narration for each event to `out`, pausing `delay` between steps.
///
/// Write failures cannot be returned from an event callback, so the first
/// one is kept, later output is skipped, and [`Narrator::finish`] reports it.
pub struct Narrator<W: Write, P: Pacer> {
    out: W,
    pacer: P,
    delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write, P: Pacer> Narrator<W, P> {
    pub fn new(out: W, pacer: P, delay: Duration) -> Self {
        Self {
            out,
            pacer,
            delay,
            error: None,
        }
    }

    pub fn observe(&mut self, event: &DrawEvent) {
        if self.error.is_some() {
            return;
        }
        let (written, pause) = match event {
            DrawEvent::RoundStarted {
                round,
                order,
                driver,
            } => {
                let label = if order.is_pick_driven() { "Pick" } else { "Entrant" };
                (writeln!(self.out, "{label} {round}: {driver}"), self.delay)
            }
            DrawEvent::Drawing { .. } => (writeln!(self.out, "\nDrawing...\n"), self.delay),
            DrawEvent::Resolved { order, pairing, .. } => {
                let written = match order {
                    DrawOrder::Picks => writeln!(
                        self.out,
                        "{} ... drawn by ... {}\n",
                        pairing.pick, pairing.entrant
                    ),
                    DrawOrder::Entrants | DrawOrder::Shuffle => writeln!(
                        self.out,
                        "{} ... draws ... {}\n",
                        pairing.entrant, pairing.pick
                    ),
                };
                (written, self.delay * 2)
            }
            DrawEvent::RoundFinished { .. } => (writeln!(self.out, "{SEPARATOR}\n"), Duration::ZERO),
            DrawEvent::Undrawn { picks } => (
                writeln!(
                    self.out,
                    "Undrawn picks ({}): {}\n",
                    picks.len(),
                    picks.join(", ")
                ),
                self.delay,
            ),
        };
        if let Err(err) = written.and_then(|()| self.out.flush()) {
            self.error = Some(err);
            return;
        }
        self.pacer.pause(pause);
    }

    /// Return the writer, or the first write error seen.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draw::draw;
    use crate::core::types::DrawOptions;
    use crate::test_support::{RecordingPacer, names, seeded_rng};

    fn narrate(order: DrawOrder, delay: Duration) -> (String, Vec<Duration>) {
        let entrants = names(&["Harold", "Jim"]);
        let picks = names(&["Bengals", "Bills", "Chiefs"]);
        let options = DrawOptions {
            order,
            deterministic: true,
        };
        let mut narrator = Narrator::new(Vec::new(), RecordingPacer::default(), delay);
        draw(&entrants, &picks, &options, &mut seeded_rng(0), |event| {
            narrator.observe(event);
        })
        .expect("draw");
        let pauses = narrator.pacer.pauses.clone();
        let out = narrator.finish().expect("finish");
        (String::from_utf8(out).expect("utf8"), pauses)
    }

    #[test]
    fn entrant_driven_narration() {
        let (text, _) = narrate(DrawOrder::Entrants, Duration::ZERO);
        assert!(text.starts_with("Entrant 1: Harold\n\nDrawing...\n\nHarold ... draws ... Bengals\n\n"));
        assert!(text.contains("Entrant 2: Jim\n"));
        assert!(text.ends_with("Undrawn picks (1): Chiefs\n\n"));
        assert_eq!(text.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn pick_driven_narration() {
        let (text, _) = narrate(DrawOrder::Picks, Duration::ZERO);
        assert!(text.starts_with("Pick 1: Bengals\n"));
        assert!(text.contains("Bills ... drawn by ... Jim\n"));
        assert!(text.ends_with("Undrawn picks (1): Chiefs\n\n"));
    }

    #[test]
    fn pauses_scale_with_delay() {
        let delay = Duration::from_millis(10);
        let (_, pauses) = narrate(DrawOrder::Entrants, delay);
        let round = vec![delay, delay, delay * 2, Duration::ZERO];
        let mut expected = round.clone();
        expected.extend(round);
        expected.push(delay);
        assert_eq!(pauses, expected);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported_on_finish() {
        let mut narrator = Narrator::new(FailingWriter, RecordingPacer::default(), Duration::ZERO);
        narrator.observe(&DrawEvent::Drawing { round: 1 });
        narrator.observe(&DrawEvent::Drawing { round: 2 });
        assert!(narrator.pacer.pauses.is_empty());
        let err = narrator.finish().err().expect("error");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
