use log::warn;
use tokio::sync::mpsc::UnboundedSender;

use crate::domain::Coord;

/// What produced a redraw frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawCause {
    Tick,
    Toggle,
    Seed,
    Reset,
}

/// Cells whose committed state changed, handed to whatever draws the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redraw {
    pub cause: RedrawCause,
    /// Generation the board is at after the change
    pub generation: u64,
    pub changed: Vec<Coord>,
}

/// Receiver of board deltas.
///
/// Called while the controller holds the grid lock, so implementations must
/// not block or call back into the controller.
pub trait RedrawSink: Send + Sync {
    fn redraw(&self, frame: Redraw);
}

/// Discards every frame
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RedrawSink for NullSink {
    fn redraw(&self, _frame: Redraw) {}
}

impl RedrawSink for UnboundedSender<Redraw> {
    fn redraw(&self, frame: Redraw) {
        if self.send(frame).is_err() {
            warn!("redraw receiver dropped, frame discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn channel_sink_forwards_frames() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let frame = Redraw {
            cause: RedrawCause::Toggle,
            generation: 3,
            changed: vec![Coord::new(1, 2)],
        };
        tx.redraw(frame.clone());
        assert_eq!(rx.try_recv(), Ok(frame));
    }

    #[test_log::test]
    fn closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel::<Redraw>();
        drop(rx);
        tx.redraw(Redraw {
            cause: RedrawCause::Tick,
            generation: 0,
            changed: Vec::new(),
        });
    }
}
