use crate::catalog::types::ThreatReport;
use crate::radar::track::TrackIterator;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Channel depth for the paced feed. Production is externally paced at 1 Hz,
/// so a short buffer is all a briefly stalled consumer needs.
const CHANNEL_CAPACITY: usize = 8;

/// Real-time radar feed: replays a [`TrackIterator`] at one tick per second
/// into a bounded channel.
///
/// Cancellation is cooperative and happens between ticks: when the receiver
/// is dropped the producer task notices on its next send and stops without
/// emitting a partial tick. The join handle is exposed so shutdown can be
/// awaited.
pub struct RadarStream {
    receiver: mpsc::Receiver<ThreatReport>,
    handle: JoinHandle<()>,
}

impl RadarStream {
    /// Spawns the producer task for `max_seconds` ticks from the given
    /// initial state. Must be called within a tokio runtime.
    pub fn spawn(initial: ThreatReport, max_seconds: u64) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for report in TrackIterator::new(initial, max_seconds) {
                ticker.tick().await;
                if tx.send(report).await.is_err() {
                    // Consumer went away; stop producing.
                    break;
                }
            }
        });
        Self {
            receiver: rx,
            handle,
        }
    }

    /// Next report, or `None` once the track is exhausted.
    pub async fn recv(&mut self) -> Option<ThreatReport> {
        self.receiver.recv().await
    }

    /// Consumes the stream, returning the parts for manual control.
    pub fn into_parts(self) -> (mpsc::Receiver<ThreatReport>, JoinHandle<()>) {
        (self.receiver, self.handle)
    }
}
