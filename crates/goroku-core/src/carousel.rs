//! The auto-advancing featured-quote carousel.
//!
//! A single shared timer advances the index modulo the list length. Manual
//! selection sets the index immediately but does not reset or cancel the
//! pending tick, so a manually selected slide may be overwritten anywhere
//! from 0 to one full period later. That is the intended behavior (a peek,
//! not a pin); do not add debounce or timer-reset logic here.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use goroku_api::types::Quote;

/// Fixed rotation period.
pub const ROTATE_PERIOD: Duration = Duration::from_millis(5000);

/// The carousel keeps at most this many featured quotes.
pub const FEATURED_LIMIT: usize = 5;

/// Carousel state: a fixed list of featured quotes and the display index.
///
/// Empty list means inactive (no current slide). For a non-empty list the
/// index is always in `[0, len)`.
#[derive(Debug, Default)]
pub struct Carousel {
    quotes: Vec<Quote>,
    index: usize,
}

impl Carousel {
    pub fn new(mut quotes: Vec<Quote>) -> Self {
        quotes.truncate(FEATURED_LIMIT);
        Self { quotes, index: 0 }
    }

    pub fn is_active(&self) -> bool {
        !self.quotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Quote> {
        self.quotes.get(self.index)
    }

    /// Automatic advance: next index modulo length. No-op when inactive.
    pub fn advance(&mut self) {
        if !self.quotes.is_empty() {
            self.index = (self.index + 1) % self.quotes.len();
        }
    }

    /// Manual selection. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.quotes.len() {
            self.index = index;
        }
    }
}

/// Drives a [`Carousel`] with a repeating timer.
///
/// The timer is armed only for a non-empty list, and is cancelled on
/// [`shutdown`](Self::shutdown) and on drop so no tick ever fires against
/// released state.
pub struct CarouselScheduler {
    carousel: Arc<Mutex<Carousel>>,
    index_tx: watch::Sender<usize>,
    timer: Option<JoinHandle<()>>,
}

impl CarouselScheduler {
    pub fn start(quotes: Vec<Quote>) -> Self {
        let carousel = Arc::new(Mutex::new(Carousel::new(quotes)));
        let (index_tx, _) = watch::channel(0);
        let active = carousel.lock().unwrap().is_active();
        let timer = active.then(|| {
            let shared = Arc::clone(&carousel);
            let tx = index_tx.clone();
            tokio::spawn(async move {
                // First tick one full period after start, then every period.
                let mut ticker =
                    tokio::time::interval_at(Instant::now() + ROTATE_PERIOD, ROTATE_PERIOD);
                loop {
                    ticker.tick().await;
                    let index = {
                        let mut carousel = shared.lock().unwrap();
                        carousel.advance();
                        carousel.index()
                    };
                    Self::publish(&tx, index);
                    debug!(index, "carousel tick");
                }
            })
        });
        Self {
            carousel,
            index_tx,
            timer,
        }
    }

    fn publish(tx: &watch::Sender<usize>, index: usize) {
        tx.send_if_modified(|current| {
            if *current != index {
                *current = index;
                true
            } else {
                false
            }
        });
    }

    /// Observe index changes, whether from the timer or manual selection.
    /// Receivers see an update only when the displayed slide actually moves.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_tx.subscribe()
    }

    pub fn current(&self) -> Option<Quote> {
        self.carousel.lock().unwrap().current().cloned()
    }

    pub fn index(&self) -> usize {
        self.carousel.lock().unwrap().index()
    }

    /// Manual selection; the pending automatic tick is left untouched.
    pub fn select(&self, index: usize) {
        let current = {
            let mut carousel = self.carousel.lock().unwrap();
            carousel.select(index);
            carousel.index()
        };
        Self::publish(&self.index_tx, current);
    }

    /// Cancel the rotation timer. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for CarouselScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
