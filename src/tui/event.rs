//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) are read on a dedicated thread and
//! funneled through an mpsc channel, together with tick events and the
//! completion messages background sync threads send back.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::models::LovedOneId;
use crate::sync::{SyncResponse, SyncTarget};

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// A background sync finished
    SyncDone(SyncTarget, SyncResponse),
    /// A single face upload finished
    FaceUploaded(LovedOneId, SyncResponse),
    /// An emergency alert was raised
    Emergency(String),
}

/// Capability to raise an emergency alert from anywhere that holds it.
/// Passed explicitly instead of living in ambient shared state.
#[derive(Debug, Clone)]
pub struct EmergencyHandle {
    sender: mpsc::Sender<Event>,
}

impl EmergencyHandle {
    /// Create a handle that reports into the given channel
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Raise an emergency alert with a summary message
    pub fn raise(&self, message: impl Into<String>) {
        // The receiver only disappears on shutdown; a lost alert at that
        // point has nowhere to render anyway.
        let _ = self.sender.send(Event::Emergency(message.into()));
    }
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender, cloned for sync threads and the emergency handle
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    if event::poll(timeout).expect("Failed to poll events") {
                        match event::read().expect("Failed to read event") {
                            CrosstermEvent::Key(key) => {
                                if sender.send(Event::Key(key)).is_err() {
                                    return;
                                }
                            }
                            CrosstermEvent::Mouse(mouse) => {
                                if sender.send(Event::Mouse(mouse)).is_err() {
                                    return;
                                }
                            }
                            CrosstermEvent::Resize(width, height) => {
                                if sender.send(Event::Resize(width, height)).is_err() {
                                    return;
                                }
                            }
                            _ => {}
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// A sender clone for background threads reporting back
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// An emergency-raise capability bound to this event loop
    pub fn emergency_handle(&self) -> EmergencyHandle {
        EmergencyHandle::new(self.sender.clone())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
