//! Event handling for taskpad

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

/// Poll for an event with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
