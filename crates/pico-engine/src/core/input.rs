use std::time::Duration;

use crate::backend::Backend;
use crate::coords::Point;
use crate::input::{zoomed, Event, EventClass, Gesture};

use super::error::{PicoError, Result};
use super::size::{LogicalSize, PhysicalSize};
use super::Pico;

impl<B: Backend> Pico<B> {
    /// Waits until an event of `class` arrives.
    ///
    /// Built-in gestures are handled on the way and never returned. Outside
    /// expert mode a quit request ends the wait with [`PicoError::Quit`].
    pub fn input_event(&mut self, class: impl Into<EventClass>) -> Result<Event> {
        self.ensure_active()?;
        let class = class.into();
        loop {
            let Some(ev) = self.backend.wait_event(None).map_err(PicoError::EventsClosed)? else {
                continue;
            };
            if let Some(ev) = self.accept(class, ev)? {
                return Ok(ev);
            }
        }
    }

    /// Like [`input_event`](Self::input_event), giving up after `timeout`.
    /// Discarded events count against the same budget.
    pub fn input_event_timeout(
        &mut self,
        class: impl Into<EventClass>,
        timeout: Duration,
    ) -> Result<Option<Event>> {
        self.ensure_active()?;
        let class = class.into();
        let deadline = self.backend.ticks() + timeout;
        loop {
            let left = deadline.saturating_sub(self.backend.ticks());
            let Some(ev) = self.backend.wait_event(Some(left)).map_err(PicoError::EventsClosed)? else {
                return Ok(None);
            };
            if let Some(ev) = self.accept(class, ev)? {
                return Ok(Some(ev));
            }
        }
    }

    /// Takes a matching event from the queue without waiting.
    pub fn input_event_ask(&mut self, class: impl Into<EventClass>) -> Result<Option<Event>> {
        self.ensure_active()?;
        let class = class.into();
        loop {
            let Some(ev) = self.backend.poll_event().map_err(PicoError::EventsClosed)? else {
                return Ok(None);
            };
            if let Some(ev) = self.accept(class, ev)? {
                return Ok(Some(ev));
            }
        }
    }

    /// Sleeps for `delay`, handling gestures and quit while discarding every
    /// other event.
    pub fn input_delay(&mut self, delay: Duration) -> Result<()> {
        self.ensure_active()?;
        let deadline = self.backend.ticks() + delay;
        loop {
            let left = deadline.saturating_sub(self.backend.ticks());
            if left.is_zero() {
                return Ok(());
            }
            if let Some(ev) = self.backend.wait_event(Some(left)).map_err(PicoError::EventsClosed)? {
                self.intercept(ev)?;
            }
        }
    }

    /// Runs the built-in handling, then matches against `class`. Accepted
    /// events get the pan offset added to their position.
    fn accept(&mut self, class: EventClass, ev: Event) -> Result<Option<Event>> {
        let Some(mut ev) = self.intercept(ev)? else {
            return Ok(None);
        };
        if !class.matches(&ev) {
            log::trace!("input: discarding {:?}", ev.kind());
            return Ok(None);
        }
        ev.offset_pos(self.state.pan);
        Ok(Some(ev))
    }

    /// Quit and gesture handling shared by every fetch. Returns the event
    /// unless it was consumed.
    fn intercept(&mut self, ev: Event) -> Result<Option<Event>> {
        if ev == Event::Quit && !self.state.expert {
            log::debug!("input: quit requested");
            return Err(PicoError::Quit);
        }

        match Gesture::detect(&ev, self.backend.modifiers()) {
            Some(g) => {
                self.apply_gesture(g)?;
                Ok(None)
            }
            None => Ok(Some(ev)),
        }
    }

    fn apply_gesture(&mut self, g: Gesture) -> Result<()> {
        log::debug!("input: gesture {g:?}");
        match g {
            Gesture::Pan(d) => {
                self.state.pan = self.state.pan + d;
            }
            Gesture::ZoomIn | Gesture::ZoomOut => {
                let logical = zoomed(self.logical, g);
                self.resize(PhysicalSize::Keep, LogicalSize::Exact(logical))?;
            }
            Gesture::Reset => {
                self.state.pan = Point::zero();
                let base = self.base_logical;
                self.resize(PhysicalSize::Keep, LogicalSize::Exact(base))?;
            }
        }
        Ok(())
    }
}
