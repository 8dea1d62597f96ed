use super::*;
use crate::MARKER_VELOCITY;
use crate::NodeId;
use crate::Pixels;
use crate::layout::Point;
use std::time::Instant;

/// A finished flight, ready to be deposited under its leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub leaf: NodeId,
    pub marker: Marker,
}

/// Drives any number of concurrent flights from display frames.
///
/// Flights never share state with one another. Completion is reported
/// through a callback in frame order, so whoever owns the leaf stacks
/// assigns slots from the count at the moment each flight lands.
#[derive(Debug, Clone)]
pub struct Animator {
    flights: Vec<Flight>,
    velocity: Pixels,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(MARKER_VELOCITY)
    }
}

impl Animator {
    pub fn new(velocity: Pixels) -> Self {
        Self {
            flights: Vec::new(),
            velocity,
        }
    }
    /// Starts a flight along `points`. A path without edges lands
    /// immediately and never becomes a flight.
    pub fn animate<F>(&mut self, points: &[Point], leaf: NodeId, marker: Marker, now: Instant, mut on_complete: F)
    where
        F: FnMut(Landing),
    {
        let flight = Flight::new(points, leaf, marker, self.velocity, now);
        if flight.segments() == 0 {
            log::trace!("[animator] leaf {} reached without motion", leaf);
            on_complete(Landing { leaf, marker });
        } else {
            log::trace!("[animator] launch toward leaf {} for {:?}", leaf, flight.duration());
            self.flights.push(flight);
        }
    }
    /// Advances every flight to `now`, removing and reporting the ones
    /// that have reached their leaf.
    pub fn frame<F>(&mut self, now: Instant, mut on_complete: F)
    where
        F: FnMut(Landing),
    {
        let mut landed = Vec::new();
        self.flights.retain(|flight| match flight.done(now) {
            true => {
                landed.push(Landing {
                    leaf: flight.leaf(),
                    marker: flight.marker(),
                });
                false
            }
            false => true,
        });
        landed.into_iter().for_each(|landing| on_complete(landing));
    }
    /// Current position of every transient marker.
    pub fn positions(&self, now: Instant) -> Vec<Point> {
        self.flights
            .iter()
            .filter_map(|f| f.position_at(now))
            .collect()
    }
    pub fn in_flight(&self) -> usize {
        self.flights.len()
    }
    /// Drops every flight without landing it.
    pub fn abandon(&mut self) {
        if !self.flights.is_empty() {
            log::debug!("[animator] abandoning {} flights", self.flights.len());
        }
        self.flights.clear();
    }
}
