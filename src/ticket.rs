use crate::time::{Duration, Time};
use serde::Deserialize;
use std::sync::Arc;

pub type AirportCode = Arc<str>;
pub type CarrierId = Arc<str>;

/// A single flight offer as read from the tickets document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure_time: Time,
    pub arrival_time: Time,
    pub carrier: CarrierId,
    pub price: u32,
}

impl Ticket {
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }
}
