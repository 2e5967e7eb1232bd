use crate::ticket::Ticket;
use std::fmt;
use tracing::debug;

/// Origin/destination pair that tickets are analysed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub origin: &'static str,
    pub destination: &'static str,
}

impl Route {
    /// Vladivostok to Tel Aviv.
    pub const VVO_TLV: Route = Route {
        origin: "VVO",
        destination: "TLV",
    };

    pub fn matches(&self, ticket: &Ticket) -> bool {
        *ticket.origin == *self.origin && *ticket.destination == *self.destination
    }

    /// Tickets flying this route, in input order.
    pub fn select<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        let selected: Vec<&Ticket> = tickets.iter().filter(|t| self.matches(t)).collect();
        debug!(route = %self, matched = selected.len(), total = tickets.len(), "filtered tickets");
        selected
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
