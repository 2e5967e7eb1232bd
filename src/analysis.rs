use crate::route::Route;
use crate::ticket::{CarrierId, Ticket};
use crate::time::Duration;
use std::collections::BTreeMap;
use tracing::warn;

#[cfg(test)]
pub(crate) mod tests;

/// Shortest flight per carrier over the given tickets.
pub fn min_durations<'a, I>(tickets: I) -> BTreeMap<CarrierId, Duration>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut min_times: BTreeMap<CarrierId, Duration> = BTreeMap::new();
    for ticket in tickets {
        let duration = ticket.duration();
        min_times
            .entry(ticket.carrier.clone())
            .and_modify(|d| *d = (*d).min(duration))
            .or_insert(duration);
    }
    min_times
}

/// Arithmetic mean, 0 for no prices.
pub fn average(prices: &[u32]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    let total: u64 = prices.iter().map(|&p| u64::from(p)).sum();
    total as f64 / prices.len() as f64
}

/// Median of already sorted prices, 0 for no prices.
pub fn median(sorted: &[u32]) -> f64 {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 0 => (u64::from(sorted[mid - 1]) + u64::from(sorted[mid])) as f64 / 2.0,
        _ => f64::from(sorted[mid]),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub average: f64,
    pub median: f64,
    pub difference: f64,
}

impl PriceStats {
    pub fn from_tickets<'a, I>(tickets: I) -> PriceStats
    where
        I: IntoIterator<Item = &'a Ticket>,
    {
        let mut prices: Vec<u32> = tickets.into_iter().map(|t| t.price).collect();
        prices.sort_unstable();
        let average = average(&prices);
        let median = median(&prices);
        PriceStats {
            average,
            median,
            difference: (average - median).abs(),
        }
    }
}

/// Everything reported for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub route: Route,
    pub matched: usize,
    pub min_durations: BTreeMap<CarrierId, Duration>,
    pub prices: PriceStats,
}

impl Analysis {
    pub fn run(route: Route, tickets: &[Ticket]) -> Analysis {
        let selected = route.select(tickets);
        if selected.is_empty() {
            warn!(route = %route, total = tickets.len(), "no tickets for route");
        }

        Analysis {
            route,
            matched: selected.len(),
            min_durations: min_durations(selected.iter().copied()),
            prices: PriceStats::from_tickets(selected.iter().copied()),
        }
    }
}
