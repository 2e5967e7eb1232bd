use crate::ticket::Ticket;
use crate::time::Time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn ticket(
    origin: &str,
    destination: &str,
    departure_time: &str,
    arrival_time: &str,
    carrier: &str,
    price: u32,
) -> Ticket {
    Ticket {
        origin: id(origin),
        destination: id(destination),
        departure_time: departure_time.parse().unwrap(),
        arrival_time: arrival_time.parse().unwrap(),
        carrier: id(carrier),
        price,
    }
}

pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        ticket("VVO", "TLV", "08:00", "10:30", "AA", 100),
        ticket("VVO", "TLV", "09:00", "11:00", "AA", 200),
        ticket("VVO", "TLV", "07:00", "08:30", "BB", 150),
    ]
}

pub fn arb_airport() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![Just(id("VVO")), Just(id("TLV")), Just(id("LED")), Just(id("vvo")),]
}

pub fn arb_carrier() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![Just(id("SU")), Just(id("TK")), Just(id("S7")), Just(id("BA")),]
}

pub fn arb_time() -> impl Strategy<Value = Time> {
    (0..24u32, 0..60u32).prop_map(|(h, m)| Time::hms(h, m, 0).unwrap())
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (
        arb_airport(),
        arb_airport(),
        arb_time(),
        arb_time(),
        arb_carrier(),
        0..50_000u32,
    )
        .prop_map(|(origin, destination, dep, arr, carrier, price)| Ticket {
            origin,
            destination,
            departure_time: dep,
            arrival_time: arr,
            carrier,
            price,
        })
}
