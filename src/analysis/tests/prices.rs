use crate::analysis::tests::utils::{sample_tickets, ticket};
use crate::analysis::{average, median, PriceStats};
use crate::ticket::Ticket;

#[test]
fn test_sample_price_stats() {
    let stats = PriceStats::from_tickets(&sample_tickets());

    assert_eq!(150.0, stats.average);
    assert_eq!(150.0, stats.median);
    assert_eq!(0.0, stats.difference);
}

#[test]
fn test_empty_price_stats_are_zero() {
    let stats = PriceStats::from_tickets(&Vec::<Ticket>::new());

    assert_eq!(
        PriceStats {
            average: 0.0,
            median: 0.0,
            difference: 0.0
        },
        stats
    );
}

#[test]
fn test_even_median_is_exact_mean() {
    assert_eq!(10.5, median(&[10, 11]));
    assert_eq!(2.5, median(&[1, 2, 3, 4]));
}

#[test]
fn test_odd_median_is_middle_value() {
    assert_eq!(7.0, median(&[7]));
    assert_eq!(3.0, median(&[1, 3, 100]));
}

#[test]
fn test_median_sorts_input_order() {
    let tickets = vec![
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 900),
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 100),
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 300),
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 200),
    ];

    let stats = PriceStats::from_tickets(&tickets);

    assert_eq!(375.0, stats.average);
    assert_eq!(250.0, stats.median);
    assert_eq!(125.0, stats.difference);
}

#[test]
fn test_difference_is_absolute() {
    let tickets = vec![
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 10),
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 100),
        ticket("VVO", "TLV", "08:00", "09:00", "SU", 100),
    ];

    let stats = PriceStats::from_tickets(&tickets);

    assert_eq!(70.0, stats.average);
    assert_eq!(100.0, stats.median);
    assert_eq!(30.0, stats.difference);
}

#[test]
fn test_large_prices_do_not_overflow() {
    assert_eq!(f64::from(u32::MAX), average(&[u32::MAX, u32::MAX]));
    assert_eq!(f64::from(u32::MAX), median(&[u32::MAX, u32::MAX]));
}
