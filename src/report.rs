use crate::analysis::Analysis;
use crate::ticket::CarrierId;
use crate::time::Duration;
use std::fmt::Write;
use tabled::settings::Style;
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One `<carrier>: <minutes>` line per carrier.
    Plain,
    /// Carrier durations as a table.
    Table,
}

#[derive(Tabled)]
struct CarrierRow {
    #[tabled(rename = "Carrier")]
    carrier: CarrierId,
    #[tabled(rename = "Minutes")]
    minutes: u32,
    #[tabled(rename = "Flight time")]
    duration: Duration,
}

pub fn render(analysis: &Analysis, layout: Layout) -> String {
    let mut out = String::new();
    let _ = write_report(&mut out, analysis, layout);
    out
}

fn write_report(out: &mut String, analysis: &Analysis, layout: Layout) -> std::fmt::Result {
    writeln!(out, "Minimum flight time per carrier ({}):", analysis.route)?;
    match layout {
        Layout::Plain => {
            for (carrier, duration) in &analysis.min_durations {
                writeln!(out, "{}: {}", carrier, duration.minutes())?;
            }
        }
        Layout::Table if analysis.min_durations.is_empty() => {
            writeln!(out, "No matching tickets found.")?;
        }
        Layout::Table => {
            let rows = analysis.min_durations.iter().map(|(carrier, duration)| CarrierRow {
                carrier: carrier.clone(),
                minutes: duration.minutes(),
                duration: *duration,
            });
            let mut table = tabled::Table::new(rows);
            table.with(Style::rounded());
            table.with(tabled::settings::Alignment::left());
            writeln!(out, "{}", table)?;
        }
    }

    let prices = &analysis.prices;
    writeln!(out, "Average price: {:.2}", prices.average)?;
    writeln!(out, "Median price: {:.2}", prices.median)?;
    writeln!(out, "Difference between average and median price: {:.2}", prices.difference)?;
    Ok(())
}
