use chrono::{NaiveDateTime, Timelike};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::PriceProvider,
    core::{
        cache::CacheStorage,
        color::{ColorScale, HexColor},
        fetcher::PriceFetcher,
        record::PriceRecord,
    },
    prelude::*,
    quantity::KilowattHourRate,
};

/// Printed instead of the price when it cannot be obtained.
pub const FALLBACK_OUTPUT: &str = " kW/h n/a ";

/// Pango markup for the i3blocks segment.
#[must_use]
pub fn format_output(price: KilowattHourRate, color: &HexColor) -> String {
    format!(r#"<span bgcolor="{color}"> kW/h {price} </span>"#)
}

/// The line for the bar, never failing so that the segment stays visible.
#[must_use]
pub fn now_line<P: PriceProvider, C: CacheStorage>(
    fetcher: &PriceFetcher<P, C>,
    scale: &ColorScale,
    now: NaiveDateTime,
) -> String {
    match fetcher.read_current_price(now) {
        Ok(price) => format_output(price, scale.price_to_color(price)),
        Err(error) => {
            error!("failed to get the current price: {error:#}");
            FALLBACK_OUTPUT.to_string()
        }
    }
}

#[must_use]
pub fn build_day_table(record: &PriceRecord, scale: &ColorScale, now: NaiveDateTime) -> Table {
    let current_hour = (record.date == now.date()).then(|| now.hour());

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Start", "End", "Price"]);
    for (hour, price) in (0_u32..).zip(&record.hourly_prices) {
        let (r, g, b) = scale.price_to_color(*price).rgb();
        let mut price_cell =
            Cell::new(price).set_alignment(CellAlignment::Right).fg(Color::Rgb { r, g, b });
        if current_hour == Some(hour) {
            price_cell = price_cell.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")),
            Cell::new(format!("{:02}:00", (hour + 1) % 24)).add_attribute(Attribute::Dim),
            price_cell,
        ]);
    }
    table
}
