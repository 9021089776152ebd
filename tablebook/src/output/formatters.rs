//! Renderer implementations.

use serde::Serialize;
use serde_json::json;

use crate::operations::{BookOptions, DayAvailability, ExecutionResult};
use crate::reservation::{seating_time, Reservation};
use crate::table::Table;
use crate::{Error, Result};

use super::{AvailabilityRow, FormRow, Renderer, ReservationRow};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Render {
        format: "json",
        message: e.to_string(),
    })
}

fn to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let csv_error = |message: String| Error::Render {
        format: "csv",
        message,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| csv_error(format!("failed to serialize to CSV: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv_error(format!("failed to flush CSV: {e}")))?;
    let text = String::from_utf8(bytes).map_err(|e| csv_error(e.to_string()))?;
    Ok(text.trim_end().to_string())
}

/// Renderer for human-readable output.
pub struct TextRenderer;

impl TextRenderer {
    fn reservation_line(reservation: &Reservation) -> String {
        format!(
            "#{:<4} {} {}  table #{} ({} seats)  {} person(s)  {} <{}>",
            reservation.id().value(),
            reservation.date(),
            seating_time().format("%H:%M"),
            reservation.table().id(),
            reservation.table().capacity(),
            reservation.party_size(),
            reservation.customer().name(),
            reservation.customer().contact()
        )
    }
}

impl Renderer for TextRenderer {
    fn render_list(&self, reservations: &[Reservation]) -> Result<String> {
        if reservations.is_empty() {
            return Ok("No upcoming reservations.".to_string());
        }

        let mut lines = vec!["Upcoming reservations:".to_string()];
        lines.extend(
            reservations
                .iter()
                .map(|r| format!("  {}", Self::reservation_line(r))),
        );
        Ok(lines.join("\n"))
    }

    fn render_form(&self, options: &BookOptions) -> Result<String> {
        Ok([
            "Booking request:".to_string(),
            format!("  Name:    {}", options.name),
            format!("  Contact: {}", options.contact),
            format!("  Date:    {}", options.date),
            format!("  Persons: {}", options.persons),
        ]
        .join("\n"))
    }

    fn render_confirmation(&self, result: &ExecutionResult) -> Result<String> {
        let mut lines = Vec::new();
        if let Some(ref reservation) = result.reservation {
            lines.push(format!(
                "Reservation #{} confirmed: {} on {} at {} for {} person(s).",
                reservation.id(),
                reservation.table(),
                reservation.date(),
                seating_time().format("%H:%M"),
                reservation.party_size()
            ));
        } else if let Some(ref table) = result.table {
            lines.push(format!("Dry run: would reserve {table}."));
        } else {
            lines.push("Nothing was booked.".to_string());
        }
        lines.extend(result.warnings.iter().map(|w| format!("Note: {w}")));
        Ok(lines.join("\n"))
    }

    fn render_tables(&self, tables: &[Table]) -> Result<String> {
        if tables.is_empty() {
            return Ok("No tables.".to_string());
        }

        let mut lines = vec!["Tables:".to_string()];
        lines.extend(
            tables
                .iter()
                .map(|t| format!("  #{:<4} {} seats", t.id().value(), t.capacity())),
        );
        Ok(lines.join("\n"))
    }

    fn render_availability(&self, view: &DayAvailability) -> Result<String> {
        let mut lines = vec![format!("Tables on {}:", view.date)];
        for row in AvailabilityRow::rows(view) {
            let holder = row
                .reservation_id
                .map(|id| format!(" (reservation #{id})"))
                .unwrap_or_default();
            lines.push(format!(
                "  #{:<4} {:>2} seats  {}{holder}",
                row.table_id, row.capacity, row.status
            ));
        }
        if view.free.is_empty() {
            lines.push("No table available.".to_string());
        }
        Ok(lines.join("\n"))
    }
}

/// Renderer for JSON output.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_list(&self, reservations: &[Reservation]) -> Result<String> {
        let rows: Vec<ReservationRow> = reservations.iter().map(ReservationRow::from).collect();
        to_json(&rows)
    }

    fn render_form(&self, options: &BookOptions) -> Result<String> {
        to_json(&FormRow::from(options))
    }

    fn render_confirmation(&self, result: &ExecutionResult) -> Result<String> {
        let value = json!({
            "dry_run": result.dry_run,
            "table": result.table,
            "reservation": result.reservation.as_ref().map(ReservationRow::from),
            "warnings": result.warnings,
        });
        to_json(&value)
    }

    fn render_tables(&self, tables: &[Table]) -> Result<String> {
        to_json(tables)
    }

    fn render_availability(&self, view: &DayAvailability) -> Result<String> {
        let value = json!({
            "date": view.date,
            "tables": AvailabilityRow::rows(view),
        });
        to_json(&value)
    }
}

/// Renderer for CSV output with a header row.
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render_list(&self, reservations: &[Reservation]) -> Result<String> {
        to_csv(reservations.iter().map(ReservationRow::from))
    }

    fn render_form(&self, options: &BookOptions) -> Result<String> {
        to_csv([FormRow::from(options)])
    }

    fn render_confirmation(&self, result: &ExecutionResult) -> Result<String> {
        match (&result.reservation, &result.table) {
            (Some(reservation), _) => to_csv([ReservationRow::from(reservation)]),
            (None, Some(table)) => to_csv([table]),
            (None, None) => Ok(String::new()),
        }
    }

    fn render_tables(&self, tables: &[Table]) -> Result<String> {
        to_csv(tables)
    }

    fn render_availability(&self, view: &DayAvailability) -> Result<String> {
        to_csv(AvailabilityRow::rows(view))
    }
}
