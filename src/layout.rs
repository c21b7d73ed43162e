//! Text content of a booking confirmation page.
//!
//! The functions in this module are pure: they turn a [`BookingRecord`] into the ordered list of
//! [`Line`]s that the rendering backends place on the page. Keeping this step free of any PDF types
//! lets the wording be tested without producing documents.

use crate::record::{BookingField, BookingRecord};

/// Placeholder printed for fields missing from the record.
pub const MISSING_VALUE: &str = "N/A";

/// Brand name used in the title and closing lines unless configured otherwise.
pub const DEFAULT_BRAND: &str = "Tourtastic";

/// Currency symbol printed in front of the amount unless configured otherwise.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Horizontal placement of a line within the printable area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
}

/// Role of a line on the confirmation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Centred document title.
    Title,
    /// Blank separator line.
    Spacer,
    /// `"<Label>: <value>"` row for one booking field.
    Field(BookingField),
    /// Thank-you line at the bottom of the page.
    Closing,
}

/// One line of the confirmation page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    text: String,
    alignment: HorizontalAlignment,
}

impl Line {
    fn new(kind: LineKind, text: impl Into<String>, alignment: HorizontalAlignment) -> Self {
        Self {
            kind,
            text: text.into(),
            alignment,
        }
    }

    fn spacer() -> Self {
        Self::new(LineKind::Spacer, String::new(), HorizontalAlignment::Left)
    }

    /// Returns the role of this line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the text printed on this line; empty for spacers.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the horizontal placement of this line.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Returns whether this is a blank separator line.
    pub fn is_spacer(&self) -> bool {
        self.kind == LineKind::Spacer
    }
}

/// Formats a single `"<Label>: <value>"` row.
pub fn format_row(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

/// Returns the title line text for `brand`.
pub fn title_text(brand: &str) -> String {
    format!("{brand} - Booking Confirmation")
}

/// Returns the closing line text for `brand`.
pub fn closing_text(brand: &str) -> String {
    format!("Thank you for booking with {brand}!")
}

fn field_text(record: &BookingRecord, field: BookingField, currency_symbol: &str) -> String {
    let value = record
        .get(field)
        .map(|value| value.as_str())
        .unwrap_or(MISSING_VALUE);

    match field {
        BookingField::Amount => format_row(field.label(), &format!("{currency_symbol}{value}")),
        _ => format_row(field.label(), value),
    }
}

/// Lays out the complete confirmation: title, spacer, the eight field rows, spacer, closing line.
pub fn confirmation_lines(record: &BookingRecord, brand: &str, currency_symbol: &str) -> Vec<Line> {
    let mut lines = Vec::with_capacity(BookingField::ALL.len() + 4);
    lines.push(Line::new(
        LineKind::Title,
        title_text(brand),
        HorizontalAlignment::Center,
    ));
    lines.push(Line::spacer());

    lines.extend(BookingField::ALL.into_iter().map(|field| {
        Line::new(
            LineKind::Field(field),
            field_text(record, field, currency_symbol),
            HorizontalAlignment::Left,
        )
    }));

    lines.push(Line::spacer());
    lines.push(Line::new(
        LineKind::Closing,
        closing_text(brand),
        HorizontalAlignment::Left,
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn full_record_renders_every_row() {
        let record = BookingRecord::new()
            .with_booking_id("BK123")
            .with_customer_name("Jane Doe")
            .with_customer_email("jane@example.com")
            .with_type("flight")
            .with_destination("Paris")
            .with_booking_date("2025-01-01")
            .with_amount(250)
            .with_status("confirmed");

        let lines = confirmation_lines(&record, DEFAULT_BRAND, DEFAULT_CURRENCY_SYMBOL);

        assert_eq!(
            texts(&lines),
            vec![
                "Tourtastic - Booking Confirmation",
                "",
                "Booking ID: BK123",
                "Customer: Jane Doe",
                "Email: jane@example.com",
                "Type: flight",
                "Destination: Paris",
                "Date: 2025-01-01",
                "Amount: $250",
                "Status: confirmed",
                "",
                "Thank you for booking with Tourtastic!",
            ]
        );
        assert_eq!(lines[0].alignment(), HorizontalAlignment::Center);
        assert!(lines[1..]
            .iter()
            .all(|line| line.alignment() == HorizontalAlignment::Left));
    }

    #[test]
    fn missing_fields_use_placeholder() {
        let lines = confirmation_lines(&BookingRecord::new(), DEFAULT_BRAND, DEFAULT_CURRENCY_SYMBOL);
        let rows: Vec<_> = lines
            .iter()
            .filter(|line| matches!(line.kind(), LineKind::Field(_)))
            .collect();

        assert_eq!(rows.len(), BookingField::ALL.len());
        for (line, field) in rows.iter().zip(BookingField::ALL) {
            assert_eq!(line.kind(), LineKind::Field(field));
            assert!(line.text().starts_with(&format!("{}: ", field.label())));
            assert!(line.text().ends_with(MISSING_VALUE), "{}", line.text());
        }
        assert_eq!(rows[6].text(), "Amount: $N/A");
    }

    #[test]
    fn brand_and_currency_are_configurable() {
        let record = BookingRecord::new().with_amount(99.5);
        let lines = confirmation_lines(&record, "Globetrot", "€");

        assert_eq!(lines[0].text(), "Globetrot - Booking Confirmation");
        assert!(texts(&lines).contains(&"Amount: €99.5"));
        assert_eq!(
            lines.last().map(Line::text),
            Some("Thank you for booking with Globetrot!")
        );
    }

    #[test]
    fn spacers_surround_the_field_block() {
        let lines = confirmation_lines(&BookingRecord::new(), DEFAULT_BRAND, DEFAULT_CURRENCY_SYMBOL);
        let spacers: Vec<_> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_spacer())
            .map(|(index, _)| index)
            .collect();

        assert_eq!(spacers, vec![1, 10]);
    }
}
