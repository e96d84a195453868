//! Timetable page parsing.
//!
//! The upstream page is a third-party HTML document with no stability
//! guarantee. Departure rows live in `table#table_main` nested inside
//! `table#table_main_box`. Each row may hold a destination cell (`td.tdEst`)
//! and a time cell (`td.tdEst.tdEstr.tdflecha`). Rows missing either cell are
//! skipped rather than treated as errors, so a page with a different layout
//! parses to an empty board.

use scraper::{ElementRef, Html, Selector};

use crate::domain::{Departures, FetchOutcome};

use super::error::FetchError;

const ROW_SELECTOR: &str = "table#table_main_box table#table_main tr";
const DESTINATION_SELECTOR: &str = "td.tdEst";
const TIME_SELECTOR: &str = "td.tdEst.tdEstr.tdflecha";

/// Left behind in destination text when the upstream double-encodes an
/// empty cell.
const ENCODED_NBSP_MARKER: &str = "nbsp";

/// Compiled selectors for one parse.
struct RowSelectors {
    row: Selector,
    destination: Selector,
    time: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self, FetchError> {
        Ok(Self {
            row: compile(ROW_SELECTOR)?,
            destination: compile(DESTINATION_SELECTOR)?,
            time: compile(TIME_SELECTOR)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, FetchError> {
    Selector::parse(selector)
        .map_err(|e| FetchError::Parse(format!("invalid selector {selector:?}: {e}")))
}

/// Text content of an element, each text node trimmed and concatenated.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().map(str::trim).collect()
}

/// Extract a `(destination, time)` pair from a row, if it holds one.
fn parse_row(row: ElementRef<'_>, selectors: &RowSelectors) -> Option<(String, String)> {
    let destination = cell_text(row.select(&selectors.destination).next()?);
    let time = cell_text(row.select(&selectors.time).next()?);

    if destination.is_empty() || time.is_empty() || destination.contains(ENCODED_NBSP_MARKER) {
        return None;
    }

    Some((destination, time))
}

/// Extract departures from a timetable page.
///
/// Destinations and times keep the order their rows appear in.
pub fn parse_departures(html: &str) -> Result<Departures, FetchError> {
    let selectors = RowSelectors::new()?;
    let document = Html::parse_document(html);

    let mut departures = Departures::new();
    for (destination, time) in document
        .select(&selectors.row)
        .filter_map(|row| parse_row(row, &selectors))
    {
        departures.push(destination, time);
    }

    Ok(departures)
}

/// Parse a timetable page into a board, or `Empty` if it has no departures.
pub fn parse_timetable(html: &str) -> Result<FetchOutcome, FetchError> {
    parse_departures(html).map(FetchOutcome::from_departures)
}
