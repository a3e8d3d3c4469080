// src/specs/clubs.rs
//
// Club/stadium table from a Wikipedia league article.
//
// Ground truth: the first `<table class="wikitable sortable">`. Its header row
// names the columns; we keep exactly two, club and stadium, whatever else the
// table carries (location, capacity, manager…).
//
// Wikipedia tables routinely use `rowspan` (two clubs sharing a ground) and
// occasionally `colspan`, so rows are expanded into a full grid before the
// projection, the same way a spreadsheet import would see them.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{CLUB_HEADERS, STADIUM_HEADERS, TABLE_SELECTOR};

const MAX_COLSPAN: usize = 1000;
const MAX_ROWSPAN: usize = 65534;
use crate::core::{net, sanitize::clean_cell};
use crate::data::ClubStadiumRecord;
use crate::error::{Error, Result};

/// Where the table lives and which headers name the two columns we keep.
#[derive(Clone, Debug)]
pub struct TableSpec {
    pub selector: &'static str,
    pub club_headers: &'static [&'static str],
    pub stadium_headers: &'static [&'static str],
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            selector: TABLE_SELECTOR,
            club_headers: CLUB_HEADERS,
            stadium_headers: STADIUM_HEADERS,
        }
    }
}

/// Fetch `url` and extract the club/stadium rows.
pub fn fetch(agent: &ureq::Agent, url: &str) -> Result<Vec<ClubStadiumRecord>> {
    let html = net::http_get(agent, url)?;
    let records = parse(&html)?;
    log::info!("Clubs: {} rows from {}", records.len(), url);
    Ok(records)
}

pub fn parse(html: &str) -> Result<Vec<ClubStadiumRecord>> {
    parse_with(html, &TableSpec::default())
}

pub fn parse_with(html: &str, spec: &TableSpec) -> Result<Vec<ClubStadiumRecord>> {
    let doc = Html::parse_document(html);
    let table_sel = selector(spec.selector)?;
    let row_sel = selector("tr")?;

    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| Error::Parse(format!("no table matching `{}`", spec.selector)))?;

    let mut rows = table.select(&row_sel);

    // Header: first row made only of <th>.
    let header = rows
        .by_ref()
        .find(|tr| {
            let cells = cells_of(*tr);
            !cells.is_empty() && cells.iter().all(|c| c.value().name() == "th")
        })
        .ok_or_else(|| Error::Parse(s!("table has no header row")))?;
    let headers = header_texts(header);

    let club_col = find_column(&headers, spec.club_headers)
        .ok_or_else(|| Error::Parse(format!("no club column in headers {headers:?}")))?;
    let stadium_col = find_column(&headers, spec.stadium_headers)
        .ok_or_else(|| Error::Parse(format!("no stadium column in headers {headers:?}")))?;

    let mut grid = GridBuilder::default();
    let mut out = Vec::new();

    for tr in rows {
        let cells = cells_of(tr);
        // Repeated header rows and captions carry no <td>.
        if !cells.iter().any(|c| c.value().name() == "td") {
            continue;
        }
        let row = grid.push_row(&cells);
        let club = row.get(club_col).map(String::as_str).unwrap_or("");
        let stadium = row.get(stadium_col).map(String::as_str).unwrap_or("");
        if club.is_empty() || stadium.is_empty() {
            log::debug!("Clubs: skipping incomplete row {row:?}");
            continue;
        }
        out.push(ClubStadiumRecord::new(club, stadium));
    }

    Ok(out)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("bad selector `{css}`: {e}")))
}

/// Direct <th>/<td> children of a row, in document order.
fn cells_of(tr: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "th" | "td"))
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    clean_cell(&cell.text().collect::<String>())
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    // Browser limits.
    let max = if name == "rowspan" { MAX_ROWSPAN } else { MAX_COLSPAN };
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .map_or(1, |n| n.min(max))
}

fn header_texts(tr: ElementRef<'_>) -> Vec<String> {
    let mut out = Vec::new();
    for cell in cells_of(tr) {
        let text = cell_text(cell);
        for _ in 0..span_attr(cell, "colspan") {
            out.push(text.clone());
        }
    }
    out
}

/// Exact (case-insensitive) header match first, then a prefix match
/// ("Stadium name", "Club (nickname)").
fn find_column(headers: &[String], wanted: &[&str]) -> Option<usize> {
    let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    wanted
        .iter()
        .find_map(|w| lower.iter().position(|h| h == w))
        .or_else(|| wanted.iter().find_map(|w| lower.iter().position(|h| h.starts_with(w))))
}

struct Carry {
    text: String,
    rows_left: usize,
}

/// Expands rowspan/colspan into a rectangular grid, one row at a time.
#[derive(Default)]
struct GridBuilder {
    carry: Vec<Option<Carry>>,
}

impl GridBuilder {
    fn push_row(&mut self, cells: &[ElementRef<'_>]) -> Vec<String> {
        let mut row = Vec::new();
        let mut cells = cells.iter();
        let mut col = 0;

        loop {
            // A cell spanning down from an earlier row occupies this column.
            if let Some(slot) = self.carry.get_mut(col) {
                if let Some(c) = slot.as_mut() {
                    row.push(c.text.clone());
                    c.rows_left -= 1;
                    if c.rows_left == 0 {
                        *slot = None;
                    }
                    col += 1;
                    continue;
                }
            }

            let Some(&cell) = cells.next() else {
                if self.carry.iter().skip(col).any(Option::is_some) {
                    row.push(s!());
                    col += 1;
                    continue;
                }
                break;
            };

            let text = cell_text(cell);
            let rowspan = span_attr(cell, "rowspan");
            for _ in 0..span_attr(cell, "colspan") {
                if rowspan > 1 {
                    if self.carry.len() <= col {
                        self.carry.resize_with(col + 1, || None);
                    }
                    self.carry[col] = Some(Carry { text: text.clone(), rows_left: rowspan - 1 });
                }
                row.push(text.clone());
                col += 1;
            }
        }
        row
    }
}
