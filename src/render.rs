//! Plain-text rendering of the board for the CLI.

use crate::board::{Board, LoadState};
use crate::classify::Column;
use crate::normalize::logo_key;
use crate::record::JobRecord;

const ID_WIDTH: usize = 6;
const COMPANY_WIDTH: usize = 22;
const TITLE_WIDTH: usize = 32;
const STATUS_WIDTH: usize = 16;
const DATE_WIDTH: usize = 10;
const LANE_WIDTH: usize = 30;
const NO_DATE: &str = "-";

/// Rows of the table view, header first.
pub fn table_lines(board: &Board) -> Vec<String> {
    if let Some(lines) = placeholder(board) {
        return lines;
    }

    let mut lines = Vec::with_capacity(board.len() + 2);
    lines.push(format!(
        "{} {} {} {} {} LOGO",
        pad_text("ID", ID_WIDTH),
        pad_text("COMPANY", COMPANY_WIDTH),
        pad_text("TITLE", TITLE_WIDTH),
        pad_text("STATUS", STATUS_WIDTH),
        pad_text("DATE", DATE_WIDTH),
    ));
    for record in board.rows() {
        lines.push(table_row(&record));
    }
    if board.is_empty() {
        lines.push("(no jobs)".to_string());
    }
    lines
}

fn table_row(record: &JobRecord) -> String {
    format!(
        "{} {} {} {} {} {}",
        pad_text(&record.id.to_string(), ID_WIDTH),
        pad_text(&record.company, COMPANY_WIDTH),
        pad_text(&record.title, TITLE_WIDTH),
        pad_text(&record.status, STATUS_WIDTH),
        pad_text(record.date.as_deref().unwrap_or(NO_DATE), DATE_WIDTH),
        logo_key(&record.company).unwrap_or_default(),
    )
    .trim_end()
    .to_string()
}

/// Three lanes side by side.
pub fn board_lines(board: &Board) -> Vec<String> {
    if let Some(lines) = placeholder(board) {
        return lines;
    }

    let columns = board.columns();
    let mut lines = Vec::new();
    lines.push(
        columns
            .iter()
            .map(|(column, records)| {
                pad_text(&format!("{} ({})", lane_title(column), records.len()), LANE_WIDTH)
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string(),
    );
    lines.push(vec!["-".repeat(LANE_WIDTH); Column::ALL.len()].join("-+-"));

    let depth = columns.iter().map(|(_, records)| records.len()).max().unwrap_or(0);
    for row in 0..depth {
        let cells: Vec<String> = columns
            .iter()
            .map(|(_, records)| {
                let text = records.get(row).map(card_text).unwrap_or_default();
                pad_text(&text, LANE_WIDTH)
            })
            .collect();
        lines.push(cells.join(" | ").trim_end().to_string());
    }
    lines
}

fn card_text(record: &JobRecord) -> String {
    let company = if record.company.is_empty() {
        "?"
    } else {
        record.company.as_str()
    };
    format!(
        "#{} {} - {} {}",
        record.id,
        company,
        record.title,
        record.date.as_deref().unwrap_or(NO_DATE)
    )
}

fn lane_title(column: Column) -> &'static str {
    match column {
        Column::Applied => "APPLIED",
        Column::Interview => "INTERVIEW",
        Column::Offer => "OFFER",
    }
}

/// Lines shown instead of data when the board has nothing to display.
fn placeholder(board: &Board) -> Option<Vec<String>> {
    match board.state() {
        LoadState::Loading => Some(vec!["Loading...".to_string()]),
        LoadState::Empty => Some(vec!["No job data available.".to_string()]),
        LoadState::Failed(message) => Some(vec![format!("Could not load job data: {message}")]),
        LoadState::Ready => None,
    }
}

fn pad_text(value: &str, width: usize) -> String {
    let text = truncate_text(value, width);
    format!("{text:width$}")
}

fn truncate_text(value: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max {
        return value.to_string();
    }
    if max <= 3 {
        return chars[..max].iter().collect();
    }
    let mut out: String = chars[..(max - 3)].iter().collect();
    out.push_str("...");
    out
}
