//! toucan list command implementation

use serde::Serialize;

use crate::board::{Board, Columns, LoadState, ViewMode};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};
use crate::record::JobRecord;
use crate::render;
use crate::sort::SortDirection;

use super::Context;

/// Options for the list command
pub struct ListOptions {
    pub view: Option<ViewMode>,
    pub sort: Option<SortDirection>,
}

#[derive(Serialize)]
struct ListReport {
    view: ViewMode,
    sort: SortDirection,
    state: LoadState,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<JobRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    columns: Option<Columns>,
}

pub async fn run(context: &Context, options: ListOptions) -> Result<()> {
    let source = context.job_source()?;
    let mut board = Board::from_config(&context.config.board);
    if let Some(view) = options.view {
        board.set_view_mode(view);
    }
    if let Some(sort) = options.sort {
        board.set_sort_direction(sort);
    }

    match board.refresh(&source).await {
        Ok(_) | Err(Error::EmptyCollection) => {}
        Err(err) => return Err(err),
    }

    emit_board(context, "list", &board, None)
}

/// Print the board in its current view mode.
pub(crate) fn emit_board(
    context: &Context,
    command: &str,
    board: &Board,
    warning: Option<&str>,
) -> Result<()> {
    let (rows, columns, lines) = match board.view_mode() {
        ViewMode::Table => (Some(board.rows()), None, render::table_lines(board)),
        ViewMode::Board => (None, Some(board.columns()), render::board_lines(board)),
    };

    let report = ListReport {
        view: board.view_mode(),
        sort: board.sort_direction(),
        state: board.state().clone(),
        count: board.len(),
        rows,
        columns,
    };

    let header = match board.state() {
        LoadState::Empty => format!("toucan {command}: no job data"),
        _ => format!("toucan {command}: {} jobs", board.len()),
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("view", board.view_mode().as_str());
    human.push_summary("sort", board.sort_direction().as_str());
    human.extend_body(lines);
    if let Some(warning) = warning {
        human.push_warning(warning);
    }

    emit_success(context.output, command, &report, Some(&human))
}
