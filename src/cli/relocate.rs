//! toucan move command implementation
//!
//! Moves are optimistic and local: the board is fetched, the move is applied
//! in memory and the resulting board is printed. Nothing is sent back.

use crate::board::Board;
use crate::classify::Column;
use crate::error::{Error, Result};
use crate::record::RecordId;

use super::list::emit_board;
use super::Context;

/// Options for the move command
pub struct MoveOptions {
    pub id: RecordId,
    pub column: Column,
}

pub async fn run(context: &Context, options: MoveOptions) -> Result<()> {
    let source = context.job_source()?;
    let mut board = Board::from_config(&context.config.board);
    match board.refresh(&source).await {
        Ok(_) => {}
        Err(Error::EmptyCollection) => return Err(Error::RecordNotFound(options.id)),
        Err(err) => return Err(err),
    }

    let outcome = board.move_record(options.id, options.column)?;
    let warning = if outcome.changed {
        format!(
            "job {} moved to {} locally; the job service was not updated",
            options.id, options.column
        )
    } else {
        format!("job {} is already in {}", options.id, options.column)
    };

    emit_board(context, "move", &board, Some(&warning))
}
