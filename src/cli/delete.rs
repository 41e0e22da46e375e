//! toucan delete command implementation
//!
//! Deletion is gated on `--yes`; without it the command refuses before any
//! request is made.

use serde::Serialize;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};
use crate::record::RecordId;

use super::Context;

/// Options for the delete command
pub struct DeleteOptions {
    pub id: RecordId,
    pub yes: bool,
}

#[derive(Serialize)]
struct DeleteReport {
    id: RecordId,
    deleted: bool,
    remaining: usize,
}

pub async fn run(context: &Context, options: DeleteOptions) -> Result<()> {
    if !options.yes {
        return Err(Error::ConfirmationRequired(options.id));
    }

    let source = context.job_source()?;
    let mut board = Board::from_config(&context.config.board);
    match board.refresh(&source).await {
        Ok(_) => {}
        Err(Error::EmptyCollection) => return Err(Error::RecordNotFound(options.id)),
        Err(err) => return Err(err),
    }

    let confirmation = board.confirm_removal(options.id)?;
    let prompt = confirmation.prompt();
    board.remove(&source, confirmation).await?;

    let report = DeleteReport {
        id: options.id,
        deleted: true,
        remaining: board.len(),
    };
    let mut human = HumanOutput::new(format!("toucan delete: job {} deleted", options.id));
    human.push_summary("confirmed", prompt);
    human.push_summary("remaining", board.len().to_string());

    emit_success(context.output, "delete", &report, Some(&human))
}
