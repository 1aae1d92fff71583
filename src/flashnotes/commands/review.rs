//! Review commands. These only drive the [`ReviewSession`]; whether a review is
//! running as far as the gate is concerned is committed by the interpreter.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::review::{Outcome, ReviewLimit, ReviewSession};
use crate::store::DataStore;

pub fn start<S: DataStore>(library: &Library<S>, session: &mut ReviewSession) -> Result<CmdResult> {
    let visible = library.visible_collection()?;
    let available = visible.len();
    let card = session.start(visible)?;

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Started review of {} of {} flashcards.",
        card.total, available
    )));
    result.review_card = Some(card);
    result.review_progress = session.progress();
    result.enter_review = true;
    Ok(result)
}

pub fn flip(session: &mut ReviewSession) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match session.flip()? {
        Some(card) => result.review_card = Some(card),
        None => result.add_message(CmdMessage::warning("No review in progress.")),
    }
    Ok(result)
}

pub fn score(session: &mut ReviewSession, outcome: Outcome) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(progress) = session.score(outcome)? else {
        result.add_message(CmdMessage::warning("No review in progress."));
        return Ok(result);
    };

    result.add_message(match outcome {
        Outcome::Correct => CmdMessage::success("Marked as correct."),
        Outcome::Wrong => CmdMessage::info("Marked as wrong."),
    });
    if progress.is_exhausted() {
        result.add_message(CmdMessage::success(format!(
            "Review complete! You got {} out of {} correct. Type endreview to leave the review.",
            progress.correct, progress.total
        )));
    } else {
        result.review_card = session.current();
    }
    result.review_progress = Some(progress);
    Ok(result)
}

pub fn end(session: &mut ReviewSession) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match session.end() {
        Some(summary) => {
            let p = summary.progress;
            result.add_message(CmdMessage::success(format!(
                "Review ended. Reviewed {} of {} flashcards: {} correct, {} wrong.",
                p.position, p.total, p.correct, p.wrong
            )));
            result.review_summary = Some(summary);
        }
        None => result.add_message(CmdMessage::info("Review ended.")),
    }
    result.exit_review = true;
    Ok(result)
}

pub fn set_limit(session: &mut ReviewSession, limit: ReviewLimit) -> Result<CmdResult> {
    session.set_limit(limit);
    let message = match limit {
        ReviewLimit::Unlimited => "Review limit removed: reviews cover every card.".to_string(),
        ReviewLimit::Cards(n) => format!("Review limit set to {}.", n),
    };
    let mut result = CmdResult::default().with_message(CmdMessage::success(message));
    result.review_limit = Some(limit);
    Ok(result)
}
