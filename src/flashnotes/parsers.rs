//! Argument grammars for the command words that take arguments.
//!
//! Each parser receives the argument string exactly as the tokenizer left it (leading
//! whitespace included) and either builds a [`Command`] or fails with
//! `ArgumentParse` carrying that command's usage text.

use crate::commands::Command;
use crate::decks::validate_deck_name;
use crate::error::{FlashnotesError, Result, MESSAGE_INVALID_COMMAND_FORMAT};
use crate::registry::usage;
use crate::review::ReviewLimit;

pub const PREFIX_QUESTION: &str = "q/";
pub const PREFIX_ANSWER: &str = "a/";

/// Values found for each prefix, plus the text before the first prefix.
#[derive(Debug, Default, PartialEq, Eq)]
struct PrefixArgs {
    preamble: String,
    question: Option<String>,
    answer: Option<String>,
}

/// Split `args` on `q/` and `a/` prefixes. A prefix counts only at the start of the
/// string or right after whitespace; a repeated prefix keeps its last value.
fn tokenize_prefixes(args: &str) -> PrefixArgs {
    let mut marks: Vec<(usize, &str)> = Vec::new();
    let mut prev_is_space = true;
    for (i, ch) in args.char_indices() {
        if prev_is_space {
            for prefix in [PREFIX_QUESTION, PREFIX_ANSWER] {
                if args[i..].starts_with(prefix) {
                    marks.push((i, prefix));
                }
            }
        }
        prev_is_space = ch.is_whitespace();
    }

    let mut out = PrefixArgs {
        preamble: args[..marks.first().map_or(args.len(), |m| m.0)]
            .trim()
            .to_string(),
        ..PrefixArgs::default()
    };
    for (n, &(start, prefix)) in marks.iter().enumerate() {
        let end = marks.get(n + 1).map_or(args.len(), |m| m.0);
        let value = args[start + prefix.len()..end].trim().to_string();
        match prefix {
            PREFIX_QUESTION => out.question = Some(value),
            _ => out.answer = Some(value),
        }
    }
    out
}

fn invalid(word: &str) -> FlashnotesError {
    FlashnotesError::parse(MESSAGE_INVALID_COMMAND_FORMAT, usage(word))
}

fn non_blank(value: Option<String>, word: &str, field: &str) -> Result<Option<String>> {
    match value {
        Some(v) if v.is_empty() => Err(FlashnotesError::parse(
            format!("The {} cannot be blank.", field),
            usage(word),
        )),
        other => Ok(other),
    }
}

fn parse_index(raw: &str, word: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FlashnotesError::parse(
            "The index must be a positive integer.",
            usage(word),
        )),
    }
}

pub fn parse_add(args: &str, deck: Option<&str>) -> Result<Command> {
    let parsed = tokenize_prefixes(args);
    if !parsed.preamble.is_empty() {
        return Err(invalid("add"));
    }
    let question = non_blank(parsed.question, "add", "question")?;
    let answer = non_blank(parsed.answer, "add", "answer")?;
    let (Some(question), Some(answer), Some(deck)) = (question, answer, deck) else {
        return Err(invalid("add"));
    };
    Ok(Command::Add {
        question,
        answer,
        deck: deck.to_string(),
    })
}

pub fn parse_edit(args: &str, _deck: Option<&str>) -> Result<Command> {
    let parsed = tokenize_prefixes(args);
    if parsed.preamble.is_empty() {
        return Err(invalid("edit"));
    }
    let index = parse_index(&parsed.preamble, "edit")?;
    let question = non_blank(parsed.question, "edit", "question")?;
    let answer = non_blank(parsed.answer, "edit", "answer")?;
    if question.is_none() && answer.is_none() {
        return Err(FlashnotesError::parse(
            "At least one field to edit must be provided.",
            usage("edit"),
        ));
    }
    Ok(Command::Edit {
        index,
        question,
        answer,
    })
}

pub fn parse_delete(args: &str, _deck: Option<&str>) -> Result<Command> {
    let raw = args.trim();
    if raw.is_empty() {
        return Err(invalid("delete"));
    }
    Ok(Command::Delete {
        index: parse_index(raw, "delete")?,
    })
}

pub fn parse_find(args: &str, _deck: Option<&str>) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid("find"));
    }
    Ok(Command::Find { keywords })
}

fn parse_deck_name(args: &str, word: &str) -> Result<String> {
    let name = args.trim();
    if name.is_empty() {
        return Err(invalid(word));
    }
    validate_deck_name(name)
        .map_err(|e| FlashnotesError::parse(format!("Invalid deck name: {}", e), usage(word)))?;
    Ok(name.to_string())
}

pub fn parse_add_deck(args: &str, _deck: Option<&str>) -> Result<Command> {
    Ok(Command::AddDeck {
        name: parse_deck_name(args, "adddeck")?,
    })
}

pub fn parse_delete_deck(args: &str, _deck: Option<&str>) -> Result<Command> {
    Ok(Command::DeleteDeck {
        name: parse_deck_name(args, "deletedeck")?,
    })
}

pub fn parse_enter_deck(args: &str, _deck: Option<&str>) -> Result<Command> {
    Ok(Command::EnterDeck {
        name: parse_deck_name(args, "enterdeck")?,
    })
}

pub fn parse_review_limit(args: &str, _deck: Option<&str>) -> Result<Command> {
    let raw = args.trim();
    if raw.is_empty() {
        return Err(invalid("setreviewlimit"));
    }
    if raw.eq_ignore_ascii_case("all") {
        return Ok(Command::SetReviewLimit {
            limit: ReviewLimit::Unlimited,
        });
    }
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Command::SetReviewLimit {
            limit: ReviewLimit::from_option(Some(n)),
        }),
        _ => Err(FlashnotesError::parse(
            "The review limit must be a positive integer or 'all'.",
            usage("setreviewlimit"),
        )),
    }
}
