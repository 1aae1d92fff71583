//! Terminal rendering of command results. Everything here writes to a `Write` so the
//! layout can be tested without a terminal.

use colored::Colorize;
use flashnotes::api::{CmdMessage, MessageLevel};
use flashnotes::commands::CmdResult;
use flashnotes::library::{DeckSummary, DisplayCard};
use flashnotes::model::{Face, Mode};
use flashnotes::review::{ReviewCard, ReviewSummary};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 6;

pub fn prompt(mode: &Mode, reviewing: bool) -> String {
    match (mode, reviewing) {
        (_, true) => "review> ".to_string(),
        (Mode::Home, false) => "flashnotes> ".to_string(),
        (Mode::DeckDetail { deck }, false) => format!("{}> ", deck),
    }
}

pub fn render_result(out: &mut impl Write, result: &CmdResult) -> io::Result<()> {
    render_messages(out, &result.messages)?;
    render_cards(out, &result.listed_cards)?;
    render_decks(out, &result.listed_decks)?;
    if let Some(card) = &result.review_card {
        render_review_card(out, card)?;
    }
    if let Some(summary) = &result.review_summary {
        render_summary(out, summary)?;
    }
    if result.show_help {
        render_help(out, &result.help)?;
    }
    Ok(())
}

pub fn render_messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn render_error(out: &mut impl Write, error: &flashnotes::error::FlashnotesError) -> io::Result<()> {
    render_messages(out, &[CmdMessage::error(error.to_string())])
}

fn render_cards(out: &mut impl Write, cards: &[DisplayCard]) -> io::Result<()> {
    for dc in cards {
        let idx = format!("{:>width$}", format!("{}.", dc.index), width = INDEX_WIDTH - 1);
        let text = format!("Q: {} | A: {}", dc.card.question, dc.card.answer);
        let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH);
        writeln!(
            out,
            "{} {}",
            idx.yellow(),
            truncate_to_width(&text, available)
        )?;
    }
    Ok(())
}

fn render_decks(out: &mut impl Write, decks: &[DeckSummary]) -> io::Result<()> {
    let name_width = decks.iter().map(|d| d.name.width()).max().unwrap_or(0);
    for deck in decks {
        let padding = name_width.saturating_sub(deck.name.width());
        let count = match deck.card_count {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        };
        writeln!(
            out,
            "  {}{}  {}",
            deck.name.bold(),
            " ".repeat(padding),
            count.dimmed()
        )?;
    }
    Ok(())
}

fn render_review_card(out: &mut impl Write, card: &ReviewCard) -> io::Result<()> {
    let position = format!("[{}/{}]", card.number, card.total);
    match card.face {
        Face::Question => writeln!(
            out,
            "{} {} {}",
            position.yellow(),
            "Question:".bold(),
            card.card.question
        ),
        Face::Answer => writeln!(
            out,
            "{} {} {}",
            position.yellow(),
            "Answer:".bold(),
            card.card.answer
        ),
    }
}

fn render_summary(out: &mut impl Write, summary: &ReviewSummary) -> io::Result<()> {
    let elapsed = summary
        .ended_at
        .signed_duration_since(summary.started_at)
        .num_seconds()
        .max(0);
    writeln!(
        out,
        "{}",
        format!("Time spent: {}m {:02}s", elapsed / 60, elapsed % 60).dimmed()
    )
}

fn render_help(out: &mut impl Write, usages: &[&str]) -> io::Result<()> {
    for usage in usages {
        writeln!(out)?;
        writeln!(out, "{}", usage)?;
    }
    Ok(())
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
