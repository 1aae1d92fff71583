use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashnotesError, Result, MESSAGE_ILLEGAL_IN_HOME};
use crate::library::{CardFilter, Library};
use crate::model::Mode;
use crate::store::DataStore;

/// Narrow the open deck to cards mentioning any keyword.
pub fn run<S: DataStore>(
    library: &mut Library<S>,
    mode: &Mode,
    keywords: Vec<String>,
) -> Result<CmdResult> {
    let deck = mode
        .open_deck()
        .ok_or(FlashnotesError::IllegalInMode(MESSAGE_ILLEGAL_IN_HOME))?;
    library.set_filter(CardFilter::Keywords {
        deck: deck.to_string(),
        keywords,
    });

    let cards = library.indexed_visible()?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!("{} flashcards listed!", cards.len())))
        .with_listed_cards(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn library() -> Library<InMemoryStore> {
        Library::new(
            StoreFixture::new()
                .with_card("geo", "Capital of France", "Paris")
                .with_card("geo", "Longest river", "Nile")
                .with_card("geo", "Highest peak", "Everest")
                .with_card("trivia", "River through Paris", "Seine")
                .store,
        )
    }

    #[test]
    fn matches_any_keyword_case_insensitively() {
        let mut lib = library();
        let result = run(
            &mut lib,
            &Mode::deck("geo"),
            vec!["RIVER".into(), "paris".into()],
        )
        .unwrap();
        let questions: Vec<_> = result
            .listed_cards
            .iter()
            .map(|c| c.card.question.as_str())
            .collect();
        assert_eq!(questions, vec!["Capital of France", "Longest river"]);
        assert_eq!(result.feedback(), Some("2 flashcards listed!"));
    }

    #[test]
    fn no_match_lists_nothing() {
        let mut lib = library();
        let result = run(&mut lib, &Mode::deck("geo"), vec!["volcano".into()]).unwrap();
        assert!(result.listed_cards.is_empty());
        assert_eq!(result.feedback(), Some("0 flashcards listed!"));
    }

    #[test]
    fn needs_an_open_deck() {
        let mut lib = library();
        assert!(run(&mut lib, &Mode::Home, vec!["x".into()]).is_err());
        assert_eq!(lib.filter(), &CardFilter::All);
    }
}
