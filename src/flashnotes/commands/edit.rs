use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashnotesError, Result};
use crate::library::Library;
use crate::model::Flashcard;
use crate::store::DataStore;

/// Replace the card at `index` of the visible list. Omitted fields keep their value.
pub fn run<S: DataStore>(
    library: &mut Library<S>,
    index: usize,
    question: Option<String>,
    answer: Option<String>,
) -> Result<CmdResult> {
    let target = library
        .visible_card(index)?
        .ok_or(FlashnotesError::InvalidIndex(index))?;

    let edited = Flashcard {
        question: question.unwrap_or_else(|| target.question.clone()),
        answer: answer.unwrap_or_else(|| target.answer.clone()),
        deck: target.deck.clone(),
    };
    library.replace_flashcard(&target, &edited)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Edited Flashcard: Question: {} Answer: {}",
            edited.question, edited.answer
        )))
        .with_listed_cards(library.indexed_visible()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::CardFilter;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn geo() -> Library<InMemoryStore> {
        let mut lib = Library::new(
            StoreFixture::new()
                .with_card("geo", "Capital of France", "Paris")
                .with_card("geo", "Capital of Spain", "Barcelona")
                .store,
        );
        lib.set_filter(CardFilter::Deck("geo".into()));
        lib
    }

    #[test]
    fn edits_answer_and_keeps_question_and_position() {
        let mut lib = geo();
        let result = run(&mut lib, 2, None, Some("Madrid".into())).unwrap();
        let card = &result.listed_cards[1].card;
        assert_eq!(card.question, "Capital of Spain");
        assert_eq!(card.answer, "Madrid");
        assert_eq!(result.listed_cards.len(), 2);
    }

    #[test]
    fn index_follows_the_visible_list() {
        let mut lib = geo();
        lib.set_filter(CardFilter::Keywords {
            deck: "geo".into(),
            keywords: vec!["spain".into()],
        });
        run(&mut lib, 1, Some("Capital of España".into()), None).unwrap();
        lib.set_filter(CardFilter::Deck("geo".into()));
        let cards = lib.visible_collection().unwrap();
        assert_eq!(cards[0].question, "Capital of France");
        assert_eq!(cards[1].question, "Capital of España");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut lib = geo();
        let err = run(&mut lib, 3, Some("x".into()), None).unwrap_err();
        assert!(matches!(err, FlashnotesError::InvalidIndex(3)));
    }

    #[test]
    fn collision_with_another_card_is_rejected() {
        let mut lib = geo();
        let err = run(
            &mut lib,
            2,
            Some("Capital of France".into()),
            Some("Paris".into()),
        )
        .unwrap_err();
        assert!(matches!(err, FlashnotesError::DuplicateFlashcard(_)));
    }

    #[test]
    fn unchanged_edit_is_accepted() {
        let mut lib = geo();
        assert!(run(&mut lib, 1, None, Some("Paris".into())).is_ok());
    }
}
