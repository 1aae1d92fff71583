use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashnotesError, Result};
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>, index: usize) -> Result<CmdResult> {
    let card = library
        .visible_card(index)?
        .ok_or(FlashnotesError::InvalidIndex(index))?;
    library.remove_flashcard(&card)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted Flashcard: Question: {} Answer: {}",
            card.question, card.answer
        )))
        .with_listed_cards(library.indexed_visible()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::CardFilter;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_card_and_renumbers() {
        let mut lib = Library::new(StoreFixture::new().with_cards("math", 3).store);
        lib.set_filter(CardFilter::Deck("math".into()));

        let result = run(&mut lib, 2).unwrap();
        assert_eq!(result.listed_cards.len(), 2);
        assert_eq!(result.listed_cards[1].index, 2);
        assert_eq!(result.listed_cards[1].card.question, "Question 3");
        assert!(result.feedback().unwrap().contains("Question 2"));
    }

    #[test]
    fn index_past_end_is_rejected_and_nothing_changes() {
        let mut lib = Library::new(StoreFixture::new().with_cards("math", 1).store);
        lib.set_filter(CardFilter::Deck("math".into()));
        let err = run(&mut lib, 5).unwrap_err();
        assert!(matches!(err, FlashnotesError::InvalidIndex(5)));
        assert_eq!(lib.visible_count().unwrap(), 1);
    }
}
