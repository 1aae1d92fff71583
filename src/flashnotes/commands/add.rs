use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::{CardFilter, Library};
use crate::model::Flashcard;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    library: &mut Library<S>,
    question: String,
    answer: String,
    deck: String,
) -> Result<CmdResult> {
    let card = Flashcard::new(question, answer, deck);
    library.add_flashcard(&card)?;
    // A narrowed `find` view would hide the new card
    library.set_filter(CardFilter::Deck(card.deck.clone()));

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New flashcard added: Question: {} Answer: {}",
            card.question, card.answer
        )))
        .with_listed_cards(library.indexed_visible()?))
}
