use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>) -> Result<CmdResult> {
    library.clear()?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(
            "All decks and flashcards have been cleared!",
        ))
        .with_listed_decks(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_everything() {
        let mut lib = Library::new(
            StoreFixture::new()
                .with_cards("a", 2)
                .with_cards("b", 1)
                .store,
        );
        run(&mut lib).unwrap();
        assert!(lib.deck_summaries().unwrap().is_empty());
        assert_eq!(lib.visible_count().unwrap(), 0);
    }

    #[test]
    fn clearing_nothing_is_fine() {
        let mut lib = Library::new(StoreFixture::new().store);
        assert!(run(&mut lib).is_ok());
    }
}
