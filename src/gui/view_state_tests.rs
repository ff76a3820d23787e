#[cfg(test)]
mod tests {
    use crate::{
        catalog::Catalog,
        gui::view_state::{
            ViewEvent,
            ViewState,
        },
    };

    fn catalog() -> Catalog {
        Catalog::load_built_in().expect("embedded catalog should parse")
    }

    #[test]
    fn starts_closed() {
        let state = ViewState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn open_resets_cursor_and_quantity() {
        let catalog = catalog();
        let state = ViewState::closed()
            .apply(&catalog, ViewEvent::OpenDetail(1))
            .apply(&catalog, ViewEvent::SelectImage(2))
            .apply(&catalog, ViewEvent::IncrementQuantity)
            .apply(&catalog, ViewEvent::OpenDetail(2));

        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.active_image(), 0);
        assert_eq!(state.quantity(), 1);
    }

    #[test]
    fn close_clears_selection() {
        let catalog = catalog();
        let state = ViewState::closed()
            .apply(&catalog, ViewEvent::OpenDetail(1))
            .apply(&catalog, ViewEvent::CloseDetail);

        assert!(!state.is_open());
    }

    #[test]
    fn decrement_floors_at_one() {
        let catalog = catalog();
        let state = ViewState::closed()
            .apply(&catalog, ViewEvent::OpenDetail(1))
            .apply(&catalog, ViewEvent::DecrementQuantity);

        assert_eq!(state.quantity(), 1);

        let state = state.apply(&catalog, ViewEvent::DecrementQuantity);
        assert_eq!(state.quantity(), 1, "floor is idempotent");
    }

    #[test]
    fn increment_then_decrement_is_identity_above_floor() {
        let catalog = catalog();
        let mut state = ViewState::closed().apply(&catalog, ViewEvent::OpenDetail(1));
        for _ in 0..4 {
            state = state.apply(&catalog, ViewEvent::IncrementQuantity);
        }
        let before = state.quantity();

        let state = state
            .apply(&catalog, ViewEvent::IncrementQuantity)
            .apply(&catalog, ViewEvent::DecrementQuantity);
        assert_eq!(state.quantity(), before);
    }

    #[test]
    fn select_image_moves_the_cursor_exactly() {
        let catalog = catalog();
        let gallery_len = catalog.get(1).unwrap().gallery.len();
        assert!(gallery_len >= 1);

        let mut state = ViewState::closed().apply(&catalog, ViewEvent::OpenDetail(1));
        for index in 0..gallery_len {
            state = state.apply(&catalog, ViewEvent::SelectImage(index));
            assert_eq!(state.active_image(), index);
        }
    }

    #[test]
    fn reopening_a_different_record_carries_nothing_over() {
        let catalog = catalog();
        let state = ViewState::closed()
            .apply(&catalog, ViewEvent::OpenDetail(1))
            .apply(&catalog, ViewEvent::SelectImage(3))
            .apply(&catalog, ViewEvent::IncrementQuantity)
            .apply(&catalog, ViewEvent::IncrementQuantity)
            .apply(&catalog, ViewEvent::CloseDetail)
            .apply(&catalog, ViewEvent::OpenDetail(2));

        assert_eq!(state.active_image(), 0);
        assert_eq!(state.quantity(), 1);
    }

    #[test]
    fn image_and_quantity_events_are_ignored_while_closed() {
        let catalog = catalog();
        let closed = ViewState::closed();

        assert_eq!(closed.apply(&catalog, ViewEvent::IncrementQuantity), closed);
        assert_eq!(closed.apply(&catalog, ViewEvent::DecrementQuantity), closed);
        assert_eq!(closed.apply(&catalog, ViewEvent::SelectImage(0)), closed);
    }

    // The walkthrough from the interaction contract: open record 1 (four
    // gallery images), pick the third image, bump quantity twice, close and
    // reopen, and everything is back at its defaults.
    #[test]
    fn quick_view_walkthrough() {
        let catalog = catalog();
        let record = catalog.get(1).expect("record 1 exists");
        assert_eq!(record.gallery.len(), 4);

        let state = ViewState::closed().apply(&catalog, ViewEvent::OpenDetail(1));
        assert_eq!(state.active_image(), 0);

        let state = state.apply(&catalog, ViewEvent::SelectImage(2));
        assert_eq!(record.gallery[state.active_image()], record.gallery[2]);

        let state = state
            .apply(&catalog, ViewEvent::IncrementQuantity)
            .apply(&catalog, ViewEvent::IncrementQuantity);
        assert_eq!(state.quantity(), 3);

        let state = state
            .apply(&catalog, ViewEvent::CloseDetail)
            .apply(&catalog, ViewEvent::OpenDetail(1));
        assert_eq!(state.active_image(), 0);
        assert_eq!(state.quantity(), 1);
    }
}
