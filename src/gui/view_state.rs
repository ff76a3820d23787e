use crate::catalog::Catalog;

/// Everything the detail overlay needs to know about itself: which record is
/// open, which gallery image is front, and the pending quantity. One value of
/// this lives on the app; nothing else may mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected: Option<u32>,
    active_image: usize,
    quantity: u32,
}

/// User-driven transitions against [`ViewState`]. The widgets only ever emit
/// events with inputs they generated themselves (a clicked thumbnail's index,
/// a clicked card's id), so events carry no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    OpenDetail(u32),
    CloseDetail,
    SelectImage(usize),
    IncrementQuantity,
    DecrementQuantity,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::closed()
    }
}

impl ViewState {
    pub fn closed() -> Self {
        Self { selected: None, active_image: 0, quantity: 1 }
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn active_image(&self) -> usize {
        self.active_image
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Pure transition: the current state plus one event yields the next
    /// state. Opening always starts the gallery at image 0 with quantity 1,
    /// whatever was open before. Quantity never drops below 1. Image and
    /// quantity events are meaningless while closed and leave the state
    /// untouched.
    pub fn apply(&self, catalog: &Catalog, event: ViewEvent) -> Self {
        match event {
            ViewEvent::OpenDetail(id) => {
                debug_assert!(catalog.get(id).is_some(), "opened unknown hamper id {id}");
                Self { selected: Some(id), active_image: 0, quantity: 1 }
            }
            ViewEvent::CloseDetail => Self::closed(),
            ViewEvent::SelectImage(index) => {
                let Some(id) = self.selected else {
                    return self.clone();
                };
                if let Some(hamper) = catalog.get(id) {
                    debug_assert!(
                        index < hamper.gallery.len(),
                        "image index {index} out of range for '{}'",
                        hamper.name
                    );
                }
                Self { active_image: index, ..self.clone() }
            }
            ViewEvent::IncrementQuantity => {
                if self.selected.is_none() {
                    return self.clone();
                }
                Self { quantity: self.quantity.saturating_add(1), ..self.clone() }
            }
            ViewEvent::DecrementQuantity => {
                if self.selected.is_none() {
                    return self.clone();
                }
                Self { quantity: self.quantity.saturating_sub(1).max(1), ..self.clone() }
            }
        }
    }
}
