use std::hash::Hash;

use eframe::egui;

const SLIDE_DISTANCE: f32 = 36.0;
const BASE_SECONDS: f32 = 0.8;
const STAGGER_SECONDS: f32 = 0.12;

/// Fade-and-slide a block in the first time it scrolls into view.
///
/// The latch is one-way: once a block has been seen it stays revealed for the
/// rest of the session. `stagger` lengthens the fade per item so a row of
/// cards ripples in instead of popping as one.
pub fn fade_in<R>(
    ui: &mut egui::Ui,
    id_salt: impl Hash,
    stagger: usize,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let id = ui.id().with(id_salt);

    // The block is "in view" when the spot it is about to occupy pokes past
    // the bottom of the viewport by a little margin.
    let in_view = ui.cursor().min.y < ui.clip_rect().bottom() - 48.0;
    let revealed = ui.ctx().data_mut(|d| {
        let flag = d.get_temp_mut_or::<bool>(id, false);
        *flag |= in_view;
        *flag
    });

    let seconds = BASE_SECONDS + STAGGER_SECONDS * stagger as f32;
    let t = ui.ctx().animate_bool_with_time(id, revealed, seconds);

    if t < 1.0 {
        ui.add_space((1.0 - t) * SLIDE_DISTANCE);
    }

    ui.scope(|ui| {
        ui.set_opacity(t);
        add_contents(ui)
    })
    .inner
}
