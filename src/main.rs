use eframe::egui;
use hamperly::{
    catalog::Catalog,
    gui::HamperApp,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load_built_in()?;
    println!("[catalog] {} hampers ready", catalog.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hamperly - Exquisite Gift Hampers")
            .with_inner_size([1240.0, 900.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "hamperly",
        options,
        Box::new(|cc| Ok(Box::new(HamperApp::new(cc, catalog)))),
    )?;

    Ok(())
}
