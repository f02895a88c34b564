use crate::AnnotateApp;

pub fn toolbar_panel(app: &mut AnnotateApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let ready = app.editor().is_ready();

            if ui.button(app.editor().mode_label()).clicked() {
                app.toggle_mode();
            }
            if ui.add_enabled(ready, egui::Button::new("Clear")).clicked() {
                log::info!("Canvas cleared");
                app.clear();
            }
            if ui.add_enabled(ready, egui::Button::new("Download")).clicked() {
                app.download();
            }
            if ui
                .add_enabled(ready, egui::Button::new("Copy to Clipboard"))
                .clicked()
            {
                app.copy_to_clipboard();
            }
            if ui
                .button("Paste")
                .on_hover_text("Use the image on the clipboard as the overlay")
                .clicked()
            {
                app.paste();
            }

            ui.separator();
            ui.weak("Ctrl+V only reaches the app when the clipboard also holds text");
        });
    });

    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match app.editor().size() {
                Some([width, height]) => ui.label(format!("{width} × {height}")),
                None => ui.label("No image"),
            };
            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}
