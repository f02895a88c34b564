use crate::AnnotateApp;

pub fn central_panel(app: &mut AnnotateApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some([width, height]) = app.editor().size() else {
            if app.is_loading() {
                ui.centered_and_justified(|ui| ui.spinner());
            } else {
                ui.centered_and_justified(|ui| ui.label("No background image"));
            }
            return;
        };

        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                // One point per canvas pixel
                let size = egui::vec2(width as f32, height as f32);
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

                // Input first so this frame already shows the new strokes.
                // contains_pointer is false under the copy notice and outside the scroll viewport.
                app.handle_canvas_input(ctx, rect, response.contains_pointer());

                if let Some(texture_id) = app.canvas_texture(ctx) {
                    ui.painter().image(
                        texture_id,
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
            });
    });
}
