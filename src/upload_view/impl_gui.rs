use crate::config::Config;
use crate::file_source::interface::SelectedFile;
use crate::upload_view::interface::{ButtonState, UploadView, ViewResult, ViewState};
use crate::upload_widget::main::UploadWidget;
use crate::upload_widget::preview::PreviewImage;
use crate::upload_widget::result_view::ResultView;
use eframe::egui;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DROP_ZONE_HEIGHT: f32 = 140.0;
const PREVIEW_MAX_SIZE: f32 = 320.0;
const METER_EASE_SECONDS: f32 = 0.6;

/// Writes the view into a buffer shared with the window.
pub struct UploadViewGui {
    view_state: Arc<Mutex<ViewState>>,
}

impl UploadViewGui {
    pub fn new(view_state: Arc<Mutex<ViewState>>) -> Self {
        Self { view_state }
    }

    fn update(&self, apply: impl FnOnce(&mut ViewState)) -> ViewResult {
        let mut view_state = self.view_state.lock().map_err(|e| e.to_string())?;
        apply(&mut view_state);
        Ok(())
    }
}

impl UploadView for UploadViewGui {
    fn show_file_info(&mut self, file_name: Option<&str>) -> ViewResult {
        self.update(|s| s.file_name = file_name.map(str::to_string))
    }

    fn show_preview(&mut self, preview: Option<&PreviewImage>) -> ViewResult {
        self.update(|s| s.preview = preview.cloned())
    }

    fn show_predict_button(&mut self, state: ButtonState) -> ViewResult {
        self.update(|s| s.predict_button = state)
    }

    fn set_remove_enabled(&mut self, enabled: bool) -> ViewResult {
        self.update(|s| s.remove_enabled = enabled)
    }

    fn show_loader(&mut self, visible: bool) -> ViewResult {
        self.update(|s| s.loading = visible)
    }

    fn show_result(&mut self, result: Option<&ResultView>) -> ViewResult {
        self.update(|s| s.result = result.cloned())
    }

    fn show_error(&mut self, message: Option<&str>) -> ViewResult {
        self.update(|s| s.error = message.map(str::to_string))
    }

    fn set_drag_hover(&mut self, hovering: bool) -> ViewResult {
        self.update(|s| s.drag_hover = hovering)
    }
}

struct PreviewTexture {
    pixels: Arc<[u8]>,
    texture: egui::TextureHandle,
}

/// What the user did during one frame.
#[derive(Debug, Default)]
struct Gestures {
    browse: bool,
    remove: bool,
    submit: bool,
    dismiss_error: bool,
}

struct UploadWindow {
    widget: UploadWidget,
    view_state: Arc<Mutex<ViewState>>,
    preview_texture: Option<PreviewTexture>,
}

impl UploadWindow {
    fn snapshot(&self) -> ViewState {
        self.view_state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.first().cloned(),
            )
        });

        self.widget.set_drag_hover(hovering);

        // Only the first dropped file counts.
        if let Some(file) = dropped {
            if let Some(path) = file.path {
                self.widget.drop_file(path);
            } else if let Some(bytes) = file.bytes {
                self.widget.provide_file(SelectedFile::new(file.name, bytes));
            }
        }
    }

    fn preview_texture(
        &mut self,
        ctx: &egui::Context,
        preview: &PreviewImage,
    ) -> egui::TextureHandle {
        match &self.preview_texture {
            Some(cached) if Arc::ptr_eq(&cached.pixels, &preview.rgba) => cached.texture.clone(),
            _ => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [preview.width as usize, preview.height as usize],
                    &preview.rgba,
                );
                let texture = ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
                self.preview_texture = Some(PreviewTexture {
                    pixels: preview.rgba.clone(),
                    texture: texture.clone(),
                });
                texture
            }
        }
    }

    /// Draws the drop zone and returns where the remove button landed, if shown.
    fn show_drop_zone(
        ui: &mut egui::Ui,
        state: &ViewState,
        gestures: &mut Gestures,
    ) -> Option<egui::Rect> {
        let visuals = if state.drag_hover {
            ui.visuals().widgets.hovered
        } else {
            ui.visuals().widgets.inactive
        };

        let mut remove_rect = None;

        let zone = egui::Frame::group(ui.style())
            .fill(visuals.bg_fill)
            .stroke(if state.drag_hover {
                egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
            } else {
                visuals.bg_stroke
            })
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT));
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    let prompt = if state.drag_hover {
                        "📥 Drop the image here"
                    } else {
                        "📁 Click to browse or drag an image here"
                    };
                    ui.label(egui::RichText::new(prompt).size(16.0));

                    if let Some(name) = &state.file_name {
                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            ui.label(format!("📄 {}", name));
                            let remove = ui.add_enabled(
                                state.remove_enabled,
                                egui::Button::new("✖").small(),
                            );
                            if remove.clicked() {
                                gestures.remove = true;
                            }
                            remove_rect = Some(remove.rect);
                        });
                    }
                });
            });

        // The zone's click area is registered last, so it sits on top of the
        // remove button and receives its clicks too. Where the click landed
        // decides which gesture it was.
        let zone_response = ui.interact(
            zone.response.rect,
            ui.id().with("drop_zone"),
            egui::Sense::click(),
        );

        if zone_response.clicked() {
            let pointer = zone_response
                .interact_pointer_pos()
                .or_else(|| ui.input(|i| i.pointer.interact_pos()));
            let on_remove = matches!(
                (remove_rect, pointer),
                (Some(rect), Some(pos)) if rect.contains(pos)
            );
            if !on_remove && !gestures.remove {
                gestures.browse = true;
            } else if state.remove_enabled {
                gestures.remove = true;
            }
        }

        remove_rect
    }

    fn show_result(ui: &mut egui::Ui, result: &ResultView) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(result.title()).size(28.0).strong());
                ui.label(format!("Confidence: {}", result.confidence_text));
            });

            let shown = ui.ctx().animate_value_with_time(
                egui::Id::new(("confidence_meter", result.id)),
                result.meter_percent,
                METER_EASE_SECONDS,
            );
            ui.add(
                egui::ProgressBar::new(shown / 100.0)
                    .text(format!("{:.0}%", shown)),
            );
        });
    }

    fn show_error_banner(ui: &mut egui::Ui, message: &str, gestures: &mut Gestures) {
        egui::Frame::none()
            .fill(ui.visuals().error_fg_color.gamma_multiply(0.2))
            .stroke(egui::Stroke::new(1.0, ui.visuals().error_fg_color))
            .rounding(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("⚠️ {}", message))
                            .color(ui.visuals().error_fg_color),
                    );
                    if ui.small_button("✖").clicked() {
                        gestures.dismiss_error = true;
                    }
                });
            });
    }
}

impl eframe::App for UploadWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.process_pending();
        self.handle_file_drops(ctx);

        // Cloned so the lock is free again before any gesture re-renders.
        let state = self.snapshot();
        let mut gestures = Gestures::default();

        let preview = state
            .preview
            .as_ref()
            .map(|preview| self.preview_texture(ctx, preview));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("🐾 Animal Classifier");
            });
            ui.add_space(12.0);

            Self::show_drop_zone(ui, &state, &mut gestures);

            if let Some(texture) = &preview {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                            .max_size(egui::vec2(PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE)),
                    );
                });
            }

            if state.predict_button != ButtonState::Hidden {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        let enabled = state.predict_button == ButtonState::Enabled;
                        let button = egui::Button::new(egui::RichText::new("🔍 Predict").size(16.0));
                        if ui.add_enabled(enabled, button).clicked() {
                            gestures.submit = true;
                        }
                        if state.loading {
                            ui.spinner();
                            ui.label("Analyzing...");
                        }
                    });
                });
            }

            if let Some(result) = &state.result {
                ui.add_space(12.0);
                Self::show_result(ui, result);
            }

            if let Some(message) = &state.error {
                ui.add_space(12.0);
                Self::show_error_banner(ui, message, &mut gestures);
            }
        });

        if gestures.remove {
            self.widget.clear();
        } else if gestures.browse {
            self.widget.browse();
        }
        if gestures.submit {
            self.widget.submit();
        }
        if gestures.dismiss_error {
            self.widget.dismiss_error();
        }

        // Worker results arrive on a channel; keep polling for them.
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

pub fn run_window(
    config: &Config,
    widget: UploadWidget,
    view_state: Arc<Mutex<ViewState>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let window = UploadWindow {
        widget,
        view_state,
        preview_texture: None,
    };

    eframe::run_native(
        "Animal Classifier",
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
