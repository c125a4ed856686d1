//! UI rendering methods for the zoom control demo.

use crate::ZoomDemoApp;
use crate::constants::{PAGE_MARGIN, PAGE_SIZE_POINTS, POPUP_FRAME_PADDING, ZOOM_STEP};
use eframe::egui;
use zoom_control::{
    DocumentModel, MenuAction, MouseButton, ScreenGeometry, ScreenRect, Size, SizingMode,
};

fn to_screen_rect(rect: egui::Rect) -> ScreenRect {
    ScreenRect::new(
        rect.min.x.round() as i32,
        rect.min.y.round() as i32,
        rect.width().round() as i32,
        rect.height().round() as i32,
    )
}

impl ZoomDemoApp {
    /// Handles keyboard shortcuts for zoom.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (zoom_in, zoom_out, reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
            )
        });

        if zoom_in {
            self.step_zoom(ZOOM_STEP);
        }
        if zoom_out {
            self.step_zoom(1.0 / ZOOM_STEP);
        }
        if reset {
            self.reset_view();
        }
    }

    /// Renders the top toolbar holding the zoom entry and its dropdown icon.
    pub fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(self.zoom.is_sensitive(), |ui| {
                ui.horizontal(|ui| {
                    self.show_zoom_entry(ui);
                });
            });
        });
    }

    fn show_zoom_entry(&mut self, ui: &mut egui::Ui) {
        let char_width = ui.text_style_height(&egui::TextStyle::Body) * 0.6;
        let entry_width = self.zoom.width_chars() as f32 * char_width;

        let entry = ui.add(
            egui::TextEdit::singleline(&mut self.entry_buffer).desired_width(entry_width),
        );
        if entry.changed() {
            self.zoom.set_text(self.entry_buffer.clone());
        }

        if entry.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.zoom.activate_entry(&mut self.model);
            } else {
                self.zoom.focus_out(&self.model);
            }
        }

        let icon = ui.button("▼").on_hover_text("Zoom presets");
        let button = if icon.clicked() {
            Some(MouseButton::Primary)
        } else if icon.secondary_clicked() {
            Some(MouseButton::Secondary)
        } else if icon.middle_clicked() {
            Some(MouseButton::Middle)
        } else {
            None
        };

        if let Some(button) = button {
            let widget_rect = entry.rect.union(icon.rect);
            let geometry = ScreenGeometry {
                widget_rect: to_screen_rect(widget_rect),
                popup_size: Size::new(
                    widget_rect.width().round() as i32,
                    self.popup_height(ui).round() as i32,
                ),
                monitor_work_area: to_screen_rect(ui.ctx().screen_rect()),
                text_direction: self.text_direction,
            };
            if let Some(placement) = self.zoom.icon_press(button, geometry) {
                self.popup_placement = Some(placement);
            }
        }

        if !entry.has_focus() {
            self.entry_buffer.clear();
            self.entry_buffer.push_str(self.zoom.text());
        }
    }

    /// Preferred popup height for the current menu.
    fn popup_height(&self, ui: &egui::Ui) -> f32 {
        let spacing = ui.spacing();
        let row_height = spacing.interact_size.y + spacing.item_spacing.y;
        let rows = self.zoom.menu().items().count() as f32;
        rows * row_height + POPUP_FRAME_PADDING
    }

    /// Renders the zoom popup if one is open.
    pub fn show_zoom_popup(&mut self, ctx: &egui::Context) {
        let (Some(popup), Some(placement)) = (self.zoom.popup(), self.popup_placement) else {
            self.popup_placement = None;
            return;
        };
        let items = popup.items().to_vec();
        let was_shown = self.zoom.is_popup_shown();
        let mut chosen = None;

        let area = egui::Area::new(egui::Id::new("zoom_popup"))
            .fixed_pos(egui::pos2(
                placement.anchor.x as f32,
                placement.anchor.y as f32,
            ))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(placement.size.width as f32);
                    for item in &items {
                        let selected = match item.action {
                            MenuAction::SizingMode(mode) => self.model.sizing_mode() == mode,
                            MenuAction::Zoom(_) => false,
                        };
                        if ui.selectable_label(selected, &item.label).clicked() {
                            chosen = Some(item.action);
                        }
                    }
                });
            });

        if !was_shown {
            self.zoom.popup_shown();
        }

        if let Some(action) = chosen {
            self.zoom.select_menu_item(&mut self.model, action);
            self.popup_placement = None;
        } else if was_shown && area.response.clicked_elsewhere() {
            self.zoom.popup_hidden();
            self.popup_placement = None;
        }
    }

    /// Renders the bottom status bar with the model state.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("+/-: Zoom | 0: Fit page");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Entry activations: {}", self.activations));
                    ui.separator();
                    ui.label(format!(
                        "{:?} | scale {:.3}",
                        self.model.sizing_mode(),
                        self.model.scale()
                    ));
                });
            });
        });
    }

    /// Renders the document view, applying fit modes to the model.
    pub fn show_document(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(document) = self.model.document() else {
                ui.centered_and_justified(|ui| {
                    ui.label("No document.");
                });
                return;
            };

            self.apply_sizing_mode(ui.available_size());

            let scale = self.model.scale() as f32;
            let page_size = egui::vec2(PAGE_SIZE_POINTS[0], PAGE_SIZE_POINTS[1]) * scale;

            egui::ScrollArea::both().show(ui, |ui| {
                for _ in 0..document.page_count {
                    ui.add_space(PAGE_MARGIN);
                    let (rect, _) = ui.allocate_exact_size(page_size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 0.0, egui::Color32::WHITE);
                    ui.painter().rect_stroke(
                        rect,
                        0.0,
                        egui::Stroke::new(1.0, egui::Color32::GRAY),
                        egui::StrokeKind::Inside,
                    );
                }
                ui.add_space(PAGE_MARGIN);
            });
        });
    }

    /// Derives the scale from the viewport for the fit modes.
    fn apply_sizing_mode(&mut self, viewport: egui::Vec2) {
        let available = viewport - egui::vec2(PAGE_MARGIN * 2.0, PAGE_MARGIN * 2.0);
        let fit_width = f64::from(available.x / PAGE_SIZE_POINTS[0]);
        let fit_page = fit_width.min(f64::from(available.y / PAGE_SIZE_POINTS[1]));
        let actual_size = self.model.screen_dpi() / 72.0;

        let scale = match self.model.sizing_mode() {
            SizingMode::FitPage => fit_page,
            SizingMode::FitWidth => fit_width,
            SizingMode::Automatic => fit_width.min(actual_size),
            SizingMode::Free => return,
        };
        if scale > 0.0 {
            self.model.set_scale(scale);
        }
    }
}
