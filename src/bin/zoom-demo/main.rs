#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod cli;
mod constants;
mod ui;

use assets::load_zoom_menu;
use clap::Parser;
use cli::Args;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::sync::mpsc;
use zoom_control::{
    DocumentInfo, DocumentModel, InMemoryDocumentModel, PopupPlacement, SizingMode, TextDirection,
    ZoomAction, ZoomActionEvent, ZoomMenu,
};

/// Main application state for the zoom control demo.
pub struct ZoomDemoApp {
    model: InMemoryDocumentModel,
    zoom: ZoomAction,
    zoom_events: mpsc::Receiver<ZoomActionEvent>,
    /// Entry text being edited; synced from the control when not focused.
    entry_buffer: String,
    popup_placement: Option<PopupPlacement>,
    text_direction: TextDirection,
    activations: usize,
    toasts: Toasts,
}

impl ZoomDemoApp {
    fn new(_cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let menu = match load_zoom_menu() {
            Ok(menu) => menu,
            Err(err) => {
                log::error!("{err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                ZoomMenu::standard()
            }
        };

        let mut model = InMemoryDocumentModel::new(args.dpi).with_max_scale(args.max_scale);
        if !args.no_document {
            model.set_document(Some(DocumentInfo {
                page_count: args.pages,
            }));
        }

        let mut zoom = ZoomAction::new(&mut model, menu);
        let zoom_events = zoom.subscribe();
        let entry_buffer = zoom.text().to_owned();

        log::info!(
            "zoom control ready: dpi {}, max scale {}, {} pages",
            args.dpi,
            args.max_scale,
            args.pages
        );

        Self {
            model,
            zoom,
            zoom_events,
            entry_buffer,
            popup_placement: None,
            text_direction: if args.rtl {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            },
            activations: 0,
            toasts,
        }
    }

    /// Drains activation events from the zoom control.
    fn poll_zoom_events(&mut self) {
        while let Ok(event) = self.zoom_events.try_recv() {
            match event {
                ZoomActionEvent::Activated => {
                    self.activations += 1;
                    log::debug!("zoom entry activated ({} total)", self.activations);
                }
            }
        }
    }

    /// Steps the zoom by one preset level, switching to free sizing.
    fn step_zoom(&mut self, factor: f64) {
        self.model.set_sizing_mode(SizingMode::Free);
        let scale = self.model.scale() * factor;
        self.model.set_scale(scale);
    }

    fn reset_view(&mut self) {
        self.model.set_sizing_mode(SizingMode::FitPage);
    }
}

impl eframe::App for ZoomDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.zoom.poll_model(&self.model);
        self.poll_zoom_events();
        self.handle_keyboard_input(ctx);

        self.show_toolbar(ctx);
        self.show_status_bar(ctx);
        self.show_document(ctx);
        self.show_zoom_popup(ctx);

        self.toasts.show(ctx);
    }
}

impl Drop for ZoomDemoApp {
    fn drop(&mut self) {
        self.zoom.detach(&mut self.model);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Zoom Control",
        options,
        Box::new(move |cc| Ok(Box::new(ZoomDemoApp::new(cc, args)))),
    )
}
