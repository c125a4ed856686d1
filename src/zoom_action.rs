//! The zoom control: an entry showing the current zoom with a dropdown of
//! sizing modes and preset zoom levels.
//!
//! [`ZoomAction`] holds the control's state and reacts to the events a host
//! toolkit forwards to it. It does not draw anything; the host renders
//! [`ZoomAction::text`] in an entry and the items of [`ZoomAction::popup`] in
//! a menu placed at the anchor returned by [`ZoomAction::icon_press`].

use crate::format::{format_zoom_level, parse_zoom_level};
use crate::menu::{MenuAction, MenuItem, ZoomMenu};
use crate::model::{
    DocumentModel, ModelNotification, SizingMode, SubscriptionId, logical_zoom, model_scale,
};
use crate::popup::{PopupAnchor, ScreenGeometry, Size, compute_anchor};
use std::sync::mpsc::{self, Receiver, Sender};

/// Events emitted by the zoom control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomActionEvent {
    /// The entry was submitted, whether or not its text was accepted.
    Activated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// A popup built from the zoom menu.
///
/// The popup is a snapshot: it is destroyed whenever the menu it was built
/// from changes and rebuilt on the next icon press.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    items: Vec<MenuItem>,
    width_request: Option<i32>,
}

impl Popup {
    fn new(menu: &ZoomMenu) -> Self {
        Self {
            items: menu.items().cloned().collect(),
            width_request: None,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn width_request(&self) -> Option<i32> {
        self.width_request
    }
}

/// Where and how large the popup should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupPlacement {
    pub anchor: PopupAnchor,
    pub size: Size,
}

pub struct ZoomAction {
    text: String,
    sensitive: bool,
    width_chars: usize,
    menu: ZoomMenu,
    popup: Option<Popup>,
    popup_shown: bool,
    subscription: Option<SubscriptionId>,
    notifications: Receiver<ModelNotification>,
    listeners: Vec<Sender<ZoomActionEvent>>,
}

impl ZoomAction {
    /// Creates the control and subscribes it to `model`.
    ///
    /// The control must be [detached](Self::detach) from the model before it
    /// is dropped.
    pub fn new<M: DocumentModel + ?Sized>(model: &mut M, mut menu: ZoomMenu) -> Self {
        menu.populate_free_zoom(model.max_scale());
        let width_chars = menu.entry_width_chars();

        let (tx, notifications) = mpsc::channel();
        let subscription = model.subscribe(tx);

        let mut action = Self {
            text: String::new(),
            sensitive: true,
            width_chars,
            menu,
            popup: None,
            popup_shown: false,
            subscription: Some(subscription),
            notifications,
            listeners: Vec::new(),
        };

        if model.document().is_some() {
            action.update_zoom_level(model);
        } else {
            action.set_zoom_level(1.0);
            action.sensitive = false;
        }

        action
    }

    /// Text currently shown in the entry.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the entry text, as the user typing into it would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the control accepts input. False without a document with pages.
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Requested entry width, in characters.
    pub fn width_chars(&self) -> usize {
        self.width_chars
    }

    pub fn menu(&self) -> &ZoomMenu {
        &self.menu
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn is_popup_shown(&self) -> bool {
        self.popup_shown
    }

    /// Registers a listener for [`ZoomActionEvent`]s.
    pub fn subscribe(&mut self) -> Receiver<ZoomActionEvent> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Handles pending model notifications. Call once per frame.
    pub fn poll_model<M: DocumentModel + ?Sized>(&mut self, model: &M) {
        while let Ok(notification) = self.notifications.try_recv() {
            match notification {
                ModelNotification::Document => self.document_changed(model),
                ModelNotification::Scale => self.update_zoom_level(model),
                ModelNotification::MaxScale => self.max_scale_changed(model),
            }
        }
    }

    /// The user pressed Enter in the entry.
    ///
    /// Valid text switches the model to free sizing at the entered zoom.
    /// Anything else reverts the entry. Listeners are notified either way.
    pub fn activate_entry<M: DocumentModel + ?Sized>(&mut self, model: &mut M) {
        match parse_zoom_level(&self.text) {
            Ok(zoom) => {
                log::debug!("zoom entry submitted: {zoom}");
                model.set_sizing_mode(SizingMode::Free);
                let scale = model_scale(model, zoom);
                model.set_scale(scale);
                // The model may clamp the scale without notifying.
                self.update_zoom_level(model);
            }
            Err(err) => {
                log::debug!("reverting zoom entry {:?}: {err}", self.text);
                self.update_zoom_level(model);
            }
        }
        self.emit(ZoomActionEvent::Activated);
    }

    /// The entry lost keyboard focus; discard any unsubmitted edit.
    pub fn focus_out<M: DocumentModel + ?Sized>(&mut self, model: &M) {
        self.update_zoom_level(model);
    }

    /// The dropdown icon was pressed.
    ///
    /// Builds the popup if needed and returns where to show it. The popup is
    /// at least as wide as the widget. Only the primary button opens the popup.
    pub fn icon_press(
        &mut self,
        button: MouseButton,
        geometry: ScreenGeometry,
    ) -> Option<PopupPlacement> {
        if button != MouseButton::Primary {
            return None;
        }

        let menu = &self.menu;
        let popup = self.popup.get_or_insert_with(|| {
            log::debug!("creating zoom popup");
            Popup::new(menu)
        });
        popup.width_request = Some(geometry.widget_rect.width);

        let size = Size::new(
            geometry.popup_size.width.max(geometry.widget_rect.width),
            geometry.popup_size.height,
        );
        let anchor = compute_anchor(&ScreenGeometry {
            popup_size: size,
            ..geometry
        });

        Some(PopupPlacement { anchor, size })
    }

    /// The host made the popup visible.
    pub fn popup_shown(&mut self) {
        if self.popup.is_some() {
            self.popup_shown = true;
        }
    }

    /// The host hid the popup.
    pub fn popup_hidden(&mut self) {
        self.popup_shown = false;
    }

    /// Applies a chosen popup item to the model and hides the popup.
    pub fn select_menu_item<M: DocumentModel + ?Sized>(
        &mut self,
        model: &mut M,
        action: MenuAction,
    ) {
        match action {
            MenuAction::SizingMode(mode) => model.set_sizing_mode(mode),
            MenuAction::Zoom(zoom) => {
                model.set_sizing_mode(SizingMode::Free);
                let scale = model_scale(model, zoom);
                model.set_scale(scale);
            }
        }
        self.popup_hidden();
    }

    /// Destroys the popup. It is rebuilt on the next icon press.
    pub fn destroy_popup(&mut self) {
        if self.popup.take().is_some() {
            log::debug!("destroying zoom popup");
        }
        self.popup_shown = false;
    }

    /// Unsubscribes from the model and tears down the popup.
    pub fn detach<M: DocumentModel + ?Sized>(&mut self, model: &mut M) {
        if let Some(id) = self.subscription.take() {
            model.unsubscribe(id);
        }
        self.destroy_popup();
        self.listeners.clear();
    }

    fn set_zoom_level(&mut self, zoom: f64) {
        self.text = format_zoom_level(zoom);
    }

    fn update_zoom_level<M: DocumentModel + ?Sized>(&mut self, model: &M) {
        self.set_zoom_level(logical_zoom(model));
    }

    fn document_changed<M: DocumentModel + ?Sized>(&mut self, model: &M) {
        let Some(document) = model.document() else {
            self.sensitive = false;
            return;
        };
        self.sensitive = document.page_count > 0;
        self.update_zoom_level(model);
    }

    fn max_scale_changed<M: DocumentModel + ?Sized>(&mut self, model: &M) {
        self.destroy_popup();
        self.menu.populate_free_zoom(model.max_scale());
        log::info!("zoom menu rebuilt for max scale {}", model.max_scale());
    }

    fn emit(&mut self, event: ZoomActionEvent) {
        self.listeners.retain(|listener| listener.send(event).is_ok());
    }
}

impl Drop for ZoomAction {
    fn drop(&mut self) {
        if self.subscription.is_some() {
            log::warn!("zoom control dropped while still subscribed to its document model");
        }
    }
}
