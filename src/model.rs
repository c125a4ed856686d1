//! The document model the zoom control reads from and writes to.
//!
//! The model is owned by the application. The control never keeps a
//! reference to it; it registers a notification channel on construction and
//! removes it again in [`crate::ZoomAction::detach`].

use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// How the display scale is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizingMode {
    FitPage,
    FitWidth,
    #[default]
    Automatic,
    /// The scale is whatever was last set explicitly.
    Free,
}

/// The parts of an open document the zoom control cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {
    pub page_count: usize,
}

/// A property of the model changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelNotification {
    Document,
    Scale,
    MaxScale,
}

/// Handle returned by [`DocumentModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub trait DocumentModel {
    /// Current display scale, including the screen DPI factor.
    fn scale(&self) -> f64;
    fn set_scale(&mut self, scale: f64);
    fn sizing_mode(&self) -> SizingMode;
    fn set_sizing_mode(&mut self, mode: SizingMode);
    fn max_scale(&self) -> f64;
    fn document(&self) -> Option<DocumentInfo>;
    fn screen_dpi(&self) -> f64;

    /// Registers a channel that receives a notification for every change.
    fn subscribe(&mut self, listener: Sender<ModelNotification>) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Points per inch of document space.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Converts a model scale to the logical zoom shown to the user.
pub fn logical_zoom<M: DocumentModel + ?Sized>(model: &M) -> f64 {
    model.scale() * POINTS_PER_INCH / model.screen_dpi()
}

/// Converts a logical zoom to the model's DPI-corrected scale.
pub fn model_scale<M: DocumentModel + ?Sized>(model: &M, zoom: f64) -> f64 {
    zoom * model.screen_dpi() / POINTS_PER_INCH
}

const DEFAULT_MIN_SCALE: f64 = 0.0;
const DEFAULT_MAX_SCALE: f64 = 64.0;
const DEFAULT_SCREEN_DPI: f64 = 96.0;

/// A self-contained [`DocumentModel`] used by the demo and in tests.
#[derive(Debug)]
pub struct InMemoryDocumentModel {
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    sizing_mode: SizingMode,
    document: Option<DocumentInfo>,
    screen_dpi: f64,
    listeners: Vec<(SubscriptionId, Sender<ModelNotification>)>,
    next_subscription: u64,
}

impl Default for InMemoryDocumentModel {
    fn default() -> Self {
        Self {
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            sizing_mode: SizingMode::default(),
            document: None,
            screen_dpi: DEFAULT_SCREEN_DPI,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }
}

impl InMemoryDocumentModel {
    pub fn new(screen_dpi: f64) -> Self {
        Self {
            screen_dpi,
            ..Default::default()
        }
    }

    /// Builder-style setter for the maximum scale.
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.set_max_scale(max_scale);
        self
    }

    pub fn with_document(mut self, document: DocumentInfo) -> Self {
        self.set_document(Some(document));
        self
    }

    pub fn set_document(&mut self, document: Option<DocumentInfo>) {
        if self.document != document {
            self.document = document;
            self.notify(ModelNotification::Document);
        }
    }

    pub fn set_min_scale(&mut self, min_scale: f64) {
        self.min_scale = min_scale;
    }

    /// Changes the maximum scale, shrinking the current scale if needed.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        if self.max_scale == max_scale {
            return;
        }
        self.max_scale = max_scale;
        if self.scale > max_scale {
            self.set_scale(max_scale);
        }
        self.notify(ModelNotification::MaxScale);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, notification: ModelNotification) {
        // Listeners whose receiver is gone are dropped here.
        self.listeners
            .retain(|(_, listener)| listener.send(notification).is_ok());
    }
}

impl DocumentModel for InMemoryDocumentModel {
    fn scale(&self) -> f64 {
        self.scale
    }

    fn set_scale(&mut self, scale: f64) {
        let min = if self.sizing_mode == SizingMode::Free {
            self.min_scale
        } else {
            0.0
        };
        let scale = scale.max(min).min(self.max_scale);
        if scale == self.scale {
            return;
        }
        self.scale = scale;
        self.notify(ModelNotification::Scale);
    }

    fn sizing_mode(&self) -> SizingMode {
        self.sizing_mode
    }

    fn set_sizing_mode(&mut self, mode: SizingMode) {
        self.sizing_mode = mode;
    }

    fn max_scale(&self) -> f64 {
        self.max_scale
    }

    fn document(&self) -> Option<DocumentInfo> {
        self.document
    }

    fn screen_dpi(&self) -> f64 {
        self.screen_dpi
    }

    fn subscribe(&mut self, listener: Sender<ModelNotification>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_notifies_on_change_only() {
        let mut model = InMemoryDocumentModel::new(96.0);
        let (tx, rx) = mpsc::channel();
        model.subscribe(tx);

        model.set_scale(2.0);
        model.set_scale(2.0);
        model.set_document(Some(DocumentInfo { page_count: 3 }));

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![ModelNotification::Scale, ModelNotification::Document]
        );
    }

    #[test]
    fn test_max_scale_clamps_scale() {
        let mut model = InMemoryDocumentModel::new(96.0);
        model.set_scale(10.0);
        let (tx, rx) = mpsc::channel();
        model.subscribe(tx);

        model.set_max_scale(4.0);
        assert_eq!(model.scale(), 4.0);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![ModelNotification::Scale, ModelNotification::MaxScale]
        );
    }

    #[test]
    fn test_min_scale_applies_in_free_mode() {
        let mut model = InMemoryDocumentModel::new(96.0);
        model.set_min_scale(0.25);
        model.set_scale(0.1);
        assert_eq!(model.scale(), 0.1);

        model.set_sizing_mode(SizingMode::Free);
        model.set_scale(0.05);
        assert_eq!(model.scale(), 0.25);
    }

    #[test]
    fn test_dpi_conversion() {
        let mut model = InMemoryDocumentModel::new(144.0);
        model.set_scale(4.0);
        assert_eq!(logical_zoom(&model), 2.0);
        assert_eq!(model_scale(&model, 0.5), 1.0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut model = InMemoryDocumentModel::default();
        let (tx, rx) = mpsc::channel();
        let id = model.subscribe(tx);
        assert_eq!(model.subscriber_count(), 1);

        model.unsubscribe(id);
        model.set_scale(3.0);
        assert_eq!(model.subscriber_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_pruned() {
        let mut model = InMemoryDocumentModel::default();
        let (tx, rx) = mpsc::channel();
        model.subscribe(tx);
        drop(rx);

        model.set_scale(2.0);
        assert_eq!(model.subscriber_count(), 0);
    }
}
