//! Zoom level control for a document viewer.
//!
//! The library holds everything that does not depend on a UI toolkit: the
//! preset table, percentage formatting and parsing, popup placement, the
//! declarative zoom menu and the [`ZoomAction`] state machine that ties them
//! to a [`DocumentModel`].

pub mod format;
pub mod menu;
pub mod model;
pub mod popup;
pub mod presets;
pub mod zoom_action;

pub use format::{ParseError, format_zoom_level, parse_zoom_level};
pub use menu::{MenuAction, MenuItem, MenuLoadError, MenuSection, ZoomMenu, free_zoom_items};
pub use model::{
    DocumentInfo, DocumentModel, InMemoryDocumentModel, ModelNotification, SizingMode,
    SubscriptionId,
};
pub use popup::{PopupAnchor, ScreenGeometry, ScreenRect, Size, TextDirection, compute_anchor};
pub use presets::{EPSILON, ZOOM_PRESETS, ZoomPreset};
pub use zoom_action::{MouseButton, Popup, PopupPlacement, ZoomAction, ZoomActionEvent};
