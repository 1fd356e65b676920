use platform_host::{DocumentKind, GeneratedDocument};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// Identity key of an open window. Stable for the window's lifetime and unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// DOM id of the element that receives keyboard focus when `window_id` is focused.
pub fn window_primary_input_dom_id(window_id: &WindowId) -> String {
    format!("window-primary-input-{}", window_id.0)
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Window content kinds the shell knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppKind {
    WordDocument,
    PdfViewer,
    PresentationViewer,
    SpreadsheetEditor,
    DocumentGenerator,
    Account,
}

impl AppKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::WordDocument => "Documents",
            Self::PdfViewer => "PDF Viewer",
            Self::PresentationViewer => "Presentations",
            Self::SpreadsheetEditor => "Spreadsheets",
            Self::DocumentGenerator => "AI Generator",
            Self::Account => "Account",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::WordDocument => "📝",
            Self::PdfViewer => "📕",
            Self::PresentationViewer => "📊",
            Self::SpreadsheetEditor => "📈",
            Self::DocumentGenerator => "✨",
            Self::Account => "👤",
        }
    }

    /// Viewer/editor that renders generated documents of `kind`.
    pub fn for_document(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Pdf => Self::PdfViewer,
            DocumentKind::Ppt => Self::PresentationViewer,
            DocumentKind::Sheet => Self::SpreadsheetEditor,
        }
    }
}

/// Content blob handed to a document embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentBlob {
    Empty,
    Text(String),
    Generated(GeneratedDocument),
}

/// File handed to a document viewer/editor window. The embed owns its editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub file_id: String,
    pub file_name: String,
    pub blob: DocumentBlob,
}

/// Typed reference to what a window hosts, resolved to a view by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowContent {
    pub kind: AppKind,
    pub document: Option<DocumentRef>,
}

impl WindowContent {
    pub fn app(kind: AppKind) -> Self {
        Self {
            kind,
            document: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

/// Full browser viewport in logical pixels, taskbar included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub content: WindowContent,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub position: Point,
    pub size: Size,
    pub z_index: u32,
}

/// Session-wide desktop state. Empty and locked at cold start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsState {
    pub is_locked: bool,
    pub is_dark_mode: bool,
    pub windows: Vec<WindowRecord>,
    pub current_time_ms: u64,
}

impl Default for OsState {
    fn default() -> Self {
        Self {
            is_locked: true,
            is_dark_mode: false,
            windows: Vec::new(),
            current_time_ms: 0,
        }
    }
}

impl OsState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    /// Highest z-index in use, or 0 for an empty desktop.
    pub fn max_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// The topmost non-minimized window, which is the one receiving input.
    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    /// Windows ordered bottom to top.
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: String,
    pub content: WindowContent,
}

impl OpenWindowRequest {
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, content: WindowContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub size_start: Size,
}

/// Transient pointer interaction state held by the shell, outside [`OsState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
