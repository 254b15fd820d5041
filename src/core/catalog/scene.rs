//=========================================================================
// Scene Records
//=========================================================================
//
// Immutable narrative units and their passthrough presentation metadata.
//
// Only `id` and `lines` drive playback. Everything else (background,
// foreground overlay, placement, animation poses) is carried untouched
// to the rendering layer.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== SceneId =============================================================

/// Positive, 1-based scene identifier.
///
/// Ids define display order: the scene at catalog position `i` has id `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub u32);

impl SceneId {
    /// Returns the raw id value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Scene ===============================================================

/// One immutable unit of narrative content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Display-order identifier.
    pub id: SceneId,

    /// Optional location caption (e.g. "Orbit Planet Bumi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Text lines, revealed in order.
    pub lines: Vec<String>,

    /// Opaque background asset reference.
    pub background: String,

    /// Optional secondary visual overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Foreground>,
}

impl Scene {
    /// Creates a scene with the given id, lines and background.
    pub fn new<I, L>(id: u32, lines: I, background: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            id: SceneId(id),
            location: None,
            lines: lines.into_iter().map(Into::into).collect(),
            background: background.into(),
            foreground: None,
        }
    }

    /// Sets the location caption.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the foreground overlay.
    pub fn with_foreground(mut self, foreground: Foreground) -> Self {
        self.foreground = Some(foreground);
        self
    }
}

//=== Foreground ==========================================================

/// Secondary visual asset layered over the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foreground {
    /// Opaque asset reference.
    pub asset: String,

    #[serde(default)]
    pub placement: Placement,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<EntryAnimation>,
}

impl Foreground {
    /// Creates a full-screen overlay with no entry animation.
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            placement: Placement::default(),
            animation: None,
        }
    }
}

/// Where the overlay sits and how large it is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub position: Position,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

/// Anchor for a foreground overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Fill,
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

/// Overlay size in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Entry animation, from `initial` pose to `animate` pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryAnimation {
    #[serde(default)]
    pub initial: Pose,

    #[serde(default)]
    pub animate: Pose,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Partial transform; unset fields keep the renderer's default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

//=========================================================================
// Unit Tests
//=========================================================================
