//=========================================================================
// Catalog Errors
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::SceneId;

//=== CatalogError ========================================================

/// Reasons a scene catalog is rejected at load time.
///
/// All variants are fatal: a sequence cannot start from an invalid catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog holds no scenes.
    #[error("scene catalog is empty")]
    Empty,

    /// Scene ids are 1-based.
    #[error("scene at position {position} has id 0")]
    ZeroId { position: usize },

    /// Two scenes share the same id.
    #[error("duplicate scene id {0}")]
    DuplicateId(SceneId),

    /// Ids must be dense and ascending, matching array position.
    #[error("scene at position {position} has id {found}, expected {expected}")]
    NonContiguous {
        position: usize,
        expected: SceneId,
        found: SceneId,
    },

    /// A scene must carry at least one line.
    #[error("scene {0} has no lines")]
    NoLines(SceneId),

    /// Lines must contain visible text.
    #[error("scene {scene} line {line} is empty")]
    EmptyLine { scene: SceneId, line: usize },

    /// Static configuration could not be parsed.
    #[error("failed to parse scene catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
