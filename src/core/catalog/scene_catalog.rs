//=========================================================================
// Scene Catalog
//=========================================================================
//
// Immutable, validated, ordered table of scenes.
//
// Validation runs once at load time and fails fast. After construction
// the catalog is read-only and cheap to clone (shared `Arc<[Scene]>`),
// so the logic thread and the rendering layer can hold the same table.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{CatalogError, Scene, SceneId};

//=== Bundled Content =====================================================

const BUILTIN_INTRO: &str = include_str!("../../../assets/intro.json");

//=== SceneCatalog ========================================================

/// Ordered, validated list of scenes.
///
/// Guarantees:
/// - at least one scene
/// - scene at position `i` has id `i + 1`
/// - every scene has one or more non-blank lines
///
/// The last scene is the terminal scene.
#[derive(Debug, Clone)]
pub struct SceneCatalog {
    scenes: Arc<[Scene]>,
}

impl SceneCatalog {
    //--- Construction -----------------------------------------------------

    /// Validates and wraps a list of scenes.
    pub fn new(scenes: Vec<Scene>) -> Result<Self, CatalogError> {
        validate(&scenes)?;
        debug!("Scene catalog loaded with {} scenes", scenes.len());

        Ok(Self {
            scenes: scenes.into(),
        })
    }

    /// Parses a JSON array of scenes and validates it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let scenes: Vec<Scene> = serde_json::from_str(json)?;
        Self::new(scenes)
    }

    /// The bundled six-scene intro sequence.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_INTRO)
    }

    //--- Queries ----------------------------------------------------------

    /// All scenes in display order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Number of scenes. Always at least one.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Position of the terminal scene.
    pub fn last_index(&self) -> usize {
        self.scenes.len() - 1
    }

    /// Whether `index` is the terminal scene.
    pub fn is_terminal(&self, index: usize) -> bool {
        index == self.last_index()
    }

    /// Catalog position for a scene id, if present.
    pub fn index_of(&self, id: SceneId) -> Option<usize> {
        let index = (id.get() as usize).checked_sub(1)?;
        (index < self.scenes.len()).then_some(index)
    }
}

//=== Validation ==========================================================

fn validate(scenes: &[Scene]) -> Result<(), CatalogError> {
    if scenes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::with_capacity(scenes.len());

    for (position, scene) in scenes.iter().enumerate() {
        if scene.id.get() == 0 {
            return Err(CatalogError::ZeroId { position });
        }

        if !seen.insert(scene.id) {
            return Err(CatalogError::DuplicateId(scene.id));
        }

        let expected = SceneId(position as u32 + 1);
        if scene.id != expected {
            return Err(CatalogError::NonContiguous {
                position,
                expected,
                found: scene.id,
            });
        }

        if scene.lines.is_empty() {
            return Err(CatalogError::NoLines(scene.id));
        }

        if let Some(line) = scene.lines.iter().position(|l| l.trim().is_empty()) {
            return Err(CatalogError::EmptyLine {
                scene: scene.id,
                line,
            });
        }
    }

    Ok(())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(id: u32, lines: &[&str]) -> Scene {
        Scene::new(id, lines.iter().copied(), format!("bg-{id}"))
    }

    //=====================================================================
    // Valid Catalogs
    //=====================================================================

    #[test]
    fn accepts_dense_ordered_scenes() {
        let catalog = SceneCatalog::new(vec![
            scene(1, &["one"]),
            scene(2, &["two", "two again"]),
            scene(3, &["three"]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.last_index(), 2);
        assert!(catalog.is_terminal(2));
        assert!(!catalog.is_terminal(1));
        assert_eq!(catalog.get(1).unwrap().lines.len(), 2);
    }

    #[test]
    fn single_scene_is_first_and_terminal() {
        let catalog = SceneCatalog::new(vec![scene(1, &["only"])]).unwrap();
        assert_eq!(catalog.last_index(), 0);
        assert!(catalog.is_terminal(0));
    }

    #[test]
    fn index_of_maps_ids_to_positions() {
        let catalog = SceneCatalog::new(vec![scene(1, &["a"]), scene(2, &["b"])]).unwrap();

        assert_eq!(catalog.index_of(SceneId(1)), Some(0));
        assert_eq!(catalog.index_of(SceneId(2)), Some(1));
        assert_eq!(catalog.index_of(SceneId(3)), None);
        assert_eq!(catalog.index_of(SceneId(0)), None);
    }

    #[test]
    fn clones_share_storage() {
        let catalog = SceneCatalog::new(vec![scene(1, &["a"])]).unwrap();
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.scenes().as_ptr(), copy.scenes().as_ptr()));
    }

    //=====================================================================
    // Rejected Catalogs
    //=====================================================================

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(SceneCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_scene_with_zero_lines() {
        let result = SceneCatalog::new(vec![scene(1, &["a"]), scene(2, &[])]);
        assert!(matches!(result, Err(CatalogError::NoLines(SceneId(2)))));
    }

    #[test]
    fn rejects_blank_line() {
        let result = SceneCatalog::new(vec![scene(1, &["a", "   "])]);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyLine { scene: SceneId(1), line: 1 })
        ));
    }

    #[test]
    fn rejects_zero_id() {
        let result = SceneCatalog::new(vec![scene(0, &["a"])]);
        assert!(matches!(result, Err(CatalogError::ZeroId { position: 0 })));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SceneCatalog::new(vec![scene(1, &["a"]), scene(1, &["b"])]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(SceneId(1)))));
    }

    #[test]
    fn rejects_gaps_in_ids() {
        let result = SceneCatalog::new(vec![scene(1, &["a"]), scene(3, &["b"])]);
        assert!(matches!(
            result,
            Err(CatalogError::NonContiguous { position: 1, expected: SceneId(2), found: SceneId(3) })
        ));
    }

    #[test]
    fn rejects_out_of_order_ids() {
        let result = SceneCatalog::new(vec![scene(2, &["a"]), scene(1, &["b"])]);
        assert!(matches!(result, Err(CatalogError::NonContiguous { position: 0, .. })));
    }

    //=====================================================================
    // JSON Loading
    //=====================================================================

    #[test]
    fn from_json_parses_and_validates() {
        let json = r#"[
            { "id": 1, "lines": ["hello"], "background": "a.jpg" },
            { "id": 2, "location": "Dock", "lines": ["bye"], "background": "b.jpg" }
        ]"#;

        let catalog = SceneCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().location.as_deref(), Some("Dock"));
        assert!(catalog.get(0).unwrap().foreground.is_none());
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let result = SceneCatalog::from_json("[{ \"id\": 1 }");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn from_json_rejects_invalid_content() {
        let json = r#"[{ "id": 1, "lines": [], "background": "a.jpg" }]"#;
        assert!(matches!(
            SceneCatalog::from_json(json),
            Err(CatalogError::NoLines(SceneId(1)))
        ));
    }

    #[test]
    fn builtin_intro_is_valid() {
        let catalog = SceneCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.scenes().iter().all(|s| s.foreground.is_some()));
        assert_eq!(catalog.get(5).unwrap().lines.len(), 3);
    }
}
