//=========================================================================
// Scene Catalog System
//=========================================================================
//
// Static narrative content: the ordered scene table the sequence plays.
//
// Architecture:
//   JSON / Vec<Scene> → validate() → SceneCatalog (Arc<[Scene]>)
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod scene;
mod scene_catalog;

//=== Public API ==========================================================

pub use error::CatalogError;
pub use scene::{EntryAnimation, Foreground, Placement, Pose, Position, Scene, SceneId, Size};
pub use scene_catalog::SceneCatalog;
