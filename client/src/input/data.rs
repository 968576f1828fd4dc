use serde::{Deserialize, Serialize};

/// Actions bound through the key map. Camera target keys are not listed here:
/// they match on the typed character, not on a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SceneAction {
    NextScene,
    ToggleInspector,
    ToggleHud,
}
