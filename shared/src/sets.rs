use bevy::prelude::*;

/// Per-frame ordering of scene systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneUpdateSet {
    /// Window, wheel and keyboard listeners
    Input,
    /// Wave displacement
    Simulation,
    /// Camera transforms and fog colour
    Rendering,
    Ui,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneOnEnterSet {
    Resources,
    Entities,
    Ui,
}
