use kernel::id::Id;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptMarker;
pub type ScriptId = Id<ScriptMarker>;
