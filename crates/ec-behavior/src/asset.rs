use std::fmt;
use std::sync::Arc;

use ec_blackboard::BlackboardSchema;

/// A behavior tree asset as seen by the controller: a name the evaluator
/// recognises plus the blackboard schema the tree was authored against.
///
/// The schema is shared by every unit of the same type.
#[derive(Clone, Debug)]
pub struct BehaviorAsset {
    pub name:   String,
    pub schema: Arc<BlackboardSchema>,
}

impl BehaviorAsset {
    pub fn new(name: impl Into<String>, schema: Arc<BlackboardSchema>) -> Self {
        Self { name: name.into(), schema }
    }
}

/// Which tree slot an asset is started in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TreeRole {
    /// The unit's main decision tree.
    Root,
    /// The combat subtree, run alongside the root when the unit has one.
    Combat,
}

impl fmt::Display for TreeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TreeRole::Root   => "root",
            TreeRole::Combat => "combat",
        })
    }
}
