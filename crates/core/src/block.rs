use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of solid block kinds.
///
/// Air is the absence of a grid entry, not a variant: every stored block is
/// solid and fills its whole unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Surface layer of the platform.
    Grass,
    /// Subsurface layer under grass.
    Dirt,
    /// Everything below the dirt layer.
    Stone,
    /// Tree trunk.
    Log,
    /// Tree canopy.
    Leaves,
}

impl BlockKind {
    /// Stable name used in scripts and config files.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Grass => "grass",
            BlockKind::Dirt => "dirt",
            BlockKind::Stone => "stone",
            BlockKind::Log => "log",
            BlockKind::Leaves => "leaves",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a block name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block kind: {0:?}")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grass" => Ok(BlockKind::Grass),
            "dirt" => Ok(BlockKind::Dirt),
            "stone" => Ok(BlockKind::Stone),
            "log" => Ok(BlockKind::Log),
            "leaves" => Ok(BlockKind::Leaves),
            other => Err(UnknownBlockKind(other.to_string())),
        }
    }
}
