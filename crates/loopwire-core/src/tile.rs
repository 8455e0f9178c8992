//! The richer tile model: sources, bulbs, wires, bridges, switches and blockers.
//!
//! Tiles carry a stable identifier and arbitrary connection sets instead of
//! the five canonical shapes. They implement [`Piece`], so propagation and
//! solved-state evaluation work on a `Grid<Tile>` exactly as on a
//! `Grid<Cell>`.

use std::fmt::{self, Display};

use crate::{Channels, DirectionSet, Piece, Role, Rotation, Shape};

/// A stable tile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct TileId(pub u32);

/// Which of a switch's two connection sets is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwitchState {
    /// The first connection set.
    #[default]
    First,
    /// The second connection set.
    Second,
}

impl SwitchState {
    /// Returns the other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// The behaviour of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Emits power through `connections`.
    Source {
        /// Open sides.
        connections: DirectionSet,
    },
    /// The goal; must sit on a closed circuit.
    Bulb {
        /// Open sides.
        connections: DirectionSet,
    },
    /// A rotatable wire with arbitrary base connections.
    Wire {
        /// Open sides at [`Rotation::R0`].
        connections: DirectionSet,
        /// Current rotation.
        rotation: Rotation,
    },
    /// Two crossing paths that conduct independently.
    Bridge {
        /// Open sides of each path at [`Rotation::R0`].
        paths: [DirectionSet; 2],
        /// Current rotation.
        rotation: Rotation,
    },
    /// Toggles between two fixed connection sets instead of rotating.
    Switch {
        /// The two connection sets.
        states: [DirectionSet; 2],
        /// The selected set.
        active: SwitchState,
    },
    /// Conducts nothing and cannot be changed.
    Blocker,
}

/// A tile of the richer puzzle model.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Direction, Piece, Rotation, Shape, Tile, TileId};
///
/// let bridge = Tile::bridge(TileId(7));
/// assert_eq!(bridge.channels().len(), 2);
/// assert_eq!(bridge.channel_toward(Direction::Top), Some(0));
/// assert_eq!(bridge.channel_toward(Direction::Left), Some(1));
///
/// let wire = Tile::wire(TileId(8), Shape::L, Rotation::R0);
/// assert!(wire.turned().open_directions().has(Direction::Bottom));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Stable identifier.
    pub id: TileId,
    /// Behaviour and current state.
    pub kind: TileKind,
    /// Whether the player can interact with this tile.
    pub fixed: bool,
}

impl Tile {
    /// Creates a fixed source tile.
    #[must_use]
    pub const fn source(id: TileId, connections: DirectionSet) -> Self {
        Self {
            id,
            kind: TileKind::Source { connections },
            fixed: true,
        }
    }

    /// Creates a fixed bulb tile.
    #[must_use]
    pub const fn bulb(id: TileId, connections: DirectionSet) -> Self {
        Self {
            id,
            kind: TileKind::Bulb { connections },
            fixed: true,
        }
    }

    /// Creates a rotatable wire tile from a canonical shape.
    #[must_use]
    pub const fn wire(id: TileId, shape: Shape, rotation: Rotation) -> Self {
        Self {
            id,
            kind: TileKind::Wire {
                connections: shape.base_connections(),
                rotation,
            },
            fixed: false,
        }
    }

    /// Creates a rotatable bridge with a vertical and a horizontal path.
    #[must_use]
    pub const fn bridge(id: TileId) -> Self {
        Self {
            id,
            kind: TileKind::Bridge {
                paths: [
                    DirectionSet::TOP.union(DirectionSet::BOTTOM),
                    DirectionSet::LEFT.union(DirectionSet::RIGHT),
                ],
                rotation: Rotation::R0,
            },
            fixed: false,
        }
    }

    /// Creates a switch toggling between two connection sets.
    #[must_use]
    pub const fn switch(id: TileId, first: DirectionSet, second: DirectionSet) -> Self {
        Self {
            id,
            kind: TileKind::Switch {
                states: [first, second],
                active: SwitchState::First,
            },
            fixed: false,
        }
    }

    /// Creates a blocker.
    #[must_use]
    pub const fn blocker(id: TileId) -> Self {
        Self {
            id,
            kind: TileKind::Blocker,
            fixed: true,
        }
    }

    /// Returns this tile with its `fixed` flag set to `fixed`.
    #[must_use]
    pub const fn with_fixed(self, fixed: bool) -> Self {
        Self { fixed, ..self }
    }
}

impl Piece for Tile {
    fn channels(&self) -> Channels {
        let single = |set: DirectionSet| Channels::from_array_len([set, DirectionSet::empty()], 1);
        match self.kind {
            TileKind::Source { connections } | TileKind::Bulb { connections } => {
                single(connections)
            }
            TileKind::Wire {
                connections,
                rotation,
            } => single(connections.rotated_cw(rotation.quarter_turns())),
            TileKind::Bridge { paths, rotation } => {
                Channels::from(paths.map(|p| p.rotated_cw(rotation.quarter_turns())))
            }
            TileKind::Switch { states, active } => single(states[active.index()]),
            TileKind::Blocker => Channels::new(),
        }
    }

    fn role(&self) -> Role {
        match self.kind {
            TileKind::Source { .. } => Role::Source,
            TileKind::Bulb { .. } => Role::Bulb,
            _ => Role::Plain,
        }
    }

    fn is_fixed(&self) -> bool {
        self.fixed || matches!(self.kind, TileKind::Blocker)
    }

    fn turned(&self) -> Self {
        if self.is_fixed() {
            return *self;
        }
        let kind = match self.kind {
            TileKind::Source { connections } => TileKind::Source {
                connections: connections.rotated_cw(1),
            },
            TileKind::Bulb { connections } => TileKind::Bulb {
                connections: connections.rotated_cw(1),
            },
            TileKind::Wire {
                connections,
                rotation,
            } => TileKind::Wire {
                connections,
                rotation: rotation.turned_cw(),
            },
            TileKind::Bridge { paths, rotation } => TileKind::Bridge {
                paths,
                rotation: rotation.turned_cw(),
            },
            TileKind::Switch { states, active } => TileKind::Switch {
                states,
                active: active.toggled(),
            },
            TileKind::Blocker => TileKind::Blocker,
        };
        Self { kind, ..*self }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TileKind::Source { .. } => "source",
            TileKind::Bulb { .. } => "bulb",
            TileKind::Wire { .. } => "wire",
            TileKind::Bridge { .. } => "bridge",
            TileKind::Switch { .. } => "switch",
            TileKind::Blocker => "blocker",
        };
        write!(f, "{kind} {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_bridge_paths_rotate_together() {
        let bridge = Tile::bridge(TileId(1));
        let turned = bridge.turned();
        let channels = turned.channels();
        assert_eq!(channels[0], DirectionSet::LEFT | DirectionSet::RIGHT);
        assert_eq!(channels[1], DirectionSet::TOP | DirectionSet::BOTTOM);
        assert_eq!(turned.open_directions(), DirectionSet::all());
    }

    #[test]
    fn test_switch_toggles_between_states() {
        let first = DirectionSet::TOP | DirectionSet::BOTTOM;
        let second = DirectionSet::LEFT | DirectionSet::RIGHT;
        let switch = Tile::switch(TileId(2), first, second);
        assert_eq!(switch.open_directions(), first);
        assert_eq!(switch.turned().open_directions(), second);
        assert_eq!(switch.turned().turned(), switch);
    }

    #[test]
    fn test_blocker_and_fixed_tiles_ignore_interaction() {
        let blocker = Tile::blocker(TileId(3));
        assert!(blocker.channels().is_empty());
        assert_eq!(blocker.turned(), blocker);
        assert_eq!(blocker.with_fixed(false).turned(), blocker.with_fixed(false));

        let source = Tile::source(TileId(4), DirectionSet::RIGHT);
        assert_eq!(source.turned(), source);
        assert_eq!(source.role(), Role::Source);
    }

    #[test]
    fn test_unfixed_source_rotates_its_connections() {
        let source = Tile::source(TileId(5), DirectionSet::RIGHT).with_fixed(false);
        assert_eq!(
            source.turned().channel_toward(Direction::Bottom),
            Some(0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::bridge(TileId(9)).to_string(), "bridge #9");
    }
}
