use super::{EntityId, Lane, Span};

/// Obstacle variant; decides which evasive move clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ObstacleKind {
    /// Low block; can be jumped or slid under.
    Barrier,
    /// Tall block; can only be jumped.
    Train,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id: EntityId,
    pub lane: Lane,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
    /// Set once the player has evaded it so the clear is reported once.
    pub cleared: bool,
}

impl Obstacle {
    pub fn span(&self) -> Span {
        Span::new(self.y, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coin {
    pub id: EntityId,
    pub lane: Lane,
    pub y: f32,
    pub size: f32,
    pub collected: bool,
}

impl Coin {
    pub fn span(&self) -> Span {
        Span::new(self.y, self.size)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum PowerUpKind {
    /// Ignore obstacle collisions while active.
    Shield,
    /// Pull nearby coins in the player's lane.
    Magnet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerUp {
    pub id: EntityId,
    pub lane: Lane,
    pub y: f32,
    pub size: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn span(&self) -> Span {
        Span::new(self.y, self.size)
    }
}

/// Cosmetic spark emitted on coin pickup. Never collides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// Fade factor in `[0, 1]` for renderers.
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}
