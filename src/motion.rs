use crate::constants::*;
use crate::input::{PointerState, Viewport};
use glam::DVec2;

/// The five animated points, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Ring,
    Dot,
    Blob1,
    Blob2,
    Blob3,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Ring, Role::Dot, Role::Blob1, Role::Blob2, Role::Blob3];
    pub const CURSOR: [Role; 2] = [Role::Ring, Role::Dot];
    /// Blob update order. Blob 2 chases blob 1, so blob 1 must be eased first.
    pub const BLOBS: [Role; 3] = [Role::Blob1, Role::Blob2, Role::Blob3];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_cursor(self) -> bool {
        matches!(self, Role::Ring | Role::Dot)
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Role::Ring => RING_ELEMENT_ID,
            Role::Dot => DOT_ELEMENT_ID,
            Role::Blob1 => BLOB_ELEMENT_IDS[0],
            Role::Blob2 => BLOB_ELEMENT_IDS[1],
            Role::Blob3 => BLOB_ELEMENT_IDS[2],
        }
    }
}

/// How an entity picks its target each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionRule {
    /// Target is the pointer.
    FollowPointer,
    /// Target circles the pointer at `radius`.
    FollowPointerWithOrbit { radius: f64, frequency: f64 },
    /// Target drifts toward the leader's eased position and wanders.
    ///
    /// Unlike the other rules the target is not recomputed from scratch: each
    /// frame adds to the previous target, which gives the chaser its inertia.
    ChaseEntity {
        leader: Role,
        pull: f64,
        wander_frequency: f64,
        wander_amplitude: f64,
        wander_bias: f64,
    },
    /// Target traces a Lissajous curve around the viewport center.
    AnchoredLissajous { amplitude: DVec2, frequency: DVec2 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedEntity {
    pub current: DVec2,
    pub target: DVec2,
    pub rule: MotionRule,
    /// Per-frame smoothing weight in (0, 1].
    pub easing: f64,
}

impl TrackedEntity {
    pub fn new(start: DVec2, rule: MotionRule, easing: f64) -> Self {
        Self {
            current: start,
            target: start,
            rule,
            easing,
        }
    }

    /// Move `current` one smoothing step toward `target`.
    #[inline]
    pub fn ease(&mut self) {
        self.current = ease_toward(self.current, self.target, self.easing);
    }

    #[inline]
    pub fn distance_to_target(&self) -> f64 {
        self.current.distance(self.target)
    }
}

/// First-order exponential smoothing step.
#[inline]
pub fn ease(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[inline]
pub fn ease_toward(current: DVec2, target: DVec2, factor: f64) -> DVec2 {
    DVec2::new(
        ease(current.x, target.x, factor),
        ease(current.y, target.y, factor),
    )
}

/// All motion state for the cursor markers and the background blobs.
///
/// Owned by the frame loop; pointer listeners only touch `pointer`.
#[derive(Clone, Debug)]
pub struct MotionEngine {
    pub pointer: PointerState,
    viewport: Viewport,
    phase: f64,
    cursor_enabled: bool,
    entities: [TrackedEntity; 5],
}

impl MotionEngine {
    pub fn new(viewport: Viewport, cursor_enabled: bool) -> Self {
        let center = viewport.center();
        let entities = Role::ALL.map(|role| match role {
            Role::Ring => TrackedEntity::new(center, MotionRule::FollowPointer, RING_EASING),
            Role::Dot => TrackedEntity::new(center, MotionRule::FollowPointer, DOT_EASING),
            Role::Blob1 => TrackedEntity::new(
                viewport.at(BLOB1_START),
                MotionRule::FollowPointerWithOrbit {
                    radius: BLOB1_ORBIT_RADIUS,
                    frequency: BLOB1_ORBIT_FREQUENCY,
                },
                BLOB1_EASING,
            ),
            Role::Blob2 => TrackedEntity::new(
                viewport.at(BLOB2_START),
                MotionRule::ChaseEntity {
                    leader: Role::Blob1,
                    pull: BLOB2_CHASE_PULL,
                    wander_frequency: BLOB2_WANDER_FREQUENCY,
                    wander_amplitude: BLOB2_WANDER_AMPLITUDE,
                    wander_bias: BLOB2_WANDER_BIAS,
                },
                BLOB2_EASING,
            ),
            Role::Blob3 => TrackedEntity::new(
                viewport.at(BLOB3_START),
                MotionRule::AnchoredLissajous {
                    amplitude: DVec2::from_array(BLOB3_AMPLITUDE),
                    frequency: DVec2::from_array(BLOB3_FREQUENCY),
                },
                BLOB3_EASING,
            ),
        });
        Self {
            pointer: PointerState::at(center),
            viewport,
            phase: 0.0,
            cursor_enabled,
            entities,
        }
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn cursor_enabled(&self) -> bool {
        self.cursor_enabled
    }

    #[inline]
    pub fn entity(&self, role: Role) -> &TrackedEntity {
        &self.entities[role.index()]
    }

    #[inline]
    pub fn position(&self, role: Role) -> DVec2 {
        self.entity(role).current
    }

    /// Teleport an entity: both current and target jump to `position`.
    pub fn place(&mut self, role: Role, position: DVec2) {
        let entity = &mut self.entities[role.index()];
        entity.current = position;
        entity.target = position;
    }

    /// Roles whose positions are live this session.
    pub fn active_roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL
            .into_iter()
            .filter(move |role| self.cursor_enabled || !role.is_cursor())
    }

    /// One frame: cursor markers first, then the blobs.
    pub fn tick(&mut self) {
        self.tick_cursor();
        self.tick_blobs();
    }

    /// Ease ring and dot toward the pointer. No-op without a fine pointer.
    pub fn tick_cursor(&mut self) {
        if !self.cursor_enabled {
            return;
        }
        for role in Role::CURSOR {
            self.step(role);
        }
    }

    /// Advance the phase and update the blobs in dependency order.
    pub fn tick_blobs(&mut self) {
        self.phase += PHASE_STEP;
        for role in Role::BLOBS {
            self.step(role);
        }
    }

    /// Recompute `role`'s target at the current phase without easing.
    pub fn retarget(&mut self, role: Role) {
        let target = self.next_target(role);
        self.entities[role.index()].target = target;
    }

    fn step(&mut self, role: Role) {
        self.retarget(role);
        self.entities[role.index()].ease();
    }

    fn next_target(&self, role: Role) -> DVec2 {
        let entity = self.entity(role);
        let phase = self.phase;
        match entity.rule {
            MotionRule::FollowPointer => self.pointer.position(),
            MotionRule::FollowPointerWithOrbit { radius, frequency } => {
                let angle = phase * frequency;
                self.pointer.position() + radius * DVec2::new(angle.sin(), angle.cos())
            }
            MotionRule::ChaseEntity {
                leader,
                pull,
                wander_frequency,
                wander_amplitude,
                wander_bias,
            } => {
                // Reads the leader's eased position, never its target.
                let leader_pos = self.entity(leader).current;
                let chased = ease_toward(entity.target, leader_pos, pull);
                let angle = phase * wander_frequency;
                chased
                    + wander_amplitude * DVec2::new(angle.cos(), angle.sin())
                    + DVec2::splat(wander_bias)
            }
            MotionRule::AnchoredLissajous {
                amplitude,
                frequency,
            } => {
                let wave = DVec2::new(
                    (phase * frequency.x).sin(),
                    (phase * frequency.y).cos(),
                );
                self.viewport.center() + amplitude * wave
            }
        }
    }
}
