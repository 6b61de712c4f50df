//! Axis-aligned rectangular collider.
//!
//! A [`BoxCollider`] is owned by exactly one game object and describes an
//! AABB offset from the owner's position. Offsets are stored pre-centered:
//! the constructor subtracts half the size, so an offset parameter of zero
//! centers the box on the owner. Each of the four sides carries its own
//! friction and bounciness coefficient, indexed by [`Side`].
//!
//! A trigger collider never blocks motion; it only fires its registered
//! callback when something overlaps it. See [`ColliderView::collide`] for the
//! full contract used by the physics step.

use crate::commands::Commands;
use crate::gameobject::ObjectId;
use crate::render::Renderer;

/// Face of the moving body's box judged closest to penetrating the other box.
///
/// The discriminants double as indices into the per-side coefficient arrays
/// (`None` carries no contact face and never indexes them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Index into the friction/bounciness arrays. Only meaningful for the
    /// four real sides.
    pub fn coeff_index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
            Side::None => usize::MAX,
        }
    }
}

/// Callback invoked when a trigger collider overlaps something.
///
/// Receives the collision pair (`collider_a` is the detecting body's
/// collider, `collider_b` the other one) and the deferred command queue.
pub type CollisionCallback = fn(&CollisionPair, &mut Commands);

/// Axis-aligned bounding box attached to a game object.
#[derive(Debug, Clone, Copy)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
    /// Stored pre-centered: `offset_param - width / 2`.
    pub x_offset: f32,
    /// Stored pre-centered: `offset_param - height / 2`.
    pub y_offset: f32,
    /// Per-side friction coefficients, indexed by [`Side::coeff_index`].
    pub friction: [f32; 4],
    /// Per-side bounciness coefficients, indexed by [`Side::coeff_index`].
    pub bounciness: [f32; 4],
    /// Trigger colliders fire their callback instead of blocking motion.
    pub is_trigger: bool,
    callback: Option<CollisionCallback>,
}

impl BoxCollider {
    /// Create a collider of the given size, centered on its owner.
    ///
    /// Width and height must be positive; a non-positive size is a
    /// programming error.
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "collider size must be positive");
        Self {
            width,
            height,
            x_offset: -width / 2.0,
            y_offset: -height / 2.0,
            friction: [1.0; 4],
            bounciness: [0.0; 4],
            is_trigger: false,
            callback: None,
        }
    }

    /// Offset the box from the owner position. The parameter is the center of
    /// the box relative to the owner; it is stored pre-centered.
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.x_offset = x - self.width / 2.0;
        self.y_offset = y - self.height / 2.0;
        self
    }

    pub fn with_friction(mut self, friction: [f32; 4]) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_bounciness(mut self, bounciness: [f32; 4]) -> Self {
        self.bounciness = bounciness;
        self
    }

    /// Mark as a trigger: overlaps fire the callback and never block.
    pub fn trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Register the single collision callback for this collider.
    pub fn on_collision(&mut self, callback: CollisionCallback) {
        self.callback = Some(callback);
    }

    pub fn callback(&self) -> Option<CollisionCallback> {
        self.callback
    }

    /// World-space AABB for a given owner position: `(min_x, min_y, w, h)`.
    pub fn aabb(&self, x: f32, y: f32) -> (f32, f32, f32, f32) {
        (x + self.x_offset, y + self.y_offset, self.width, self.height)
    }

    /// AABB vs AABB overlap test against another collider at a different
    /// owner position. Touching edges count as overlapping.
    pub fn overlaps(&self, position: (f32, f32), other: &Self, other_position: (f32, f32)) -> bool {
        let (x1, y1, w1, h1) = self.aabb(position.0, position.1);
        let (x2, y2, w2, h2) = other.aabb(other_position.0, other_position.1);
        y1 + h1 >= y2 && y1 <= y2 + h2 && x1 <= x2 + w2 && x1 + w1 >= x2
    }

    /// Debug visualization: outline of the box at the owner position. Only
    /// drawn when the owner has no sprite.
    pub fn debug_draw(&self, x: f32, y: f32, renderer: &mut dyn Renderer) {
        let (bx, by, w, h) = self.aabb(x, y);
        renderer.draw_outline(bx, by, w, h);
    }
}

/// World-space snapshot of one entity's collider, captured during the
/// physics step's collider enumeration. Valid only within the frame that
/// produced it.
#[derive(Debug, Clone, Copy)]
pub struct ColliderView {
    /// Owning entity, used for identity exclusion and deferred commands.
    pub owner: ObjectId,
    /// World-space minimum x (owner x + stored offset).
    pub x: f32,
    /// World-space minimum y.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub friction: [f32; 4],
    pub bounciness: [f32; 4],
    pub is_trigger: bool,
    pub callback: Option<CollisionCallback>,
}

impl ColliderView {
    /// Capture the collider of an entity at its current position.
    pub fn capture(owner: ObjectId, x: f32, y: f32, collider: &BoxCollider) -> Self {
        Self {
            owner,
            x: x + collider.x_offset,
            y: y + collider.y_offset,
            width: collider.width,
            height: collider.height,
            x_offset: collider.x_offset,
            y_offset: collider.y_offset,
            friction: collider.friction,
            bounciness: collider.bounciness,
            is_trigger: collider.is_trigger,
            callback: collider.callback,
        }
    }

    fn overlaps(&self, other: &ColliderView) -> bool {
        self.y + self.height >= other.y
            && self.y <= other.y + other.height
            && self.x <= other.x + other.width
            && self.x + self.width >= other.x
    }

    /// Full collision contract: overlap test, trigger dispatch, blocking
    /// pair.
    ///
    /// If either side is a trigger, that collider's callback fires with the
    /// pair (`self` as `collider_a`) and the result is non-blocking; when
    /// both are triggers, both callbacks fire. Otherwise the blocking pair is
    /// returned for the caller to resolve.
    pub fn collide(&self, other: &ColliderView, commands: &mut Commands) -> Option<CollisionPair> {
        if !self.overlaps(other) {
            return None;
        }

        let pair = CollisionPair {
            collider_a: *self,
            collider_b: *other,
        };

        if self.is_trigger || other.is_trigger {
            if self.is_trigger
                && let Some(callback) = self.callback
            {
                callback(&pair, commands);
            }
            if other.is_trigger
                && let Some(callback) = other.callback
            {
                callback(&pair, commands);
            }
            return None;
        }

        Some(pair)
    }
}

/// A blocking collision between two colliders. `collider_a` is always the
/// detecting body's own collider.
#[derive(Debug, Clone, Copy)]
pub struct CollisionPair {
    pub collider_a: ColliderView,
    pub collider_b: ColliderView,
}

impl CollisionPair {
    /// Side of `collider_a` judged closest to penetrating `collider_b`.
    ///
    /// The four penetration-depth candidates are evaluated in the fixed
    /// order Top, Bottom, Left, Right and the first strict minimum wins, so
    /// ties resolve deterministically toward the earlier side.
    pub fn impact_side(&self) -> Side {
        let a = &self.collider_a;
        let b = &self.collider_b;
        let candidates = [
            ((b.y + b.height - a.y).abs(), Side::Top),
            ((a.y + a.height - b.y).abs(), Side::Bottom),
            ((b.x + b.width - a.x).abs(), Side::Left),
            ((a.x + a.width - b.x).abs(), Side::Right),
        ];
        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.0 < best.0 {
                best = *candidate;
            }
        }
        best.1
    }
}
