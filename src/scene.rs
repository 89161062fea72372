//! Collaborator-facing view of the scene graph.
//!
//! The interaction core never walks a real scene graph; it asks an
//! implementation of [`SceneQuery`] for world-space positions and ray
//! intersections, addressed by the object's index in the candidate list.
//! [`InteractableSet`] is a small bounding-sphere implementation used by the
//! tests and by integrations without their own picking.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

/// World-space position and orientation read from a tracked device or node.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Aim direction: the device's local -Z axis in world space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

/// A single ray/object intersection. `distance` is the ray parameter at the
/// hit point, so results sort nearest-first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub object: usize,
    pub distance: f32,
}

/// Scene-graph surface the interaction core drives.
///
/// Implementations answer in world space against the owning transform node of
/// each candidate, not its leaf geometry, and keep the candidate list stable
/// for the duration of a frame.
pub trait SceneQuery {
    /// Current world-space position of a candidate's owning node.
    fn object_position(&self, object: usize) -> Vec3;

    /// Move a candidate's owning node to a new world-space position.
    fn set_object_position(&mut self, object: usize, position: Vec3);

    /// Re-orient a candidate so its forward axis points at `target`.
    fn face_toward(&mut self, object: usize, target: Vec3);

    /// All candidate intersections along `direction` from `origin`, sorted by
    /// ascending distance.
    fn raycast(&self, origin: Vec3, direction: Vec3) -> SmallVec<[RayHit; 8]>;
}

/// Nearest forward intersection of a ray with a sphere, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// One grabbable object with sphere bounds.
#[derive(Clone, Copy, Debug)]
pub struct Interactable {
    pub position: Vec3,
    pub radius: f32,
    pub orientation: Quat,
}

/// Indexed arena of grabbable objects picked against their bounding spheres.
#[derive(Default)]
pub struct InteractableSet {
    objects: Vec<Interactable>,
}

impl InteractableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object; returns its index in the candidate list.
    pub fn push(&mut self, position: Vec3, radius: f32) -> usize {
        self.objects.push(Interactable {
            position,
            radius,
            orientation: Quat::IDENTITY,
        });
        self.objects.len() - 1
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, object: usize) -> Option<&Interactable> {
        self.objects.get(object)
    }
}

impl SceneQuery for InteractableSet {
    fn object_position(&self, object: usize) -> Vec3 {
        self.objects[object].position
    }

    fn set_object_position(&mut self, object: usize, position: Vec3) {
        if let Some(obj) = self.objects.get_mut(object) {
            obj.position = position;
        }
    }

    fn face_toward(&mut self, object: usize, target: Vec3) {
        if let Some(obj) = self.objects.get_mut(object) {
            let to_target = target - obj.position;
            if to_target.length_squared() > 1e-12 {
                obj.orientation = Quat::from_rotation_arc(Vec3::NEG_Z, to_target.normalize());
            }
        }
    }

    fn raycast(&self, origin: Vec3, direction: Vec3) -> SmallVec<[RayHit; 8]> {
        let mut hits: SmallVec<[RayHit; 8]> = SmallVec::new();
        for (i, obj) in self.objects.iter().enumerate() {
            if let Some(t) = ray_sphere(origin, direction, obj.position, obj.radius) {
                hits.push(RayHit {
                    object: i,
                    distance: t,
                });
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
