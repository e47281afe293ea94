//! Cameras and projections.

pub use self::camera3d::Camera3d;
pub use self::fixed_frustum3d::FixedFrustum3d;
pub use self::frustum::Frustum;

mod camera3d;
mod fixed_frustum3d;
mod frustum;
