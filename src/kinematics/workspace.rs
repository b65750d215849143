//! Reachability and workspace-boundary queries.

use libm::{atan2, copysign, cos, fabs, sin, sqrt};

use crate::error::{DomainError, UnreachableError};

use super::inverse::{sagittal_offset, solve_ik};
use super::types::{LegDimensions, Position3D};

/// Reach bounds of the femur/tibia chain, derived from [`LegDimensions`].
///
/// Reach is measured from the femur joint, not from the coxa joint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReachLimits {
    /// `|femur_length - tibia_length|`, the fully folded span.
    pub min_reach: f64,
    /// `femur_length + tibia_length`, the fully extended span.
    pub max_reach: f64,
}

impl ReachLimits {
    /// Compute reach bounds from segment lengths.
    pub fn from_dimensions(dims: &LegDimensions) -> Self {
        Self {
            min_reach: fabs(dims.femur_length - dims.tibia_length),
            max_reach: dims.extension(),
        }
    }

    /// Check if a reach distance can be spanned.
    ///
    /// A zero reach is never spanned: the femur direction is undefined there.
    pub fn contains(&self, reach: f64) -> bool {
        self.check(reach).is_ok()
    }

    /// Classify a reach distance.
    ///
    /// A NaN reach is `TooFar`.
    pub fn check(&self, reach: f64) -> Result<(), UnreachableError> {
        if !(reach <= self.max_reach) {
            return Err(UnreachableError::TooFar {
                reach,
                max_reach: self.max_reach,
            });
        }

        if reach < self.min_reach || reach <= 0.0 {
            return Err(UnreachableError::TooClose {
                reach,
                min_reach: self.min_reach,
            });
        }

        Ok(())
    }

    /// Saturate a reach distance into `[min_reach, max_reach]`.
    pub fn clamp(&self, reach: f64) -> f64 {
        reach.max(self.min_reach).min(self.max_reach)
    }
}

/// Check whether [`solve_ik`] would succeed for `target`.
pub fn is_reachable(target: Position3D, dims: LegDimensions) -> bool {
    solve_ik(target, dims).is_ok()
}

/// Maximum horizontal distance from the coxa joint reachable at `z_height`.
///
/// Computed as `sqrt((femur + tibia)^2 - z^2) + coxa`, i.e. with the
/// femur/tibia chain fully extended.
///
/// # Errors
///
/// Returns [`DomainError::HeightExceedsExtension`] when `|z_height|` is larger
/// than `femur_length + tibia_length` (or is NaN).
pub fn max_reach_at_height(z_height: f64, dims: LegDimensions) -> Result<f64, DomainError> {
    let extension = dims.extension();

    if !(fabs(z_height) <= extension) {
        return Err(DomainError::HeightExceedsExtension {
            z_height,
            extension,
        });
    }

    let horizontal_reach = sqrt(extension * extension - z_height * z_height);
    Ok(horizontal_reach + dims.coxa_length)
}

/// Project `target` onto the nearest workspace boundary.
///
/// The target keeps its coxa bearing and its elevation as seen from the femur
/// joint; only the reach distance is pulled into `[min_reach, max_reach]`.
/// Reachable targets are returned unchanged. A target sitting exactly on the
/// femur joint is pushed straight outward, and a too-close target behind the
/// coxa axis lands on the axis itself.
///
/// # Errors
///
/// Returns the [`ReachLimits::check`] error when there is no boundary point to
/// project onto: a non-finite target, or a target exactly on the femur joint of a leg
/// with equal femur and tibia lengths.
pub fn clamp_to_workspace(
    target: Position3D,
    dims: LegDimensions,
) -> Result<Position3D, UnreachableError> {
    let limits = ReachLimits::from_dimensions(&dims);
    let (horizontal, vertical) = sagittal_offset(target, &dims);
    let reach = sqrt(horizontal * horizontal + vertical * vertical);

    let error = match limits.check(reach) {
        Ok(()) => return Ok(target),
        Err(e) => e,
    };

    let clamped = limits.clamp(reach);
    if !reach.is_finite() || clamped <= 0.0 {
        return Err(error);
    }

    let (mut horizontal, mut vertical) = if reach > 0.0 {
        let scale = clamped / reach;
        (horizontal * scale, vertical * scale)
    } else {
        (clamped, 0.0)
    };

    // Scaling out past the coxa axis would flip the bearing; stop on the axis instead.
    if horizontal < -dims.coxa_length {
        horizontal = -dims.coxa_length;
        vertical = copysign(
            sqrt(clamped * clamped - dims.coxa_length * dims.coxa_length),
            vertical,
        );
    }

    let bearing = atan2(target.y, target.x);
    let radial = dims.coxa_length + horizontal;

    Ok(Position3D::new(
        radial * cos(bearing),
        radial * sin(bearing),
        vertical,
    ))
}
