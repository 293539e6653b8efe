//! Pure calculation functions for resize geometry.
//!
//! All functions here are pure and testable without any I/O or pixels.
//!
//! A resize is planned in two steps: resolve the target dimensions (deriving
//! a missing one from the source aspect ratio), then choose the sample
//! rectangle — the source region that gets scaled into the target. With
//! aspect preservation the sample rectangle is the largest source region
//! matching the target proportions (a "cover"-style crop); without it the
//! full source is stretched to fit.

/// A fully resolved resize: target buffer dimensions plus the source region
/// to sample from.
///
/// Dimensions are rounded to whole pixels at this boundary; the planning
/// math itself is carried out in `f64` so that a derived dimension compares
/// exactly equal to the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    /// Output buffer width.
    pub target_width: u32,
    /// Output buffer height.
    pub target_height: u32,
    /// Width of the source region to sample.
    pub sample_width: u32,
    /// Height of the source region to sample.
    pub sample_height: u32,
}

/// Plan a resize of `source` to the requested dimensions.
///
/// # Arguments
/// * `source` - Source dimensions (width, height)
/// * `width` - Target width, derived from `height` when `None`
/// * `height` - Target height, derived from `width` when `None`
/// * `keep_aspect` - Crop to the target proportions instead of stretching
///
/// # Returns
/// * `Some(plan)` - The resolved target dimensions and sample rectangle
/// * `None` - Both target dimensions were absent
///
/// # Examples
/// ```
/// # use imgfit::plan_resize;
/// // 800x600 squeezed into a square: the sample region keeps the full
/// // height and crops the width.
/// let plan = plan_resize((800, 600), Some(400), Some(400), true).unwrap();
/// assert_eq!((plan.sample_width, plan.sample_height), (600, 600));
/// assert_eq!((plan.target_width, plan.target_height), (400, 400));
/// ```
pub fn plan_resize(
    source: (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
    keep_aspect: bool,
) -> Option<ResizePlan> {
    let (orig_w, orig_h) = (f64::from(source.0), f64::from(source.1));
    let (target_w, target_h) = derive_dimensions((orig_w, orig_h), width, height)?;

    let (sample_w, sample_h) = if keep_aspect {
        cover_sample((orig_w, orig_h), (target_w, target_h))
    } else {
        (orig_w, orig_h)
    };

    Some(ResizePlan {
        target_width: target_w.round() as u32,
        target_height: target_h.round() as u32,
        sample_width: sample_w.round() as u32,
        sample_height: sample_h.round() as u32,
    })
}

/// Resolve the target dimensions, deriving a missing one by holding the
/// source aspect ratio constant.
fn derive_dimensions(
    source: (f64, f64),
    width: Option<u32>,
    height: Option<u32>,
) -> Option<(f64, f64)> {
    let aspect = source.0 / source.1;
    match (width, height) {
        (None, None) => None,
        (Some(w), None) => Some((f64::from(w), f64::from(w) / aspect)),
        (None, Some(h)) => Some((f64::from(h) * aspect, f64::from(h))),
        (Some(w), Some(h)) => Some((f64::from(w), f64::from(h))),
    }
}

/// Largest source region matching the target proportions.
///
/// One dimension always equals the source; the other shrinks by the ratio
/// of the two aspects, never grows.
fn cover_sample(source: (f64, f64), target: (f64, f64)) -> (f64, f64) {
    let (orig_w, orig_h) = source;
    let orig_aspect = orig_w / orig_h;
    let new_aspect = target.0 / target.1;

    if new_aspect >= orig_aspect {
        // Target is proportionally wider: full source width, height shrinks
        (orig_w, orig_h * (orig_aspect / new_aspect))
    } else {
        // Target is proportionally taller: full source height, width shrinks
        (orig_w * (new_aspect / orig_aspect), orig_h)
    }
}
