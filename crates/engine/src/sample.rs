use rootfind_core::Function;
use thiserror::Error;

use crate::root_label;

/// A symmetric sampling window around a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    half_width: f64,
    points: usize,
}

/// Errors that can occur when validating a sampling window.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("half_width must be finite and positive")]
    HalfWidth,

    #[error("points must be at least 2")]
    Points,
}

impl Default for Window {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(10.0, 400).unwrap()
    }
}

impl Window {
    /// Creates a window spanning `center ± half_width` with `points` samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_width` is not finite and positive, or if
    /// fewer than two points are requested.
    pub fn new(half_width: f64, points: usize) -> Result<Self, WindowError> {
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(WindowError::HalfWidth);
        }
        if points < 2 {
            return Err(WindowError::Points);
        }
        Ok(Self { half_width, points })
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns evenly spaced x values across the window, endpoints included.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn xs(&self, center: f64) -> Vec<f64> {
        let start = center - self.half_width;
        let stop = center + self.half_width;
        let last = self.points - 1;
        let spacing = (stop - start) / last as f64;

        (0..self.points)
            .map(|i| if i == last { stop } else { start + i as f64 * spacing })
            .collect()
    }
}

/// Plot-ready samples of a function around a root.
///
/// Points where the function is undefined carry a non-finite `y`; plotting
/// layers are expected to skip them.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// `[x, f(x)]` pairs in increasing `x`.
    pub points: Vec<[f64; 2]>,

    /// The root marker, `[root, f(root)]`.
    pub root: [f64; 2],

    /// Legend label for the root marker.
    pub label: String,
}

/// Samples a compiled function for plotting.
pub struct Sampler<'a, F: ?Sized> {
    f: &'a F,
}

impl<'a, F: Function + ?Sized> Sampler<'a, F> {
    #[must_use]
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }

    /// Samples the function across `window`, centered on `root`.
    #[must_use]
    pub fn sample(&self, root: f64, window: &Window) -> Series {
        let xs = window.xs(root);
        let ys = self.f.call_batch(&xs);

        Series {
            points: xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect(),
            root: [root, self.f.call(root)],
            label: root_label(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_window() {
        let window = Window::default();
        assert_relative_eq!(window.half_width(), 10.0);
        assert_eq!(window.points(), 400);
    }

    #[test]
    fn rejects_bad_windows() {
        assert_eq!(Window::new(0.0, 10), Err(WindowError::HalfWidth));
        assert_eq!(Window::new(f64::NAN, 10), Err(WindowError::HalfWidth));
        assert_eq!(Window::new(1.0, 1), Err(WindowError::Points));
    }

    #[test]
    fn xs_include_both_endpoints() {
        let xs = Window::default().xs(1.5);
        assert_eq!(xs.len(), 400);
        assert_relative_eq!(xs[0], -8.5);
        assert_relative_eq!(xs[399], 11.5);
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn samples_function_and_marks_root() {
        let f = |x: f64| x * x - 2.0;
        let root = 2.0_f64.sqrt();
        let window = Window::new(1.0, 5).expect("valid window");

        let series = Sampler::new(&f).sample(root, &window);

        assert_eq!(series.points.len(), 5);
        for [x, y] in &series.points {
            assert_relative_eq!(*y, x * x - 2.0);
        }
        assert_relative_eq!(series.points[2][0], root);
        assert_relative_eq!(series.root[0], root);
        assert!(series.root[1].abs() < 1e-12);
        assert_eq!(series.label, "Root ≈ 1.4142");
    }

    #[test]
    fn undefined_points_are_kept() {
        let f = |x: f64| x.sqrt();
        let window = Window::new(1.0, 3).expect("valid window");
        let series = Sampler::new(&f).sample(0.0, &window);

        assert!(series.points[0][1].is_nan());
        assert_relative_eq!(series.points[2][1], 1.0);
    }
}
