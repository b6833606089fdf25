// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

use vantage_settings::Settings;

use crate::math;

/// Derived zoom range for an image displayed inside a viewport.
///
/// `ZoomBounds` caches the min, max, and fit zoom levels computed by the
/// most recent [`ZoomBounds::update`] call. The triple is recomputed from
/// scratch on every update; the struct carries no other state, so redundant
/// updates are harmless and cheap.
///
/// After a successful update, `min_zoom() <= fit_zoom() <= max_zoom()`
/// always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    min_zoom: f64,
    max_zoom: f64,
    fit_zoom: f64,
}

impl ZoomBounds {
    /// Creates zoom bounds in the neutral state.
    ///
    /// The neutral range `min == max == fit == 1.0` is the same one produced
    /// for degenerate geometry, so reads before the first update behave as
    /// if no image had been loaded yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 1.0,
            fit_zoom: 1.0,
        }
    }

    /// Recomputes the zoom range from the current settings and rotation.
    ///
    /// `rotation_degrees` is the image rotation owned by the caller's
    /// transform state. Non-zero rotation (beyond [`math::EPSILON`]) fits
    /// the axis-aligned bounding box of the rotated image instead of the
    /// image itself, so a quarter turn swaps the roles of width and height.
    ///
    /// If any viewport or image dimension is zero the range collapses to
    /// the neutral `1.0` triple; this is a defined state, not an error.
    ///
    /// Returns `&mut Self` so derived levels can be read off the same
    /// expression:
    ///
    /// ```
    /// use vantage_settings::Settings;
    /// use vantage_zoom::ZoomBounds;
    ///
    /// let mut settings = Settings::new();
    /// settings.set_viewport(100, 100).set_image(400, 200);
    ///
    /// let fit = ZoomBounds::new().update(&settings, 0.0).fit_zoom();
    /// assert_eq!(fit, 0.25);
    /// ```
    pub fn update(&mut self, settings: &Settings, rotation_degrees: f64) -> &mut Self {
        let mut image_w = f64::from(settings.image_w());
        let mut image_h = f64::from(settings.image_h());
        let area_w = f64::from(settings.viewport_w());
        let area_h = f64::from(settings.viewport_h());

        if image_w == 0.0 || image_h == 0.0 || area_w == 0.0 || area_h == 0.0 {
            self.min_zoom = 1.0;
            self.max_zoom = 1.0;
            self.fit_zoom = 1.0;
            return self;
        }

        let mut min_zoom = settings.min_zoom();
        let mut max_zoom = settings.max_zoom();

        if !math::nearly_equal(rotation_degrees, 0.0) {
            // Fit the axis-aligned bounding box of the rotated image.
            let rotated = Affine::rotate(rotation_degrees.to_radians())
                .transform_rect_bbox(Rect::new(0.0, 0.0, image_w, image_h));
            image_w = rotated.width();
            image_h = rotated.height();
        }

        self.fit_zoom = (area_w / image_w).min(area_h / image_h);

        if min_zoom <= 0.0 {
            min_zoom = self.fit_zoom;
        }
        if max_zoom <= 0.0 {
            max_zoom = self.fit_zoom;
        }

        // Ordering repairs; each step may override the previous one.
        if self.fit_zoom > max_zoom {
            max_zoom = self.fit_zoom;
        }
        if min_zoom > max_zoom {
            min_zoom = max_zoom;
        }
        if self.fit_zoom < min_zoom {
            min_zoom = self.fit_zoom;
        }

        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Min zoom level derived by the most recent update.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Max zoom level derived by the most recent update.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Zoom level at which the image exactly fits the viewport, derived by
    /// the most recent update.
    #[must_use]
    pub fn fit_zoom(&self) -> f64 {
        self.fit_zoom
    }

    /// Restricts `zoom` into `[min_zoom / extra_zoom, max_zoom * extra_zoom]`.
    ///
    /// `extra_zoom` widens the range for transient overshoot; pass the
    /// configured overzoom factor during an active gesture, or `1.0` for a
    /// hard clamp. Callers keep `extra_zoom >= 1.0`; factor validity is
    /// enforced when the settings are configured, not here.
    #[must_use]
    pub fn restrict(&self, zoom: f64, extra_zoom: f64) -> f64 {
        math::restrict(
            zoom,
            self.min_zoom / extra_zoom,
            self.max_zoom * extra_zoom,
        )
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use vantage_settings::Settings;

    use super::ZoomBounds;

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
    }

    #[test]
    fn fit_zoom_uses_the_tighter_axis() {
        let mut settings = Settings::new();
        settings.set_viewport(1000, 1000).set_image(2000, 1000);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 0.0);

        // Configured min of zero resolves to the fit zoom; the default max
        // already exceeds it.
        assert_eq!(bounds.fit_zoom(), 0.5);
        assert_eq!(bounds.min_zoom(), 0.5);
        assert_eq!(bounds.max_zoom(), 2.0);
    }

    #[test]
    fn configured_max_below_fit_is_raised_to_fit() {
        let mut settings = Settings::new();
        settings
            .set_viewport(1000, 1000)
            .set_image(2000, 1000)
            .set_max_zoom(0.3);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 0.0);

        assert_eq!(bounds.fit_zoom(), 0.5);
        assert_eq!(bounds.min_zoom(), 0.5);
        assert_eq!(bounds.max_zoom(), 0.5);
    }

    #[test]
    fn configured_min_above_fit_is_lowered_to_fit() {
        let mut settings = Settings::new();
        settings
            .set_viewport(1000, 1000)
            .set_image(2000, 1000)
            .set_min_zoom(0.7);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 0.0);

        assert_eq!(bounds.min_zoom(), 0.5);
        assert_eq!(bounds.fit_zoom(), 0.5);
        assert_eq!(bounds.max_zoom(), 2.0);
    }

    #[test]
    fn inverted_configured_range_is_repaired() {
        let mut settings = Settings::new();
        settings
            .set_viewport(1000, 1000)
            .set_image(1000, 1000)
            .set_min_zoom(3.0)
            .set_max_zoom(2.0);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 0.0);

        // fit == 1.0; min is first lowered to max, then to fit.
        assert_eq!(bounds.fit_zoom(), 1.0);
        assert_eq!(bounds.min_zoom(), 1.0);
        assert_eq!(bounds.max_zoom(), 2.0);
        assert!(bounds.min_zoom() <= bounds.fit_zoom());
        assert!(bounds.fit_zoom() <= bounds.max_zoom());
    }

    #[test]
    fn zero_dimensions_yield_neutral_bounds() {
        let cases: [(u32, u32, u32, u32); 4] =
            [(0, 1000, 500, 500), (1000, 0, 500, 500), (500, 500, 0, 1000), (500, 500, 1000, 0)];
        for (image_w, image_h, viewport_w, viewport_h) in cases {
            let mut settings = Settings::new();
            settings
                .set_image(image_w, image_h)
                .set_viewport(viewport_w, viewport_h);

            let mut bounds = ZoomBounds::new();
            bounds.update(&settings, 0.0);

            assert_eq!(bounds.min_zoom(), 1.0);
            assert_eq!(bounds.max_zoom(), 1.0);
            assert_eq!(bounds.fit_zoom(), 1.0);
        }
    }

    #[test]
    fn new_bounds_start_in_the_neutral_state() {
        let bounds = ZoomBounds::new();
        assert_eq!(bounds.min_zoom(), 1.0);
        assert_eq!(bounds.max_zoom(), 1.0);
        assert_eq!(bounds.fit_zoom(), 1.0);
    }

    #[test]
    fn quarter_turns_swap_image_dimensions() {
        let mut settings = Settings::new();
        settings.set_viewport(1000, 1000).set_image(2000, 1000);

        let mut swapped = Settings::new();
        swapped.set_viewport(1000, 1000).set_image(1000, 2000);

        let mut rotated = ZoomBounds::new();
        let mut reference = ZoomBounds::new();
        for angle in [90.0, 270.0, -90.0] {
            rotated.update(&settings, angle);
            reference.update(&swapped, 0.0);
            assert_near(rotated.fit_zoom(), reference.fit_zoom());
        }
    }

    #[test]
    fn half_turn_keeps_fit_zoom() {
        let mut settings = Settings::new();
        settings.set_viewport(1000, 800).set_image(2000, 1000);

        let mut bounds = ZoomBounds::new();
        let plain = bounds.update(&settings, 0.0).fit_zoom();
        let turned = bounds.update(&settings, 180.0).fit_zoom();
        assert_near(plain, turned);
    }

    #[test]
    fn free_rotation_grows_the_bounding_box() {
        let mut settings = Settings::new();
        settings.set_viewport(1000, 1000).set_image(1000, 1000);

        let mut bounds = ZoomBounds::new();
        let plain = bounds.update(&settings, 0.0).fit_zoom();
        let tilted = bounds.update(&settings, 45.0).fit_zoom();

        // A unit square rotated 45 degrees spans sqrt(2) on both axes.
        assert!(tilted < plain);
        assert_near(tilted, 1.0 / core::f64::consts::SQRT_2);
    }

    #[test]
    fn tiny_rotation_is_treated_as_zero() {
        let mut settings = Settings::new();
        settings.set_viewport(1000, 1000).set_image(2000, 1000);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 0.0005);
        assert_eq!(bounds.fit_zoom(), 0.5);
    }

    #[test]
    fn restrict_applies_the_overzoom_interval() {
        let mut settings = Settings::new();
        settings.set_viewport(1000, 1000).set_image(2000, 1000);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 0.0);

        // Range is [0.5, 2.0]; a factor of 2 widens it to [0.25, 4.0].
        assert_eq!(bounds.restrict(6.0, 2.0), 4.0);
        assert_eq!(bounds.restrict(0.1, 2.0), 0.25);
        assert_eq!(bounds.restrict(1.0, 2.0), 1.0);

        // A unit factor is a hard clamp.
        assert_eq!(bounds.restrict(6.0, 1.0), 2.0);
        assert_eq!(bounds.restrict(0.1, 1.0), 0.5);
    }

    #[test]
    fn update_is_idempotent() {
        let mut settings = Settings::new();
        settings.set_viewport(1280, 720).set_image(4000, 3000);

        let mut bounds = ZoomBounds::new();
        bounds.update(&settings, 30.0);
        let first = bounds;
        bounds.update(&settings, 30.0);
        assert_eq!(first, bounds);
    }
}
