// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use crate::modes::ExitType;

/// Error returned by [`Settings`] setters that reject their input.
///
/// Rejection is atomic: the previously stored value is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// An overzoom factor below `1.0` was supplied.
    OverzoomFactorOutOfRange,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverzoomFactorOutOfRange => write!(f, "overzoom factor cannot be < 1"),
        }
    }
}

impl core::error::Error for SettingsError {}

/// Configuration and gesture policy for a pan/zoom view.
///
/// `Settings` holds the geometry a zoom bounds computation needs (viewport,
/// image, and optional movement area sizes), the configured zoom range, and
/// the policy flags a gesture controller consults when interpreting input.
///
/// Setters are fluent and return `&mut Self` so configuration reads as a
/// chain:
///
/// ```
/// use vantage_settings::Settings;
///
/// let mut settings = Settings::new();
/// settings
///     .set_viewport(1080, 1920)
///     .set_image(3000, 2000)
///     .set_max_zoom(4.0);
/// assert!(settings.has_viewport_size());
/// assert!(settings.has_image_size());
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    // Viewport area.
    viewport_w: u32,
    viewport_h: u32,

    // Optional movement area, used for pan bounds when specified.
    movement_area_w: u32,
    movement_area_h: u32,
    movement_area_specified: bool,

    // Full image size.
    image_w: u32,
    image_h: u32,

    min_zoom: f64,
    max_zoom: f64,
    double_tap_zoom: f64,
    overzoom_factor: f64,

    zoom_enabled: bool,
    rotation_enabled: bool,
    restrict_rotation: bool,

    exit_type: ExitType,

    // Nesting counters; > 0 means the corresponding feature is suppressed.
    gestures_disable_count: i32,
    bounds_disable_count: i32,
}

impl Settings {
    /// Default max zoom level.
    pub const MAX_ZOOM: f64 = 2.0;

    /// Default overzoom factor.
    pub const OVERZOOM_FACTOR: f64 = 2.0;

    /// Default duration for state animations driven by a controller built on
    /// top of these settings.
    pub const ANIMATIONS_DURATION: Duration = Duration::from_millis(300);

    /// Creates settings with default values.
    ///
    /// Zooming is enabled, rotation is disabled, the zoom range is
    /// `0.0..=`[`Settings::MAX_ZOOM`] (a min of zero means "derive from the
    /// fit zoom"), and no sizes are set yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            viewport_w: 0,
            viewport_h: 0,
            movement_area_w: 0,
            movement_area_h: 0,
            movement_area_specified: false,
            image_w: 0,
            image_h: 0,
            min_zoom: 0.0,
            max_zoom: Self::MAX_ZOOM,
            double_tap_zoom: -1.0,
            overzoom_factor: Self::OVERZOOM_FACTOR,
            zoom_enabled: true,
            rotation_enabled: false,
            restrict_rotation: false,
            exit_type: ExitType::All,
            gestures_disable_count: 0,
            bounds_disable_count: 0,
        }
    }

    /// Sets the viewport size.
    ///
    /// Should be kept in sync with the on-screen area the view occupies.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> &mut Self {
        self.viewport_w = width;
        self.viewport_h = height;
        self
    }

    /// Sets the movement area size, the region used to compute pan bounds.
    ///
    /// The viewport size is used instead if no movement area is specified.
    pub fn set_movement_area(&mut self, width: u32, height: u32) -> &mut Self {
        self.movement_area_specified = true;
        self.movement_area_w = width;
        self.movement_area_h = height;
        self
    }

    /// Sets the full image size.
    pub fn set_image(&mut self, width: u32, height: u32) -> &mut Self {
        self.image_w = width;
        self.image_h = height;
        self
    }

    /// Sets the min zoom level.
    ///
    /// Pass `0.0` (the default) to use the zoom level at which the image
    /// exactly fits the viewport.
    pub fn set_min_zoom(&mut self, min_zoom: f64) -> &mut Self {
        self.min_zoom = min_zoom;
        self
    }

    /// Sets the max zoom level.
    ///
    /// Pass `0.0` to use the zoom level at which the image exactly fits the
    /// viewport. Default value is [`Settings::MAX_ZOOM`].
    pub fn set_max_zoom(&mut self, max_zoom: f64) -> &mut Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the double tap zoom level, which should not be greater than the
    /// max zoom level. Values `<= 0.0` mean the max zoom level is used.
    ///
    /// This value is consumed by gesture controllers; the zoom bounds
    /// computation itself ignores it. Default value is `-1.0`.
    pub fn set_double_tap_zoom(&mut self, double_tap_zoom: f64) -> &mut Self {
        self.double_tap_zoom = double_tap_zoom;
        self
    }

    /// Sets the overzoom factor. During an active gesture the zoom level may
    /// transiently exceed the min/max range by up to this factor.
    ///
    /// Factors below `1.0` are rejected with
    /// [`SettingsError::OverzoomFactorOutOfRange`], leaving the stored
    /// factor unchanged. Default value is [`Settings::OVERZOOM_FACTOR`].
    ///
    /// ```
    /// use vantage_settings::{Settings, SettingsError};
    ///
    /// let mut settings = Settings::new();
    /// settings.set_overzoom_factor(2.5).expect("factor is valid");
    /// assert_eq!(
    ///     settings.set_overzoom_factor(0.5).unwrap_err(),
    ///     SettingsError::OverzoomFactorOutOfRange,
    /// );
    /// assert_eq!(settings.overzoom_factor(), 2.5);
    /// ```
    pub fn set_overzoom_factor(&mut self, factor: f64) -> Result<&mut Self, SettingsError> {
        if factor < 1.0 {
            return Err(SettingsError::OverzoomFactorOutOfRange);
        }
        self.overzoom_factor = factor;
        Ok(self)
    }

    /// Sets whether zooming is enabled. Default is `true`.
    pub fn set_zoom_enabled(&mut self, enabled: bool) -> &mut Self {
        self.zoom_enabled = enabled;
        self
    }

    /// Sets whether the rotation gesture is enabled. Default is `false`.
    pub fn set_rotation_enabled(&mut self, enabled: bool) -> &mut Self {
        self.rotation_enabled = enabled;
        self
    }

    /// Sets whether rotation should stick to 90 degree intervals or can be
    /// free. Only applied while [`Settings::is_bounds_restricted`] holds.
    /// Default is `false`.
    pub fn set_restrict_rotation(&mut self, restrict: bool) -> &mut Self {
        self.restrict_rotation = restrict;
        self
    }

    /// Enables or disables exit gesture detection.
    ///
    /// Shorthand for [`Settings::set_exit_type`] with either
    /// [`ExitType::All`] or [`ExitType::None`]. Default is enabled.
    pub fn set_exit_enabled(&mut self, enabled: bool) -> &mut Self {
        self.exit_type = if enabled { ExitType::All } else { ExitType::None };
        self
    }

    /// Sets which gestures may trigger an exit transition. Default value is
    /// [`ExitType::All`].
    pub fn set_exit_type(&mut self, exit_type: ExitType) -> &mut Self {
        self.exit_type = exit_type;
        self
    }

    /// Disables all gestures.
    ///
    /// Calls nest: after calling this N times, [`Settings::enable_gestures`]
    /// must be called N times to re-enable gestures. Useful to temporarily
    /// suppress touch handling during an animation or while content loads.
    pub fn disable_gestures(&mut self) -> &mut Self {
        self.gestures_disable_count += 1;
        self
    }

    /// Re-enables gestures disabled by [`Settings::disable_gestures`].
    ///
    /// The counter is not clamped at zero; unmatched enable calls are
    /// remembered and cancel out later disable calls.
    pub fn enable_gestures(&mut self) -> &mut Self {
        self.gestures_disable_count -= 1;
        self
    }

    /// Disables bounds restrictions.
    ///
    /// Calls nest: after calling this N times, [`Settings::enable_bounds`]
    /// must be called N times to restore restrictions. Useful while an
    /// animation deliberately moves the view outside its usual bounds.
    pub fn disable_bounds(&mut self) -> &mut Self {
        self.bounds_disable_count += 1;
        self
    }

    /// Re-enables bounds restrictions disabled by
    /// [`Settings::disable_bounds`].
    pub fn enable_bounds(&mut self) -> &mut Self {
        self.bounds_disable_count -= 1;
        self
    }

    /// Single-call toggle for bounds restrictions.
    ///
    /// Adjusts the same counter as [`Settings::disable_bounds`] and
    /// [`Settings::enable_bounds`] but floor-clamps it at zero, so that a
    /// call made during setup cannot leave the counter negative. Mixing this
    /// with the counted calls after setup diverges from pure counting.
    #[deprecated(note = "use `disable_bounds` / `enable_bounds` instead")]
    pub fn set_restrict_bounds(&mut self, restrict: bool) -> &mut Self {
        self.bounds_disable_count += if restrict { -1 } else { 1 };
        if self.bounds_disable_count < 0 {
            // In case someone explicitly used this method during setup.
            self.bounds_disable_count = 0;
        }
        self
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn viewport_w(&self) -> u32 {
        self.viewport_w
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn viewport_h(&self) -> u32 {
        self.viewport_h
    }

    /// Movement area width, falling back to the viewport width when no
    /// movement area was specified.
    #[must_use]
    pub fn movement_area_w(&self) -> u32 {
        if self.movement_area_specified {
            self.movement_area_w
        } else {
            self.viewport_w
        }
    }

    /// Movement area height, falling back to the viewport height when no
    /// movement area was specified.
    #[must_use]
    pub fn movement_area_h(&self) -> u32 {
        if self.movement_area_specified {
            self.movement_area_h
        } else {
            self.viewport_h
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn image_w(&self) -> u32 {
        self.image_w
    }

    /// Image height in pixels.
    #[must_use]
    pub fn image_h(&self) -> u32 {
        self.image_h
    }

    /// Configured min zoom level. Values `<= 0.0` mean the fit zoom is used.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Configured max zoom level. Values `<= 0.0` mean the fit zoom is used.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Configured double tap zoom level. Values `<= 0.0` mean the max zoom
    /// level is used.
    #[must_use]
    pub fn double_tap_zoom(&self) -> f64 {
        self.double_tap_zoom
    }

    /// Configured overzoom factor.
    #[must_use]
    pub fn overzoom_factor(&self) -> f64 {
        self.overzoom_factor
    }

    /// Whether zooming is currently possible.
    ///
    /// Requires both the zoom flag and [`Settings::is_gestures_enabled`].
    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.is_gestures_enabled() && self.zoom_enabled
    }

    /// Whether the rotation gesture is currently possible.
    #[must_use]
    pub fn is_rotation_enabled(&self) -> bool {
        self.is_gestures_enabled() && self.rotation_enabled
    }

    /// Whether rotation sticks to 90 degree intervals.
    #[must_use]
    pub fn is_restrict_rotation(&self) -> bool {
        self.restrict_rotation
    }

    /// Whether double tap zooming is currently possible.
    #[must_use]
    pub fn is_double_tap_enabled(&self) -> bool {
        self.is_gestures_enabled() && self.zoom_enabled
    }

    /// Whether any exit gesture may currently trigger an exit transition.
    #[must_use]
    pub fn is_exit_enabled(&self) -> bool {
        self.exit_type() != ExitType::None
    }

    /// Which gestures may currently trigger an exit transition.
    ///
    /// Reports [`ExitType::None`] while gestures are disabled.
    #[must_use]
    pub fn exit_type(&self) -> ExitType {
        if self.is_gestures_enabled() {
            self.exit_type
        } else {
            ExitType::None
        }
    }

    /// Whether gestures are enabled, taking nested
    /// [`Settings::disable_gestures`] calls into account.
    #[must_use]
    pub fn is_gestures_enabled(&self) -> bool {
        self.gestures_disable_count <= 0
    }

    /// Whether bounds restrictions apply, taking nested
    /// [`Settings::disable_bounds`] calls into account.
    #[must_use]
    pub fn is_bounds_restricted(&self) -> bool {
        self.bounds_disable_count <= 0
    }

    /// Whether at least one of the state-changing gestures (zoom or
    /// rotation) is currently possible.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.is_gestures_enabled() && (self.zoom_enabled || self.rotation_enabled)
    }

    /// Whether both image dimensions are known and non-zero.
    #[must_use]
    pub fn has_image_size(&self) -> bool {
        self.image_w != 0 && self.image_h != 0
    }

    /// Whether both viewport dimensions are known and non-zero.
    #[must_use]
    pub fn has_viewport_size(&self) -> bool {
        self.viewport_w != 0 && self.viewport_h != 0
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
