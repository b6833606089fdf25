// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_zoom --heading-base-level=0

//! Vantage Zoom: zoom bounds for gesture-driven pan/zoom views.
//!
//! Given the geometry held in a [`vantage_settings::Settings`] and the
//! current rotation angle, [`ZoomBounds`] derives the legal zoom range for
//! an image displayed inside a viewport:
//!
//! - the **fit zoom**, the largest uniform scale at which the (possibly
//!   rotated) image fits entirely inside the viewport,
//! - the **min** and **max** zoom levels, resolved from the configured range
//!   and repaired so that `min <= fit <= max` always holds,
//! - a [`ZoomBounds::restrict`] operation that clamps a candidate zoom into
//!   the range, optionally widened by an overzoom factor during active
//!   gestures.
//!
//! Recomputation is cheap and idempotent, so a gesture or animation
//! controller can call [`ZoomBounds::update`] on every interaction frame and
//! read the derived levels back.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_settings::Settings;
//! use vantage_zoom::ZoomBounds;
//!
//! let mut settings = Settings::new();
//! settings.set_viewport(1000, 1000).set_image(2000, 1000);
//!
//! let mut bounds = ZoomBounds::new();
//! bounds.update(&settings, 0.0);
//!
//! assert_eq!(bounds.fit_zoom(), 0.5);
//! assert_eq!(bounds.min_zoom(), 0.5);
//! assert_eq!(bounds.max_zoom(), 2.0);
//!
//! // Clamp a candidate zoom during a pinch, allowing transient overzoom.
//! let zoom = bounds.restrict(6.0, settings.overzoom_factor());
//! assert_eq!(zoom, 4.0);
//! ```
//!
//! ## Design notes
//!
//! - The engine holds no reference to the settings; both the settings and
//!   the rotation are supplied per [`ZoomBounds::update`] call, so ownership
//!   stays with the caller.
//! - Zero-sized images or viewports are not errors. They signal "no
//!   meaningful bounds yet" (for example before the image has loaded) and
//!   produce the neutral range `min == max == fit == 1.0`.
//! - Rotation is taken into account by measuring the axis-aligned bounding
//!   box of the rotated image rectangle, so a quarter turn of a landscape
//!   image fits it by its (rotated) width.
//! - The [`math`] module exposes the range [`math::restrict`] helper and the
//!   tolerance comparison used for rotation angles, for controllers that
//!   need the same semantics.
//!
//! This crate is `no_std`.

#![no_std]

pub mod math;
mod zoom_bounds;

pub use zoom_bounds::ZoomBounds;
