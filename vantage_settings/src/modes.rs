// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which gesture categories may trigger an exit transition.
///
/// An exit transition (for example a swipe-to-dismiss animation in a photo
/// viewer) is owned by the controller layered on top of the settings; this
/// value only selects which gestures are eligible to start one. See
/// [`crate::Settings::set_exit_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExitType {
    /// Detect both scroll and zoom exit gestures.
    #[default]
    All,
    /// Detect only the scroll-to-exit gesture.
    Scroll,
    /// Detect only the zoom-to-exit gesture.
    Zoom,
    /// Do not detect exit gestures.
    None,
}
