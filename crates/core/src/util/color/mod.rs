// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub type RgbColorCode = u32;

/// An opaque 24-bit color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor(RgbColorCode); // 0xRRGGBB

impl RgbColor {
    pub const RED_MASK: RgbColorCode = 0xff_00_00;
    pub const GREEN_MASK: RgbColorCode = 0x00_ff_00;
    pub const BLUE_MASK: RgbColorCode = 0x00_00_ff;

    /// Create a color from its code.
    ///
    /// Bits above the lower 24 bits are discarded.
    #[must_use]
    pub const fn new(code: RgbColorCode) -> Self {
        Self(code & (Self::RED_MASK | Self::GREEN_MASK | Self::BLUE_MASK))
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 & Self::RED_MASK) >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 & Self::GREEN_MASK) >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & Self::BLUE_MASK) as u8
    }
}
