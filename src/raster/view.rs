//! Single-pixel accessors handed out by
//! [`PixelBuffer::view`](super::PixelBuffer::view) and
//! [`PixelBuffer::view_mut`](super::PixelBuffer::view_mut).
//!
//! The coordinate is validated once when the view is created; the view then
//! borrows exactly one slot of the owning buffer.

use std::fmt;

use super::color::{Channel, Color};

/// Read-only view of one pixel
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    slot: &'a Color,
    x: u32,
    y: u32,
}

impl<'a> PixelView<'a> {
    pub(super) fn new(slot: &'a Color, x: u32, y: u32) -> Self {
        Self { slot, x, y }
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn color(&self) -> Color {
        *self.slot
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.slot.r
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.slot.g
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.slot.b
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        self.slot.channel(channel)
    }
}

impl fmt::Display for PixelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r:{} g:{} b:{}", self.red(), self.green(), self.blue())
    }
}

/// Read/write view of one pixel. Setters clamp to 0..=255.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    slot: &'a mut Color,
    x: u32,
    y: u32,
}

impl<'a> PixelViewMut<'a> {
    pub(super) fn new(slot: &'a mut Color, x: u32, y: u32) -> Self {
        Self { slot, x, y }
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn color(&self) -> Color {
        *self.slot
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.slot.r
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.slot.g
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.slot.b
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        self.slot.channel(channel)
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        *self.slot = color;
    }

    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: i32) {
        *self.slot = self.slot.with_channel(channel, value);
    }

    #[inline]
    pub fn set_red(&mut self, value: i32) {
        self.set_channel(Channel::Red, value);
    }

    #[inline]
    pub fn set_green(&mut self, value: i32) {
        self.set_channel(Channel::Green, value);
    }

    #[inline]
    pub fn set_blue(&mut self, value: i32) {
        self.set_channel(Channel::Blue, value);
    }
}
