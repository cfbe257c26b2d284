//! Selection state: the current color, its byte channels, and the matching
//! named color, kept consistent across every update.
//!
//! There is a single source of truth, the canonical [`Color`]. Channel bytes
//! and the HSB view are projections of it; the named-color link is the
//! selection pointer of the owned [`SelectionList`].
//!
//! The color and the list selection feed each other. Both directions are
//! equality-gated so neither can re-trigger the other:
//!
//! - color → list: the pointer only moves when the linked entry's color no
//!   longer matches, and [`SelectionList::set_selected`] ignores no-op moves.
//! - list → color: the color is only written when the newly selected entry's
//!   color differs from the current one.

use crate::color::{from_byte, Channel, Color};
use crate::color_wheel::WheelRaster;
use crate::error::{ColorError, Result};
use crate::hsb::HsbColor;
use crate::named::NamedColor;
use crate::observer::{Observers, SubscriptionId};
use crate::selection_list::{ListChange, SelectionList};

/// What changed on a [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionChange {
    /// The canonical color changed.
    Color,
    /// The byte value of one channel changed.
    Channel(Channel),
}

/// Synchronized color selection.
///
/// Every mutation runs to completion, notifications included, before it
/// returns. Observers receive [`SelectionChange`]s; list observers (see
/// [`subscribe_colors`](Self::subscribe_colors)) receive [`ListChange`]s.
#[derive(Debug)]
pub struct SelectionState {
    color: Color,
    colors: SelectionList<&'static NamedColor>,
    observers: Observers<SelectionChange>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Starts at opaque black.
    pub fn new() -> Self {
        Self::with_color(Color::BLACK)
    }

    pub fn with_color(color: Color) -> Self {
        let mut state = Self {
            color,
            colors: SelectionList::new(NamedColor::all()),
            observers: Observers::new(),
        };
        let index = NamedColor::from_color(color).and_then(|named| state.index_of(named));
        state.colors.set_selected(index);
        state
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn color(&self) -> Color {
        self.color
    }

    /// HSB view, recomputed from the current color.
    pub fn hsb(&self) -> HsbColor {
        HsbColor::from(self.color)
    }

    /// Byte value (0–255) of a channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        self.color.channel_byte(channel)
    }

    pub fn red(&self) -> u8 {
        self.channel(Channel::Red)
    }

    pub fn green(&self) -> u8 {
        self.channel(Channel::Green)
    }

    pub fn blue(&self) -> u8 {
        self.channel(Channel::Blue)
    }

    pub fn alpha(&self) -> u8 {
        self.channel(Channel::Alpha)
    }

    /// Uppercase hex of the current color.
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// Named entry linked to the current color, if any.
    ///
    /// When present its color is exactly the current color.
    pub fn named_color(&self) -> Option<&'static NamedColor> {
        self.colors.selected().copied()
    }

    /// The named-color list, sorted by name.
    pub fn colors(&self) -> &SelectionList<&'static NamedColor> {
        &self.colors
    }

    // ── Writes ───────────────────────────────────────────────────────────

    /// Replace the current color.
    ///
    /// Returns `false` (and notifies nothing) if `color` is exactly the
    /// current color.
    pub fn set_color(&mut self, color: Color) -> bool {
        if color == self.color {
            return false;
        }
        let old = self.color;
        self.color = color;
        log::debug!("Selection: color {} -> {}", old.to_hex(), color.to_hex());

        self.link_named_color();

        self.notify(SelectionChange::Color);
        for channel in Channel::ALL {
            if old.channel_byte(channel) != color.channel_byte(channel) {
                self.notify(SelectionChange::Channel(channel));
            }
        }
        true
    }

    /// Set one channel from a byte, leaving the other three untouched.
    pub fn set_channel(&mut self, channel: Channel, value: u8) -> bool {
        let value = from_byte(value);
        if value == self.color.channel(channel) {
            return false;
        }
        self.set_color(self.color.with_channel(channel, value))
    }

    /// [`set_channel`](Self::set_channel) for unvalidated integer input.
    pub fn try_set_channel(&mut self, channel: Channel, value: i64) -> Result<bool> {
        let byte =
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })?;
        Ok(self.set_channel(channel, byte))
    }

    pub fn set_hsb(&mut self, hsb: HsbColor) -> bool {
        self.set_color(hsb.to_color())
    }

    /// Set the color from hex text (see [`Color::from_hex`]).
    pub fn set_hex(&mut self, hex: &str) -> Result<bool> {
        let color: Color = hex.parse()?;
        Ok(self.set_color(color))
    }

    /// Apply the wheel color under `(x, y)`.
    ///
    /// Returns the picked color, or `None` when the point misses the disk
    /// (the selection is then left alone).
    pub fn pick_from_wheel(&mut self, raster: &WheelRaster, x: f64, y: f64) -> Option<Color> {
        let picked = raster.pick(x, y)?;
        self.set_color(picked);
        Some(picked)
    }

    /// Move the named-color list selection, as a list view would.
    ///
    /// Selecting an entry whose color differs from the current color makes
    /// it the current color. Clearing the selection leaves the color alone.
    pub fn select_named(&mut self, index: Option<usize>) -> bool {
        if !self.colors.set_selected(index) {
            return false;
        }
        if let Some(named) = self.colors.selected().copied() {
            if named.color() != self.color {
                self.set_color(named.color());
            }
        }
        true
    }

    /// [`select_named`](Self::select_named) by entry name.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.colors.position(|named| named.name() == name) {
            Some(index) => self.select_named(Some(index)),
            None => false,
        }
    }

    // ── Observers ────────────────────────────────────────────────────────

    pub fn subscribe(&mut self, callback: impl FnMut(&SelectionChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Observe the named-color list (selection moves and re-sorts).
    pub fn subscribe_colors(&mut self, callback: impl FnMut(&ListChange) + 'static) -> SubscriptionId {
        self.colors.subscribe(callback)
    }

    pub fn unsubscribe_colors(&mut self, id: SubscriptionId) -> bool {
        self.colors.unsubscribe(id)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn index_of(&self, named: &'static NamedColor) -> Option<usize> {
        self.colors.position(|entry| std::ptr::eq(*entry, named))
    }

    /// Point the list at the entry matching the current color.
    ///
    /// An already-linked entry with the same value is kept, so choosing
    /// `Cyan` from the list is not rewritten to `Aqua`.
    fn link_named_color(&mut self) {
        let found = NamedColor::from_color(self.color);
        let keep = match (found, self.colors.selected()) {
            (Some(found), Some(current)) => current.color() == found.color(),
            _ => false,
        };
        if keep {
            return;
        }
        let index = found.and_then(|named| self.index_of(named));
        if self.colors.set_selected(index) {
            log::debug!(
                "Selection: named color -> {}",
                found.map_or("none", |named| named.name())
            );
        }
    }

    fn notify(&mut self, change: SelectionChange) {
        log::trace!("Selection: {:?}", change);
        self.observers.notify(&change);
    }
}
