//! Schematic page aggregate.

use super::Record;

/// A parsed schematic page.
///
/// The header mirrors the page-setup dialog of the originating tool; the
/// record list carries everything placed on the page (wires, instances,
/// annotations) in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub name: String,
    pub page_size: String,
    /// POSIX seconds.
    pub create_date_time: u32,
    /// POSIX seconds.
    pub modify_date_time: u32,
    pub width: u32,
    pub height: u32,
    /// Grid pitch between adjacent pins.
    pub pin_to_pin: u32,
    pub horizontal_count: u16,
    pub vertical_count: u16,
    pub horizontal_width: u32,
    pub vertical_width: u32,
    pub horizontal_char: u32,
    pub horizontal_ascending: bool,
    pub vertical_char: u32,
    pub vertical_ascending: bool,
    pub is_metric: bool,
    pub border_displayed: bool,
    pub border_printed: bool,
    pub grid_ref_displayed: bool,
    pub grid_ref_printed: bool,
    pub titleblock_displayed: bool,
    pub titleblock_printed: bool,
    pub ansi_grid_refs: bool,
    /// Name/value-like string entries from the first variable tail.
    pub string_refs: Vec<String>,
    /// Placed records in stored order.
    pub records: Vec<Record>,
}

impl Page {
    /// Whether the page uses metric units.
    pub fn is_metric(&self) -> bool {
        self.is_metric
    }
}
