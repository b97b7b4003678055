//! Reader for the page composite.
//!
//! A page stream is one long header mirroring the tool's page-setup dialog,
//! followed by several variable-length tail sections and the records placed
//! on the page.

use crate::error::Result;
use crate::notification::NotificationType;
use crate::records::Page;

use super::RecordReader;

impl RecordReader<'_> {
    /// Read a whole page stream body.  The caller asserts EOF afterwards.
    pub fn read_page(&mut self, name: &str) -> Result<Page> {
        let mut page = Page {
            name: name.to_string(),
            ..Default::default()
        };

        self.ds.print_unknown(21, "page header")?;
        self.read_preamble()?;

        page.name = self.ds.read_string_zero_terminated()?;
        page.page_size = self.ds.read_string_zero_terminated()?;
        page.create_date_time = self.ds.read_u32()?;
        page.modify_date_time = self.ds.read_u32()?;
        self.ds.print_unknown(16, "page setup block")?;
        page.width = self.ds.read_u32()?;
        page.height = self.ds.read_u32()?;
        page.pin_to_pin = self.ds.read_u32()?;
        self.ds.print_unknown(2, "page pad")?;
        page.horizontal_count = self.ds.read_u16()?;
        page.vertical_count = self.ds.read_u16()?;
        self.ds.print_unknown(2, "page pad")?;
        page.horizontal_width = self.ds.read_u32()?;
        page.vertical_width = self.ds.read_u32()?;
        self.ds.print_unknown(48, "page grid block")?;
        page.horizontal_char = self.ds.read_u32()?;
        self.ds.print_unknown(4, "page pad")?;
        page.horizontal_ascending = self.ds.read_u32()? != 0;
        page.vertical_char = self.ds.read_u32()?;
        self.ds.print_unknown(4, "page pad")?;
        page.vertical_ascending = self.ds.read_u32()? != 0;
        page.is_metric = self.ds.read_u32()? != 0;
        page.border_displayed = self.ds.read_u32()? != 0;
        page.border_printed = self.ds.read_u32()? != 0;
        page.grid_ref_displayed = self.ds.read_u32()? != 0;
        page.grid_ref_printed = self.ds.read_u32()? != 0;
        page.titleblock_displayed = self.ds.read_u32()? != 0;
        page.titleblock_printed = self.ds.read_u32()? != 0;
        page.ansi_grid_refs = self.ds.read_u32()? != 0;

        let len_a = self.ds.read_u16()?;
        for _ in 0..len_a {
            self.ds.print_unknown(8, "page tail a entry")?;
        }

        let len0 = self.ds.read_u16()?;
        for _ in 0..len0 {
            self.ds.print_unknown(32, "page tail 0 entry")?;
        }

        let len1 = self.ds.read_u16()?;
        for _ in 0..len1 {
            page.string_refs.push(self.ds.read_string_zero_terminated()?);
            self.ds.print_unknown(4, "page tail 1 entry")?;
        }

        let len2 = self.ds.read_u16()?;
        for _ in 0..len2 {
            page.records.push(self.read_record(&[])?);
        }

        let len3 = self.ds.read_u16()?;
        for i in 0..len3 {
            if i == 0 {
                // The first entry uses a "very long" prefix form that is not
                // implemented yet; 47 opaque bytes stand in for it and the
                // synthetic tag 0x0d is recorded instead of a record.
                let offset = self.ds.current_offset();
                self.ds.print_unknown(47, "very long prefix form")?;
                self.ds.note_at(
                    NotificationType::NotImplemented,
                    offset,
                    "page record with very long prefix form (tag 0x0d) skipped",
                );
            } else {
                page.records.push(self.read_record(&[])?);
            }
        }

        self.ds.print_unknown(10, "page trailer")?;

        let len_x = self.ds.read_u16()?;
        for _ in 0..len_x {
            page.records.push(self.read_record(&[])?);
        }

        Ok(page)
    }
}
