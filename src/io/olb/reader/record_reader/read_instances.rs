//! Readers for page-level records: wires, instances, annotations.

use crate::error::{OlbError, Result};
use crate::records::{
    Alias, BusEntry, GraphicBoxInst, GraphicCommentTextInst, PartInst, SthInPages0, T0x10, T0x1f,
    WireBus, WireScalar,
};
use crate::types::{Color, LineStyle, LineWidth, Rotation};

use super::RecordReader;

/// `byte_offset` value of a wire record that carries two pad bytes instead
/// of a nested-record list.
const WIRE_PLAIN_OFFSET: u32 = 0x3d;

impl RecordReader<'_> {
    fn read_wire_head(&mut self) -> Result<(u32, Color, i32, i32, i32, i32)> {
        let db_id = self.ds.read_u32()?;
        self.ds.print_unknown(4, "wire header")?;
        let color_offset = self.ds.current_offset();
        let color = Color::from_raw(self.ds.read_u32()?, color_offset)?;
        let start_x = self.ds.read_i32()?;
        let start_y = self.ds.read_i32()?;
        let end_x = self.ds.read_i32()?;
        let end_y = self.ds.read_i32()?;
        self.ds.print_unknown(1, "wire flag")?;
        Ok((db_id, color, start_x, start_y, end_x, end_y))
    }

    fn read_wire_tail(&mut self) -> Result<(LineWidth, LineStyle)> {
        self.ds.print_unknown(2, "wire trailer")?;
        let offset = self.ds.current_offset();
        let line_width = LineWidth::from_raw(self.ds.read_u32()?, offset)?;
        let offset = self.ds.current_offset();
        let line_style = LineStyle::from_raw(self.ds.read_u32()?, offset)?;
        Ok((line_width, line_style))
    }

    /// `WireScalar`.  The region between head and tail depends on the byte
    /// offset of the wire's own standard prefix: `0x3D` means two pad bytes,
    /// anything larger means a counted list of nested records, anything
    /// smaller means nothing at all.
    pub fn read_wire_scalar(&mut self) -> Result<WireScalar> {
        let byte_offset = self.last_byte_offset;
        let (db_id, color, start_x, start_y, end_x, end_y) = self.read_wire_head()?;

        let mut children = Vec::new();
        if byte_offset == WIRE_PLAIN_OFFSET {
            self.ds.print_unknown(2, "wire pad")?;
        } else if byte_offset > WIRE_PLAIN_OFFSET {
            let len = self.ds.read_u16()?;
            for _ in 0..len {
                children.push(self.read_record(&[])?);
            }
        }

        let (line_width, line_style) = self.read_wire_tail()?;
        Ok(WireScalar {
            db_id,
            color,
            start_x,
            start_y,
            end_x,
            end_y,
            children,
            line_width,
            line_style,
        })
    }

    /// `WireBus`: a wire head and tail with no nested-record region.
    pub fn read_wire_bus(&mut self) -> Result<WireBus> {
        let (db_id, color, start_x, start_y, end_x, end_y) = self.read_wire_head()?;
        let (line_width, line_style) = self.read_wire_tail()?;
        Ok(WireBus {
            db_id,
            color,
            start_x,
            start_y,
            end_x,
            end_y,
            line_width,
            line_style,
        })
    }

    /// `PartInst`: placed part with its display properties.
    pub fn read_part_inst(&mut self) -> Result<PartInst> {
        self.ds.print_unknown(8, "part inst header")?;
        let name = self.ds.read_string_zero_terminated()?;
        let ref_des = self.ds.read_string_zero_terminated()?;
        let x = self.ds.read_i32()?;
        let y = self.ds.read_i32()?;
        let rot_offset = self.ds.current_offset();
        let rotation = Rotation::from_raw(self.ds.read_u8()? as u32, rot_offset)?;
        self.ds.print_unknown(2, "part inst flags")?;
        let disp_count = self.ds.read_u16()?;
        let mut display_props = Vec::with_capacity(disp_count as usize);
        for _ in 0..disp_count {
            display_props.push(self.read_display_prop_entry()?);
        }
        Ok(PartInst {
            name,
            ref_des,
            x,
            y,
            rotation,
            display_props,
        })
    }

    /// `Alias`: a placed net name.
    pub fn read_alias(&mut self) -> Result<Alias> {
        let loc_x = self.ds.read_i32()?;
        let loc_y = self.ds.read_i32()?;
        let offset = self.ds.current_offset();
        let color = Color::from_raw(self.ds.read_u32()?, offset)?;
        let offset = self.ds.current_offset();
        let rotation = Rotation::from_raw(self.ds.read_u32()?, offset)?;
        let idx_offset = self.ds.current_offset();
        let text_font_idx = self.ds.read_u32()?;
        if text_font_idx as usize > self.lib.font_count() {
            return Err(OlbError::InvariantViolated {
                what: "text font index out of range",
                offset: idx_offset,
            });
        }
        let name = self.ds.read_string_zero_terminated()?;
        Ok(Alias {
            loc_x,
            loc_y,
            color,
            rotation,
            text_font_idx,
            name,
        })
    }

    /// `GraphicBoxInst`.
    pub fn read_graphic_box_inst(&mut self) -> Result<GraphicBoxInst> {
        let db_id = self.ds.read_u32()?;
        let loc_x = self.ds.read_i32()?;
        let loc_y = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let offset = self.ds.current_offset();
        let color = Color::from_raw(self.ds.read_u32()?, offset)?;
        self.ds.print_unknown(4, "graphic box trailer")?;
        Ok(GraphicBoxInst {
            db_id,
            loc_x,
            loc_y,
            x2,
            y2,
            color,
        })
    }

    /// `GraphicCommentTextInst`.
    pub fn read_graphic_comment_text_inst(&mut self) -> Result<GraphicCommentTextInst> {
        let db_id = self.ds.read_u32()?;
        let loc_x = self.ds.read_i32()?;
        let loc_y = self.ds.read_i32()?;
        let idx_offset = self.ds.current_offset();
        let text_font_idx = self.ds.read_u16()?;
        if text_font_idx as usize > self.lib.font_count() {
            return Err(OlbError::InvariantViolated {
                what: "text font index out of range",
                offset: idx_offset,
            });
        }
        let text = self.ds.read_string_zero_terminated()?;
        Ok(GraphicCommentTextInst {
            db_id,
            loc_x,
            loc_y,
            text_font_idx,
            text,
        })
    }

    /// `BusEntry`.
    pub fn read_bus_entry(&mut self) -> Result<BusEntry> {
        let offset = self.ds.current_offset();
        let color = Color::from_raw(self.ds.read_u32()?, offset)?;
        self.ds.print_unknown(4, "bus entry header")?;
        let start_x = self.ds.read_i32()?;
        let start_y = self.ds.read_i32()?;
        let end_x = self.ds.read_i32()?;
        let end_y = self.ds.read_i32()?;
        Ok(BusEntry {
            color,
            start_x,
            start_y,
            end_x,
            end_y,
        })
    }

    /// Tag 0x10: body not yet reverse-engineered, fixed 16 bytes.
    pub fn read_t0x10(&mut self) -> Result<T0x10> {
        self.ds.print_unknown(16, "t0x10 body")?;
        Ok(T0x10)
    }

    /// Tag 0x1f: part naming strings.
    pub fn read_t0x1f(&mut self) -> Result<T0x1f> {
        let name = self.ds.read_string_zero_terminated()?;
        let unknown1 = self.ds.read_string_zero_terminated()?;
        let ref_des = self.ds.read_string_zero_terminated()?;
        let unknown2 = self.ds.read_string_zero_terminated()?;
        let pcb_footprint = self.ds.read_string_zero_terminated()?;
        self.ds.print_unknown(2, "t0x1f trailer")?;
        Ok(T0x1f {
            name,
            unknown1,
            ref_des,
            unknown2,
            pcb_footprint,
        })
    }

    /// `SthInPages0`: a primitive list with an ambiguous tail.
    ///
    /// The tail is an 8-byte coordinate pair exactly when eight bytes remain
    /// to the next checkpoint; otherwise the remainder is skipped to the
    /// checkpoint.  Observed behaviour, kept as is.
    pub fn read_sth_in_pages0(&mut self) -> Result<SthInPages0> {
        self.ds.print_unknown(6, "page object header")?;
        self.ds.print_unknown(4, "page object id")?;
        let len = self.ds.read_u16()?;
        let mut primitives = Vec::with_capacity(len as usize);
        for _ in 0..len {
            let kind = self.read_primitive_prefix()?;
            primitives.push(self.read_primitive(kind)?);
        }

        let tail = match self.futures.remaining_until_next(self.ds.current_offset()) {
            Some(8) => Some((self.ds.read_i32()?, self.ds.read_i32()?)),
            Some(_) => {
                self.futures
                    .read_until_next_future_data(self.ds, "page object tail")?;
                None
            }
            None => None,
        };
        Ok(SthInPages0 { primitives, tail })
    }
}
