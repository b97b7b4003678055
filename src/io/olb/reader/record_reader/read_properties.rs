//! Readers for property-block records.

use crate::error::{OlbError, Result};
use crate::records::{GeneralProperties, Properties, Properties2, SymbolDisplayProp};
use crate::types::{Color, ImplementationType, Rotation, Structure};

use super::RecordReader;

impl RecordReader<'_> {
    /// `Properties`: reference, view marker, optional convert-view name,
    /// symbol name, opaque trailer.
    pub fn read_properties(&mut self) -> Result<Properties> {
        let reference = self.ds.read_string_zero_terminated()?;
        self.ds.assume_bytes(&[0x00, 0x00, 0x00])?;

        let view_offset = self.ds.current_offset();
        let view_number = self.ds.read_u16()?;
        let convert_name = match view_number {
            1 => None,
            2 => Some(self.ds.read_string_zero_terminated()?),
            _ => {
                return Err(OlbError::InvariantViolated {
                    what: "view number",
                    offset: view_offset,
                })
            }
        };
        let name = self.ds.read_string_zero_terminated()?;
        self.ds.print_unknown(29, "properties trailer")?;
        Ok(Properties {
            reference,
            view_number,
            convert_name,
            name,
        })
    }

    /// `Properties2`: package naming and section count.
    pub fn read_properties2(&mut self) -> Result<Properties2> {
        let name = self.ds.read_string_zero_terminated()?;
        let ref_des = self.ds.read_string_zero_terminated()?;
        let pcb_footprint = self.ds.read_string_zero_terminated()?;
        let section_count = self.ds.read_u16()?;
        Ok(Properties2 {
            name,
            ref_des,
            pcb_footprint,
            section_count,
        })
    }

    /// `GeneralProperties`: implementation reference and display flags.
    pub fn read_general_properties(&mut self) -> Result<GeneralProperties> {
        let implementation_path = self.ds.read_string_zero_terminated()?;
        let implementation = self.ds.read_string_zero_terminated()?;
        let ref_des_prefix = self.ds.read_string_zero_terminated()?;
        let part_value = self.ds.read_string_zero_terminated()?;
        let flags = self.ds.read_u8()?;
        let impl_offset = self.ds.current_offset();
        let implementation_type =
            ImplementationType::from_raw(self.ds.read_u8()?, impl_offset)?;
        Ok(GeneralProperties {
            implementation_path,
            implementation,
            ref_des_prefix,
            part_value,
            pin_name_visible: flags & 0x01 != 0,
            pin_name_rotate: flags & 0x02 != 0,
            pin_number_visible: flags & 0x04 != 0,
            implementation_type,
        })
    }

    /// `SymbolDisplayProp`: string-table reference, position, packed
    /// font/rotation word, colour.
    pub fn read_symbol_display_prop(&mut self) -> Result<SymbolDisplayProp> {
        let idx_offset = self.ds.current_offset();
        let name_idx = self.ds.read_u32()?;
        let name = self.lib.get_str(name_idx, idx_offset)?;
        let x = self.ds.read_i16()?;
        let y = self.ds.read_i16()?;

        let packed_offset = self.ds.current_offset();
        let packed = self.ds.read_u16()?;
        let text_font_idx = packed & 0x00ff;
        if text_font_idx as usize > self.lib.font_count() {
            return Err(OlbError::InvariantViolated {
                what: "text font index out of range",
                offset: packed_offset,
            });
        }
        // Bits 8-13 carry nothing in any observed file.
        if (packed >> 8) & 0x3f != 0 {
            return Err(OlbError::InvariantViolated {
                what: "reserved bits",
                offset: packed_offset,
            });
        }
        let rotation = Rotation::from_raw((packed >> 14) as u32, packed_offset)?;

        let color_offset = self.ds.current_offset();
        let color = Color::from_raw(self.ds.read_u8()? as u32, color_offset)?;
        self.ds.print_unknown(2, "display prop trailer")?;
        self.ds.assume_bytes(&[0x00])?;
        Ok(SymbolDisplayProp {
            name_idx,
            name,
            x,
            y,
            text_font_idx,
            rotation,
            color,
        })
    }

    /// One display-property list entry: short prefix, preamble, body.
    pub fn read_display_prop_entry(&mut self) -> Result<SymbolDisplayProp> {
        self.read_type_prefix_short(&[Structure::SymbolDisplayProp])?;
        self.read_conditional_preamble(Structure::SymbolDisplayProp)?;
        self.read_symbol_display_prop()
    }
}
