//! Readers for pin records.

use crate::error::{OlbError, Result};
use crate::records::{PinIdxMapping, PinMapEntry, SymbolPin, SymbolPinBus, SymbolPinScalar};
use crate::types::{PinShape, PortType, Structure};

use super::RecordReader;

/// Separator bytes observed after each pin name of a mapping.
const PIN_SEPARATORS: [u8; 3] = [0x7f, 0xaa, 0xff];

impl RecordReader<'_> {
    fn read_pin_body(&mut self) -> Result<SymbolPinScalar> {
        let name = self.ds.read_string_zero_terminated()?;
        let start_x = self.ds.read_i32()?;
        let start_y = self.ds.read_i32()?;
        let hotpt_x = self.ds.read_i32()?;
        let hotpt_y = self.ds.read_i32()?;
        let shape_offset = self.ds.current_offset();
        let pin_shape = PinShape::from_raw(self.ds.read_u16()?, shape_offset)?;
        self.ds.print_unknown(2, "pin flags")?;
        let port_offset = self.ds.current_offset();
        let port_type = PortType::from_raw(self.ds.read_u32()?, port_offset)?;
        self.ds.print_unknown(6, "pin trailer")?;
        Ok(SymbolPinScalar {
            name,
            start_x,
            start_y,
            hotpt_x,
            hotpt_y,
            pin_shape,
            port_type,
        })
    }

    /// `SymbolPinScalar` body.
    pub fn read_symbol_pin_scalar(&mut self) -> Result<SymbolPinScalar> {
        self.read_pin_body()
    }

    /// `SymbolPinBus` body.  Same stored layout as the scalar pin.
    pub fn read_symbol_pin_bus(&mut self) -> Result<SymbolPinBus> {
        let p = self.read_pin_body()?;
        Ok(SymbolPinBus {
            name: p.name,
            start_x: p.start_x,
            start_y: p.start_y,
            hotpt_x: p.hotpt_x,
            hotpt_y: p.hotpt_y,
            pin_shape: p.pin_shape,
            port_type: p.port_type,
        })
    }

    /// One pin-list entry: standard prefix, preamble where required, body,
    /// checkpoint close.
    pub fn read_pin_entry(&mut self) -> Result<SymbolPin> {
        let prefix =
            self.read_type_prefix(&[Structure::SymbolPinScalar, Structure::SymbolPinBus])?;
        self.read_conditional_preamble(prefix.tag)?;
        let pin = match prefix.tag {
            Structure::SymbolPinBus => SymbolPin::Bus(self.read_symbol_pin_bus()?),
            _ => SymbolPin::Scalar(self.read_symbol_pin_scalar()?),
        };
        self.futures.expect_end(self.ds, "pin record tail")?;
        Ok(pin)
    }

    /// `PinIdxMapping`: unit reference, reference designator and the ordered
    /// pin-name list with separator tags.
    pub fn read_pin_idx_mapping(&mut self) -> Result<PinIdxMapping> {
        let unit_ref = self.ds.read_string_zero_terminated()?;
        let ref_des = self.ds.read_string_zero_terminated()?;
        let pin_count = self.ds.read_u16()?;
        let mut pin_map = Vec::with_capacity(pin_count as usize);
        for _ in 0..pin_count {
            let pin_name = self.ds.read_string_zero_terminated()?;
            let sep_offset = self.ds.current_offset();
            let separator = self.ds.read_u8()?;
            if !PIN_SEPARATORS.contains(&separator) {
                return Err(OlbError::InvariantViolated {
                    what: "pin separator",
                    offset: sep_offset,
                });
            }
            pin_map.push(PinMapEntry {
                pin_name,
                separator,
            });
        }
        Ok(PinIdxMapping {
            unit_ref,
            ref_des,
            pin_map,
        })
    }
}
