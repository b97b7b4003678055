//! Readers for leaf geometry shapes and geometry specifications.
//!
//! Version differences in geometry lists:
//! - `A` appends 8 opaque trailer bytes to every primitive and stores no
//!   style words.
//! - `B` repeats a full type prefix and a preamble between successive
//!   primitives.
//! - `C` repeats only the preamble.

use crate::error::{OlbError, Result};
use crate::geometry::{
    Arc, Bezier, Bitmap, CommentText, Ellipse, GeometryPrimitive, GeometrySpecification, Line,
    Polygon, Polyline, Rect, SymbolVector,
};
use crate::types::{FileFormatVersion, FillStyle, HatchStyle, LineStyle, LineWidth, Primitive};

use super::prefixes::SYMBOL_VECTOR_TAIL;
use super::RecordReader;

impl RecordReader<'_> {
    /// Read a named primitive list with the version-specific framing.
    pub fn read_geometry_specification(&mut self) -> Result<GeometrySpecification> {
        let name = self.ds.read_string_zero_terminated()?;
        let count = self.ds.read_u16()?;
        let mut primitives = Vec::with_capacity(count as usize);

        for i in 0..count {
            let mut announced = None;
            if i > 0 {
                if self.version == FileFormatVersion::B {
                    announced = Some(self.read_geometry_type_prefix()?);
                }
                if self.version >= FileFormatVersion::B {
                    self.read_preamble()?;
                }
            }

            let kind_offset = self.ds.current_offset();
            let kind = self.read_primitive_prefix()?;
            if let Some(gs) = announced {
                if gs.as_primitive() != kind {
                    return Err(OlbError::InvariantViolated {
                        what: "geometry tag does not match primitive kind",
                        offset: kind_offset,
                    });
                }
            }

            let primitive = self.read_primitive(kind)?;
            if self.version == FileFormatVersion::A {
                self.ds.print_unknown(8, "geometry primitive trailer")?;
            }
            if announced.is_some() {
                self.futures.expect_end(self.ds, "geometry primitive")?;
            }
            primitives.push(primitive);
        }

        Ok(GeometrySpecification { name, primitives })
    }

    /// Read the body of one primitive of the given kind.
    pub fn read_primitive(&mut self, kind: Primitive) -> Result<GeometryPrimitive> {
        Ok(match kind {
            Primitive::Rect => GeometryPrimitive::Rect(self.read_rect()?),
            Primitive::Line => GeometryPrimitive::Line(self.read_line()?),
            Primitive::Arc => GeometryPrimitive::Arc(self.read_arc()?),
            Primitive::Ellipse => GeometryPrimitive::Ellipse(self.read_ellipse()?),
            Primitive::Polygon => GeometryPrimitive::Polygon(self.read_polygon()?),
            Primitive::Polyline => GeometryPrimitive::Polyline(self.read_polyline()?),
            Primitive::Bezier => GeometryPrimitive::Bezier(self.read_bezier()?),
            Primitive::CommentText => GeometryPrimitive::CommentText(self.read_comment_text()?),
            Primitive::Bitmap => GeometryPrimitive::Bitmap(self.read_bitmap()?),
            Primitive::SymbolVector => GeometryPrimitive::SymbolVector(self.read_symbol_vector()?),
        })
    }

    /// Stroke attributes; stored only from version `B` on.
    fn read_line_attrs(&mut self) -> Result<(LineStyle, LineWidth)> {
        if self.version == FileFormatVersion::A {
            return Ok((LineStyle::default(), LineWidth::default()));
        }
        let offset = self.ds.current_offset();
        let line_style = LineStyle::from_raw(self.ds.read_u32()?, offset)?;
        let offset = self.ds.current_offset();
        let line_width = LineWidth::from_raw(self.ds.read_u32()?, offset)?;
        Ok((line_style, line_width))
    }

    /// Fill attributes; stored only from version `B` on.
    fn read_fill_attrs(&mut self) -> Result<(FillStyle, HatchStyle)> {
        if self.version == FileFormatVersion::A {
            return Ok((FillStyle::default(), HatchStyle::default()));
        }
        let offset = self.ds.current_offset();
        let fill_style = FillStyle::from_raw(self.ds.read_u32()?, offset)?;
        let offset = self.ds.current_offset();
        let hatch_style = HatchStyle::from_raw(self.ds.read_i32()?, offset)?;
        Ok((fill_style, hatch_style))
    }

    fn read_points(&mut self, count: u16) -> Result<Vec<(i32, i32)>> {
        let mut points = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let x = self.ds.read_i32()?;
            let y = self.ds.read_i32()?;
            points.push((x, y));
        }
        Ok(points)
    }

    fn read_rect(&mut self) -> Result<Rect> {
        let x1 = self.ds.read_i32()?;
        let y1 = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let (line_style, line_width) = self.read_line_attrs()?;
        let (fill_style, hatch_style) = self.read_fill_attrs()?;
        Ok(Rect {
            x1,
            y1,
            x2,
            y2,
            line_style,
            line_width,
            fill_style,
            hatch_style,
        })
    }

    fn read_line(&mut self) -> Result<Line> {
        let x1 = self.ds.read_i32()?;
        let y1 = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let (line_style, line_width) = self.read_line_attrs()?;
        Ok(Line {
            x1,
            y1,
            x2,
            y2,
            line_style,
            line_width,
        })
    }

    fn read_arc(&mut self) -> Result<Arc> {
        let x1 = self.ds.read_i32()?;
        let y1 = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let start_x = self.ds.read_i32()?;
        let start_y = self.ds.read_i32()?;
        let end_x = self.ds.read_i32()?;
        let end_y = self.ds.read_i32()?;
        let (line_style, line_width) = self.read_line_attrs()?;
        Ok(Arc {
            x1,
            y1,
            x2,
            y2,
            start_x,
            start_y,
            end_x,
            end_y,
            line_style,
            line_width,
        })
    }

    fn read_ellipse(&mut self) -> Result<Ellipse> {
        let x1 = self.ds.read_i32()?;
        let y1 = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let (line_style, line_width) = self.read_line_attrs()?;
        let (fill_style, hatch_style) = self.read_fill_attrs()?;
        Ok(Ellipse {
            x1,
            y1,
            x2,
            y2,
            line_style,
            line_width,
            fill_style,
            hatch_style,
        })
    }

    fn read_polygon(&mut self) -> Result<Polygon> {
        let count = self.ds.read_u16()?;
        let points = self.read_points(count)?;
        let (line_style, line_width) = self.read_line_attrs()?;
        let (fill_style, hatch_style) = self.read_fill_attrs()?;
        Ok(Polygon {
            points,
            line_style,
            line_width,
            fill_style,
            hatch_style,
        })
    }

    fn read_polyline(&mut self) -> Result<Polyline> {
        let offset = self.ds.current_offset();
        let count = self.ds.read_u16()?;
        if count < 2 {
            return Err(OlbError::InvariantViolated {
                what: "polyline point count",
                offset,
            });
        }
        let points = self.read_points(count)?;
        let (line_style, line_width) = self.read_line_attrs()?;
        Ok(Polyline {
            points,
            line_style,
            line_width,
        })
    }

    fn read_bezier(&mut self) -> Result<Bezier> {
        let offset = self.ds.current_offset();
        let count = self.ds.read_u16()?;
        // 3k + 1 points make k cubic segments.
        if count % 3 != 1 {
            return Err(OlbError::InvariantViolated {
                what: "bezier point count",
                offset,
            });
        }
        let points = self.read_points(count)?;
        let (line_style, line_width) = self.read_line_attrs()?;
        Ok(Bezier {
            points,
            line_style,
            line_width,
        })
    }

    fn read_comment_text(&mut self) -> Result<CommentText> {
        let loc_x = self.ds.read_i32()?;
        let loc_y = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let idx_offset = self.ds.current_offset();
        let text_font_idx = self.ds.read_u16()?;
        if text_font_idx as usize > self.lib.font_count() {
            return Err(OlbError::InvariantViolated {
                what: "text font index out of range",
                offset: idx_offset,
            });
        }
        let text = self.ds.read_string_zero_terminated()?;
        Ok(CommentText {
            loc_x,
            loc_y,
            x2,
            y2,
            text_font_idx,
            text,
        })
    }

    fn read_bitmap(&mut self) -> Result<Bitmap> {
        let loc_x = self.ds.read_i32()?;
        let loc_y = self.ds.read_i32()?;
        let x2 = self.ds.read_i32()?;
        let y2 = self.ds.read_i32()?;
        let px_width = self.ds.read_u32()?;
        let px_height = self.ds.read_u32()?;
        let data_size = self.ds.read_u32()?;
        let data = self.ds.read_raw(data_size as usize)?;
        Ok(Bitmap {
            loc_x,
            loc_y,
            x2,
            y2,
            px_width,
            px_height,
            data,
        })
    }

    /// Read a symbol-vector body.
    ///
    /// The body is self-synchronising: bytes before its preamble are
    /// discarded, and a fixed 12-byte tail closes it.
    pub fn read_symbol_vector(&mut self) -> Result<SymbolVector> {
        self.discard_until_preamble()?;
        self.read_preamble()?;
        let loc_x = self.ds.read_i16()?;
        let loc_y = self.ds.read_i16()?;
        let repetition = self.ds.read_u16()?;

        let mut primitives = Vec::with_capacity(repetition as usize);
        for i in 0..repetition {
            if i > 0 && self.version >= FileFormatVersion::B {
                self.read_preamble()?;
            }
            let kind = self.read_primitive_prefix()?;
            primitives.push(self.read_primitive(kind)?);
        }

        self.read_preamble()?;
        let name = self.ds.read_string_zero_terminated()?;
        self.ds.assume_bytes(&SYMBOL_VECTOR_TAIL)?;
        Ok(SymbolVector {
            loc_x,
            loc_y,
            name,
            primitives,
        })
    }
}
