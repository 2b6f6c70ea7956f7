/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// raster drawing module of ODIN
/// this mostly wraps the external 'image', 'imageproc' and 'ab_glyph' crates with float coordinate
/// primitives that are convenient for rendering map products (markers, dashed lines, polygons, aligned text)

use std::path::Path;
use image::{self, imageops::{self, FilterType}, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut, draw_text_mut},
    point::Point,
    rect::Rect
};
use ab_glyph::{Font,FontVec,PxScale,ScaleFont};
use odin_common::fs::{ensure_parent_dir,filepath_contents};

mod errors;
pub use errors::{Result,OdinImageError};

/// typographic points per inch
pub const PT_PER_INCH: f32 = 72.0;

#[inline]
pub fn pt_to_px (pt: f32, dpi: f32)->f32 { pt * dpi / PT_PER_INCH }

pub fn new_canvas (width: u32, height: u32, background: Rgba<u8>)->Result<RgbaImage> {
    if width == 0 || height == 0 {
        Err( OdinImageError::InvalidDimensions( format!("empty canvas {width}x{height}")) )
    } else {
        Ok( RgbaImage::from_pixel( width, height, background) )
    }
}

pub fn save_png (img: &RgbaImage, path: impl AsRef<Path>)->Result<()> {
    let path = path.as_ref();
    ensure_parent_dir( path)?;
    Ok( img.save_with_format( path, image::ImageFormat::Png)? )
}

/* #region colors ****************************************************************************************************/

pub fn get_hex_rgb (hex_color: &str)->Result<[u8;3]> {
    let hex = hex_color.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return Err( OdinImageError::InvalidColor( hex_color.to_string()))
    }
    let v = u32::from_str_radix( hex, 16).map_err(|_| OdinImageError::InvalidColor( hex_color.to_string()))?;

    let r = (v >> 16) as u8;
    let g = (v >> 8 & 0xff) as u8;
    let b = (v & 0xff) as u8;

    Ok([r, g, b])
}

/// the few named colors our map products use, with the same values as the common web/plotting palettes
fn named_rgb (name: &str)->Option<[u8;3]> {
    match name {
        "black"     => Some([0,0,0]),
        "white"     => Some([255,255,255]),
        "red"       => Some([255,0,0]),
        "green"     => Some([0,128,0]),
        "yellow"    => Some([255,255,0]),
        "blue"      => Some([0,0,255]),
        "gray" | "grey" => Some([128,128,128]),
        "lightgray" | "lightgrey" => Some([211,211,211]),
        "moccasin"  => Some([255,228,181]),
        _ => None
    }
}

/// parse a color spec that is either a known color name or a (optionally '#' prefixed) 6 digit hex rgb value
pub fn parse_color (spec: &str)->Result<Rgba<u8>> {
    let rgb = match named_rgb( spec.trim().to_ascii_lowercase().as_str()) {
        Some(rgb) => rgb,
        None => get_hex_rgb( spec)?
    };
    Ok( Rgba([rgb[0], rgb[1], rgb[2], 255]) )
}

/* #endregion colors */

/* #region font resources ********************************************************************************************/

pub fn load_font (path: impl AsRef<Path>)->Result<FontVec> {
    let path = path.as_ref();
    if !path.is_file() {
        Err( OdinImageError::NotFoundError(format!("font not found: {:?}", path)) )

    } else {
        let data = filepath_contents( &path)?;
        Ok( FontVec::try_from_vec( data)? )
    }
}

/* #endregion font resources */

/* #region shape primitives *******************************************************************************************/

/// fill the axis aligned rectangle spanned by two corner points (in any order), clipped to the image
pub fn fill_rect (img: &mut RgbaImage, p0: (f32,f32), p1: (f32,f32), color: Rgba<u8>) {
    let (w,h) = img.dimensions();
    let left   = p0.0.min(p1.0).round().clamp( 0.0, w as f32) as i32;
    let right  = p0.0.max(p1.0).round().clamp( 0.0, w as f32) as i32;
    let top    = p0.1.min(p1.1).round().clamp( 0.0, h as f32) as i32;
    let bottom = p0.1.max(p1.1).round().clamp( 0.0, h as f32) as i32;

    if right > left && bottom > top {
        let rect = Rect::at( left, top).of_size( (right - left) as u32, (bottom - top) as u32);
        draw_filled_rect_mut( img, rect, color);
    }
}

/// draw the outline of a rectangle spanned by two corner points
pub fn outline_rect (img: &mut RgbaImage, p0: (f32,f32), p1: (f32,f32), color: Rgba<u8>) {
    let (x0,y0,x1,y1) = (p0.0.min(p1.0), p0.1.min(p1.1), p0.0.max(p1.0), p0.1.max(p1.1));
    draw_line_segment_mut( img, (x0,y0), (x1,y0), color);
    draw_line_segment_mut( img, (x1,y0), (x1,y1), color);
    draw_line_segment_mut( img, (x1,y1), (x0,y1), color);
    draw_line_segment_mut( img, (x0,y1), (x0,y0), color);
}

/// a filled circle marker with optional edge color. Radii below one pixel are drawn as one pixel
pub fn draw_marker (img: &mut RgbaImage, center: (f32,f32), radius: f32, fill: Rgba<u8>, edge: Option<Rgba<u8>>) {
    let c = (center.0.round() as i32, center.1.round() as i32);
    let r = radius.round().max(1.0) as i32;

    draw_filled_circle_mut( img, c, r, fill);
    if let Some(edge) = edge {
        draw_hollow_circle_mut( img, c, r, edge);
    }
}

pub fn draw_line (img: &mut RgbaImage, start: (f32,f32), end: (f32,f32), color: Rgba<u8>) {
    draw_line_segment_mut( img, start, end, color);
}

/// draw a dashed line segment. A non-positive dash length draws a solid line
pub fn draw_dashed_line (img: &mut RgbaImage, start: (f32,f32), end: (f32,f32), dash: f32, gap: f32, color: Rgba<u8>) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = dx.hypot(dy);

    if len == 0.0 { return }
    if dash <= 0.0 {
        draw_line_segment_mut( img, start, end, color);
        return
    }

    let ux = dx / len;
    let uy = dy / len;
    let step = dash + gap.max(0.0);
    let mut d = 0.0;

    while d < len {
        let d1 = (d + dash).min(len);
        draw_line_segment_mut( img, (start.0 + ux*d, start.1 + uy*d), (start.0 + ux*d1, start.1 + uy*d1), color);
        d += step;
    }
}

/// round ring vertices to pixels and remove consecutive duplicates (including an explicit closing vertex).
/// Returns None if the ring degenerates to less than three distinct pixels
fn pixel_ring (pts: &[(f32,f32)])->Option<Vec<Point<i32>>> {
    let mut ring: Vec<Point<i32>> = Vec::with_capacity( pts.len());

    for p in pts {
        if !(p.0.is_finite() && p.1.is_finite()) { continue }
        let q = Point::new( p.0.round() as i32, p.1.round() as i32);
        if ring.last() != Some(&q) { ring.push(q) }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    if ring.len() >= 3 { Some(ring) } else { None }
}

/// fill a (closed or open) polygon ring given in pixel coordinates. Degenerate rings are ignored
pub fn fill_polygon (img: &mut RgbaImage, pts: &[(f32,f32)], color: Rgba<u8>) {
    if let Some(ring) = pixel_ring( pts) {
        draw_polygon_mut( img, &ring, color);
    }
}

/// draw the closed outline of a polygon ring given in pixel coordinates
pub fn outline_polygon (img: &mut RgbaImage, pts: &[(f32,f32)], color: Rgba<u8>) {
    if pts.len() < 2 { return }

    for w in pts.windows(2) {
        draw_line_segment_mut( img, w[0], w[1], color);
    }
    let first = pts[0];
    let last = pts[pts.len()-1];
    if first != last {
        draw_line_segment_mut( img, last, first, color);
    }
}

/// draw `src` scaled by `zoom` and centered at the given pixel position, alpha blended
pub fn overlay_scaled (img: &mut RgbaImage, src: &RgbaImage, center: (f32,f32), zoom: f32)->Result<()> {
    let w = (src.width() as f32 * zoom).round();
    let h = (src.height() as f32 * zoom).round();
    if !(w >= 1.0 && h >= 1.0) {
        return Err( OdinImageError::InvalidDimensions( format!("overlay scaled to {w}x{h}")) )
    }

    let scaled = imageops::resize( src, w as u32, h as u32, FilterType::Triangle);
    let x = (center.0 - w / 2.0).round() as i64;
    let y = (center.1 - h / 2.0).round() as i64;
    imageops::overlay( img, &scaled, x, y);

    Ok(())
}

/* #endregion shape primitives */

/* #region text *******************************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum HAlign { Left, Center, Right }

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum VAlign { Top, Baseline, Center, Bottom }

/// font, size and color of a text item. Size is in pixels
#[derive(Clone,Copy)]
pub struct TextStyle<'a> {
    pub font: &'a FontVec,
    pub px_size: f32,
    pub color: Rgba<u8>,
}

impl <'a> TextStyle<'a> {
    pub fn new (font: &'a FontVec, px_size: f32, color: Rgba<u8>)->Self {
        TextStyle { font, px_size, color }
    }

    pub fn scale (&self)->PxScale { PxScale::from( self.px_size) }

    pub fn ascent (&self)->f32 { self.font.as_scaled( self.scale()).ascent() }

    pub fn descent (&self)->f32 { self.font.as_scaled( self.scale()).descent() }

    /// the horizontal advance of the text, which is what aligns columns of monospace text
    pub fn text_width (&self, text: &str)->f32 {
        let sf = self.font.as_scaled( self.scale());
        text.chars().map( |c| sf.h_advance( sf.glyph_id(c))).sum()
    }
}

/// draw single line text anchored at pixel position (x,y) according to the given alignments
pub fn draw_text_aligned (img: &mut RgbaImage, style: &TextStyle, x: f32, y: f32, halign: HAlign, valign: VAlign, text: &str) {
    let left = match halign {
        HAlign::Left => x,
        HAlign::Center => x - style.text_width(text) / 2.0,
        HAlign::Right => x - style.text_width(text),
    };

    // draw_text_mut positions the line top, the baseline is at top + ascent
    let ascent = style.ascent();
    let descent = style.descent(); // negative
    let top = match valign {
        VAlign::Top => y,
        VAlign::Baseline => y - ascent,
        VAlign::Center => y - (ascent - descent) / 2.0,
        VAlign::Bottom => y - (ascent - descent),
    };

    draw_text_mut( img, style.color, left.round() as i32, top.round() as i32, style.scale(), style.font, text);
}

/* #endregion text */
