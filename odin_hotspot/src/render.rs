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

//! rendering of the daily hotspot map.
//! Everything that is positioned in geographic coordinates and is not text gets drawn into a frame layer
//! so that it is clipped to the map extent. Text is drawn onto the canvas after the layer has been copied
//! in, which means labels that start inside the map can extend beyond the frame

use std::path::Path;
use ab_glyph::FontVec;
use chrono::NaiveDate;
use geo_types::LineString;
use image::{Rgba,RgbaImage,imageops};
use strum::IntoEnumIterator;
use tracing::{debug,info,warn};
use odin_common::datetime::format_dmy;
use odin_image::{
    HAlign, OdinImageError, TextStyle, VAlign,
    draw_dashed_line, draw_line, draw_marker, draw_text_aligned, fill_polygon, fill_rect, load_font, new_canvas,
    outline_polygon, outline_rect, overlay_scaled, parse_color, pt_to_px, save_png
};
use crate::basemap::{BaseLayer,polygon_bounds};
use crate::config::{HotspotMapConfig,MapStyle,MapTexts};
use crate::errors::Result;
use crate::hotspot::{ConfidenceLevel,ConfidenceTiers,Region};
use crate::map_frame::{Margins,MapFrame};
use crate::summary::HotspotSummary;

/// vertical offsets (degrees above the legend box bottom) of the legend entries
const LEGEND_ROWS: [(ConfidenceLevel,f64); 3] = [
    (ConfidenceLevel::Low, 3.2),
    (ConfidenceLevel::Medium, 2.0),
    (ConfidenceLevel::High, 0.8)
];

/// horizontal offsets (degrees from the region box left side) of the tier markers above the count columns
const REGION_MARKER_OFFSETS: [(ConfidenceLevel,f64); 3] = [
    (ConfidenceLevel::Low, 10.1),
    (ConfidenceLevel::Medium, 11.9),
    (ConfidenceLevel::High, 14.0)
];

/// outward length of tick marks and gap to tick labels, in pt
const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;

/* #region resources **************************************************************************************************/

/// the monospace fonts used for all map text. If there is no bold face we use the regular one
pub struct MapFonts {
    pub regular: FontVec,
    pub bold: FontVec,
}

impl MapFonts {
    pub fn load (regular_path: impl AsRef<Path>, bold_path: Option<&Path>)->Result<Self> {
        let regular_path = regular_path.as_ref();
        let regular = load_font( regular_path)?;

        let bold = match bold_path {
            Some(path) if path.is_file() => load_font( path)?,
            Some(path) => {
                warn!("bold font {:?} not found, using {:?}", path, regular_path);
                load_font( regular_path)?
            }
            None => load_font( regular_path)?
        };

        Ok( MapFonts { regular, bold } )
    }

    fn get (&self, bold: bool)->&FontVec {
        if bold { &self.bold } else { &self.regular }
    }
}

/// load the logo image. A missing logo is not an error, the map just goes without it
pub fn load_logo (path: impl AsRef<Path>)->Result<Option<RgbaImage>> {
    let path = path.as_ref();
    if !path.is_file() {
        warn!(path=?path, "BMKG logo not found");
        return Ok(None)
    }

    let img = image::open( path).map_err( OdinImageError::from)?;
    debug!("loaded logo {:?} ({}x{})", path, img.width(), img.height());
    Ok( Some( img.to_rgba8()) )
}

/// the resolved colors of a map style
#[derive(Debug,Clone,Copy)]
struct Palette {
    background: Rgba<u8>,
    others_fill: Rgba<u8>,
    indonesia_fill: Rgba<u8>,
    edge: Rgba<u8>,
    box_fill: Rgba<u8>,
    grid: Rgba<u8>,
    low: Rgba<u8>,
    medium: Rgba<u8>,
    high: Rgba<u8>,
}

impl Palette {
    fn from_style (style: &MapStyle)->Result<Self> {
        Ok( Palette {
            background: parse_color( &style.background)?,
            others_fill: parse_color( &style.others_fill)?,
            indonesia_fill: parse_color( &style.indonesia_fill)?,
            edge: parse_color( &style.edge)?,
            box_fill: parse_color( &style.box_fill)?,
            grid: parse_color( &style.grid)?,
            low: parse_color( style.color_of( ConfidenceLevel::Low))?,
            medium: parse_color( style.color_of( ConfidenceLevel::Medium))?,
            high: parse_color( style.color_of( ConfidenceLevel::High))?,
        })
    }

    fn tier (&self, level: ConfidenceLevel)->Rgba<u8> {
        match level {
            ConfidenceLevel::Low => self.low,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::High => self.high,
        }
    }
}

/* #endregion resources */

/// everything that goes into a map
pub struct MapContext<'a> {
    pub config: &'a HotspotMapConfig,
    pub tiers: &'a ConfidenceTiers<'a>,
    pub summary: &'a HotspotSummary,
    pub others: &'a BaseLayer,
    pub indonesia: &'a BaseLayer,
    pub fonts: &'a MapFonts,
    pub logo: Option<&'a RgbaImage>,
    pub report_date: NaiveDate,
}

/// pixel radius of a scatter marker with the given area in pt²
pub fn marker_radius (area_pt2: f32, dpi: f32)->f32 {
    pt_to_px( area_pt2.max(0.0).sqrt() / 2.0, dpi)
}

/// tick labels without fraction if they are integral, with a typographic minus sign
pub fn format_tick (v: f64)->String {
    let s = if v.fract() == 0.0 { format!("{}", v.abs() as i64) } else { format!("{}", v.abs()) };
    if v < 0.0 { format!("\u{2212}{}", s) } else { s }
}

pub fn render_hotspot_map (ctx: &MapContext)->Result<RgbaImage> {
    let style = &ctx.config.map;
    let palette = Palette::from_style( style)?;

    let canvas_size = style.canvas_size();
    let mut canvas = new_canvas( canvas_size.0, canvas_size.1, palette.background)?;
    let frame = MapFrame::fit( style.extent, canvas_size, &Margins::for_dpi( style.dpi))?;
    debug!("map frame {}x{} at {},{}", frame.width, frame.height, frame.x0, frame.y0);

    //--- clipped layer
    let mut layer = frame.new_layer( palette.background);
    draw_base_layer( &mut layer, &frame, ctx.others, palette.others_fill, palette.edge, palette.background);
    draw_base_layer( &mut layer, &frame, ctx.indonesia, palette.indonesia_fill, palette.edge, palette.background);
    draw_boxes( &mut layer, &frame, style, palette.box_fill);
    draw_grid( &mut layer, &frame, style, palette.grid);
    draw_hotspots( &mut layer, &frame, ctx.tiers, style, &palette);
    draw_key_markers( &mut layer, &frame, style, &palette);
    if let Some(logo) = ctx.logo {
        let center = frame.to_px( style.logo_center.0, style.logo_center.1);
        overlay_scaled( &mut layer, logo, center, style.logo_zoom * style.dpi / odin_image::PT_PER_INCH)?;
    }
    imageops::replace( &mut canvas, &layer, frame.x0 as i64, frame.y0 as i64);

    //--- unclipped canvas decorations
    let (p0,p1) = frame.canvas_corners();
    outline_rect( &mut canvas, (p0.0 - 1.0, p0.1 - 1.0), p1, palette.edge);
    draw_ticks( &mut canvas, &frame, style, ctx.fonts, palette.edge);
    draw_legend_text( &mut canvas, &frame, style, &ctx.config.texts, ctx.fonts, palette.edge);
    draw_region_table( &mut canvas, &frame, style, &ctx.config.texts, ctx.summary, ctx.fonts, palette.edge);
    draw_title_block( &mut canvas, &frame, style, &ctx.config.texts, ctx.fonts, palette.edge, &ctx.report_date);

    Ok(canvas)
}

pub fn save_map (img: &RgbaImage, path: impl AsRef<Path>)->Result<()> {
    let path = path.as_ref();
    save_png( img, path)?;
    info!("saved hotspot map to {:?}", path);
    Ok(())
}

/* #region layer drawing **********************************************************************************************/

fn ring_px (frame: &MapFrame, ring: &LineString<f64>)->Vec<(f32,f32)> {
    ring.coords().map(|c| frame.to_px( c.x, c.y)).collect()
}

/// fill and outline all polygons of a layer that overlap the frame. Holes are filled with the background color
pub fn draw_base_layer (img: &mut RgbaImage, frame: &MapFrame, layer: &BaseLayer, fill: Rgba<u8>, edge: Rgba<u8>, background: Rgba<u8>) {
    let mut n_drawn = 0;

    for poly in &layer.polygons {
        match polygon_bounds( poly) {
            Some(bbox) if frame.overlaps( &bbox) => {}
            _ => continue
        }

        let exterior = ring_px( frame, poly.exterior());
        fill_polygon( img, &exterior, fill);
        for hole in poly.interiors() {
            fill_polygon( img, &ring_px( frame, hole), background);
        }

        outline_polygon( img, &exterior, edge);
        for hole in poly.interiors() {
            outline_polygon( img, &ring_px( frame, hole), edge);
        }
        n_drawn += 1;
    }

    debug!("drew {} of {} polygons of layer {}", n_drawn, layer.len(), layer.name);
}

/// the legend and region count box backgrounds
fn draw_boxes (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, color: Rgba<u8>) {
    let (lx,ly) = style.legend_origin;
    let (lw,lh) = style.legend_size;
    fill_rect( img, frame.to_px( lx, ly), frame.to_px( lx + lw, ly + lh), color);

    let (bx,by) = style.region_box_origin;
    let bh = region_box_height( style);
    fill_rect( img, frame.to_px( bx, by - bh), frame.to_px( bx + style.region_box_width, by), color);
}

fn region_box_height (style: &MapStyle)->f64 {
    (Region::iter().count() + 2) as f64 * style.region_row_height + 0.5
}

fn draw_grid (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, color: Rgba<u8>) {
    let dash = pt_to_px( 1.85, style.dpi).max(2.0);
    let gap = pt_to_px( 0.8, style.dpi).max(1.0);
    let e = &frame.extent;

    for lon in style.lon_ticks.values().into_iter().filter(|v| *v >= e.west && *v <= e.east) {
        draw_dashed_line( img, frame.to_px( lon, e.north), frame.to_px( lon, e.south), dash, gap, color);
    }
    for lat in style.lat_ticks.values().into_iter().filter(|v| *v >= e.south && *v <= e.north) {
        draw_dashed_line( img, frame.to_px( e.west, lat), frame.to_px( e.east, lat), dash, gap, color);
    }
}

/// low, then medium, then high confidence hotspots so that the most relevant ones end up on top
fn draw_hotspots (img: &mut RgbaImage, frame: &MapFrame, tiers: &ConfidenceTiers, style: &MapStyle, palette: &Palette) {
    let radius = marker_radius( style.hotspot_marker_area, style.dpi);

    for level in ConfidenceLevel::iter() {
        let color = palette.tier( level);
        for rec in tiers.get( level).iter().filter(|r| r.lon.is_finite() && r.lat.is_finite()) {
            draw_marker( img, frame.to_px( rec.lon, rec.lat), radius, color, None);
        }
    }
}

/// the tier markers of the legend and the region count header
fn draw_key_markers (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, palette: &Palette) {
    let radius = marker_radius( style.legend_marker_area, style.dpi);

    let (lx,ly) = style.legend_origin;
    for (level,dy) in LEGEND_ROWS {
        draw_marker( img, frame.to_px( lx + 1.0, ly + dy), radius, palette.tier(level), Some(palette.edge));
    }

    let (bx,by) = style.region_box_origin;
    for (level,dx) in REGION_MARKER_OFFSETS {
        draw_marker( img, frame.to_px( bx + dx, by - 0.3), radius, palette.tier(level), Some(palette.edge));
    }
}

/* #endregion layer drawing */

/* #region canvas text ************************************************************************************************/

fn text_style<'a> (fonts: &'a MapFonts, bold: bool, pt: f32, dpi: f32, color: Rgba<u8>)->TextStyle<'a> {
    TextStyle::new( fonts.get(bold), pt_to_px( pt, dpi), color)
}

fn draw_geo_text (img: &mut RgbaImage, frame: &MapFrame, style: &TextStyle, pos: (f64,f64), valign: VAlign, text: &str) {
    let (x,y) = frame.to_canvas_px( pos.0, pos.1);
    draw_text_aligned( img, style, x, y, HAlign::Left, valign, text);
}

/// outward tick marks and degree labels for all ticks within the extent
fn draw_ticks (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, fonts: &MapFonts, color: Rgba<u8>) {
    let ts = text_style( fonts, false, style.tick_label_pt, style.dpi, color);
    let tick_len = pt_to_px( TICK_LEN_PT, style.dpi);
    let pad = pt_to_px( TICK_PAD_PT, style.dpi);
    let e = &frame.extent;
    let ((left,_),(_,bottom)) = frame.canvas_corners();

    for lon in style.lon_ticks.values().into_iter().filter(|v| *v >= e.west && *v <= e.east) {
        let (x,_) = frame.to_canvas_px( lon, e.south);
        draw_line( img, (x, bottom), (x, bottom + tick_len), color);
        draw_text_aligned( img, &ts, x, bottom + tick_len + pad, HAlign::Center, VAlign::Top, &format_tick(lon));
    }

    for lat in style.lat_ticks.values().into_iter().filter(|v| *v >= e.south && *v <= e.north) {
        let (_,y) = frame.to_canvas_px( e.west, lat);
        draw_line( img, (left - tick_len, y), (left, y), color);
        draw_text_aligned( img, &ts, left - tick_len - pad, y, HAlign::Right, VAlign::Center, &format_tick(lat));
    }
}

fn draw_legend_text (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, texts: &MapTexts, fonts: &MapFonts, color: Rgba<u8>) {
    let (lx,ly) = style.legend_origin;

    let title = text_style( fonts, true, style.legend_pt, style.dpi, color);
    draw_geo_text( img, frame, &title, (lx + 0.5, ly + style.legend_size.1 - 0.7), VAlign::Baseline, &texts.legend_title);

    let entry = text_style( fonts, false, style.legend_pt, style.dpi, color);
    for (level,dy) in LEGEND_ROWS {
        draw_geo_text( img, frame, &entry, (lx + 2.0, ly + dy), VAlign::Center, texts.label_of(level));
    }
}

/// the per region counts as monospace rows below a header and above the national total
fn draw_region_table (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, texts: &MapTexts, summary: &HotspotSummary, fonts: &MapFonts, color: Rgba<u8>) {
    let (bx,by) = style.region_box_origin;
    let x = bx + 0.2;
    let rh = style.region_row_height;

    let bold = text_style( fonts, true, style.region_pt, style.dpi, color);
    let regular = text_style( fonts, false, style.region_pt, style.dpi, color);

    draw_geo_text( img, frame, &bold, (x, by - 0.5), VAlign::Baseline, &HotspotSummary::header_row( &texts.region_header));

    for (i,region) in Region::iter().enumerate() {
        let y = by - (i + 1) as f64 * rh - 0.5;
        draw_geo_text( img, frame, &regular, (x, y), VAlign::Baseline, &summary.region_row( region));
    }

    let y = by - (Region::iter().count() as f64 + 1.5) * rh - 0.5;
    draw_geo_text( img, frame, &bold, (x, y), VAlign::Baseline, &summary.total_row( &texts.total_label));
}

fn draw_title_block (img: &mut RgbaImage, frame: &MapFrame, style: &MapStyle, texts: &MapTexts, fonts: &MapFonts, color: Rgba<u8>, date: &NaiveDate) {
    let (tx,ty) = style.title_origin;
    let dy = style.title_line_spacing;

    let title = text_style( fonts, true, style.title_pt, style.dpi, color);
    draw_geo_text( img, frame, &title, (tx, ty), VAlign::Baseline, &texts.title);

    let sub = text_style( fonts, false, style.subtitle_pt, style.dpi, color);
    let date_line = format!("{}: {}", texts.date_label, format_dmy( date));
    draw_geo_text( img, frame, &sub, (tx, ty - dy), VAlign::Baseline, &date_line);
    draw_geo_text( img, frame, &sub, (tx, ty - 2.0 * dy), VAlign::Baseline, &texts.satellites);
}

/* #endregion canvas text */
