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

//! configuration of the hotspot map product.
//! All structs are `#[serde(default)]` so that RON config files only have to specify what differs
//! from the daily BMKG product defaults, e.g.
//! ```ron
//! HotspotMapConfig(
//!     input_path: "data/Hotspot_Indonesia.txt",
//!     map: ( dpi: 100.0 ),
//! )
//! ```

use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};
use odin_common::{BoundingBox, fs::filepath_contents};
use crate::errors::{Result,config_error};
use crate::hotspot::ConfidenceLevel;

/// the config file we look for in the base dir if none is specified explicitly
pub const DEFAULT_CONFIG_FILE: &str = "hotspot_map.ron";

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct HotspotMapConfig {
    // all relative paths are resolved against the base dir of the run
    pub input_path: PathBuf,
    pub csv_path: PathBuf,
    pub map_path: PathBuf,
    pub indonesia_layer: PathBuf,
    pub others_layer: PathBuf,
    pub logo_path: PathBuf,
    pub font_path: PathBuf,
    pub bold_font_path: Option<PathBuf>,

    pub columns: ColumnConfig,
    pub confidence: ConfidenceScores,
    pub map: MapStyle,
    pub texts: MapTexts,
}

impl Default for HotspotMapConfig {
    fn default()->Self {
        HotspotMapConfig {
            input_path: PathBuf::from("data/Hotspot_Indonesia.txt"),
            csv_path: PathBuf::from("data/Hotspot_Indonesia.csv"),
            map_path: PathBuf::from("images/update_hotspot.png"),
            indonesia_layer: PathBuf::from("shp/Indonesia_38_Provinsi.shp"),
            others_layer: PathBuf::from("shp/world_without_idn.shp"),
            logo_path: PathBuf::from("images/logo_bmkg.png"),
            font_path: PathBuf::from("fonts/DejaVuSansMono.ttf"),
            bold_font_path: Some(PathBuf::from("fonts/DejaVuSansMono-Bold.ttf")),

            columns: ColumnConfig::default(),
            confidence: ConfidenceScores::default(),
            map: MapStyle::default(),
            texts: MapTexts::default(),
        }
    }
}

impl HotspotMapConfig {
    pub fn validate (&self)->Result<()> {
        self.columns.validate()?;
        self.confidence.validate()?;
        self.map.validate()
    }
}

/// read and validate a RON config file
pub fn load_config (path: impl AsRef<Path>)->Result<HotspotMapConfig> {
    let data = filepath_contents( &path.as_ref())?;
    let config: HotspotMapConfig = ron::de::from_bytes( data.as_slice())?;
    config.validate()?;
    Ok(config)
}

/* #region input columns **********************************************************************************************/

/// names of the columns we need to interpret in the tab separated input, and the number of fields
/// a valid row has to have
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub longitude: String,
    pub latitude: String,
    pub confidence: String,
    pub region: String,
    pub expected_fields: usize,
}

impl Default for ColumnConfig {
    fn default()->Self {
        ColumnConfig {
            longitude: "BUJUR".into(),
            latitude: "LINTANG".into(),
            confidence: "KEPERCAYAAN".into(),
            region: "REGION".into(),
            expected_fields: 12,
        }
    }
}

impl ColumnConfig {
    fn validate (&self)->Result<()> {
        if self.expected_fields == 0 {
            return Err( config_error!("expected_fields has to be positive"))
        }
        let names = [&self.longitude, &self.latitude, &self.confidence, &self.region];
        if names.iter().any(|n| n.is_empty()) {
            return Err( config_error!("column names must not be empty"))
        }
        for (i,n) in names.iter().enumerate() {
            if names[i+1..].contains(n) {
                return Err( config_error!("column {} mapped more than once", n))
            }
        }
        Ok(())
    }
}

/* #endregion input columns */

/* #region confidence scores ******************************************************************************************/

/// the integer confidence scores that define the three confidence tiers. Matching is exact, scores that
/// are not listed here do not belong to any tier
#[derive(Debug,Clone,Copy,Serialize,Deserialize,PartialEq,Eq)]
#[serde(default)]
pub struct ConfidenceScores {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

impl Default for ConfidenceScores {
    fn default()->Self { ConfidenceScores { low: 7, medium: 8, high: 9 } }
}

impl ConfidenceScores {
    pub fn level_of (&self, score: i64)->Option<ConfidenceLevel> {
        if score == self.low { Some(ConfidenceLevel::Low) }
        else if score == self.medium { Some(ConfidenceLevel::Medium) }
        else if score == self.high { Some(ConfidenceLevel::High) }
        else { None }
    }

    pub fn score_of (&self, level: ConfidenceLevel)->i64 {
        match level {
            ConfidenceLevel::Low => self.low,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::High => self.high,
        }
    }

    fn validate (&self)->Result<()> {
        if self.low == self.medium || self.low == self.high || self.medium == self.high {
            Err( config_error!("confidence scores have to be distinct: {:?}", self))
        } else {
            Ok(())
        }
    }
}

/* #endregion confidence scores */

/* #region map layout and style ***************************************************************************************/

/// regular tick/grid positions from `start` to `end` (inclusive) in degrees
#[derive(Debug,Clone,Copy,Serialize,Deserialize,PartialEq)]
pub struct TickRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl TickRange {
    pub fn new (start: f64, end: f64, step: f64)->Self { TickRange { start, end, step } }

    pub fn values (&self)->Vec<f64> {
        let mut v = Vec::new();
        if self.step > 0.0 {
            let n = ((self.end - self.start) / self.step + 1e-9).floor();
            if n >= 0.0 {
                for i in 0..=(n as usize) {
                    v.push( self.start + i as f64 * self.step);
                }
            }
        }
        v
    }
}

/// geometry (in degrees for anything that lives inside the map, inches/points otherwise) and colors of the map.
/// Color specs are either color names known to `odin_image::parse_color` or hex rgb strings
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct MapStyle {
    pub extent: BoundingBox<f64>,
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub lon_ticks: TickRange,
    pub lat_ticks: TickRange,
    pub tick_label_pt: f32,

    pub background: String,
    pub others_fill: String,
    pub indonesia_fill: String,
    pub edge: String,
    pub box_fill: String,
    pub grid: String,
    pub low_color: String,
    pub medium_color: String,
    pub high_color: String,

    /// marker areas in pt², as in scatter plots
    pub hotspot_marker_area: f32,
    pub legend_marker_area: f32,

    pub legend_origin: (f64,f64),
    pub legend_size: (f64,f64),
    pub legend_pt: f32,

    /// top left corner of the region count box
    pub region_box_origin: (f64,f64),
    pub region_box_width: f64,
    pub region_row_height: f64,
    pub region_pt: f32,

    pub title_origin: (f64,f64),
    pub title_line_spacing: f64,
    pub title_pt: f32,
    pub subtitle_pt: f32,

    pub logo_center: (f64,f64),
    pub logo_zoom: f32,
}

impl Default for MapStyle {
    fn default()->Self {
        MapStyle {
            extent: BoundingBox::new( 95.0, -19.0, 143.0, 14.0),
            width_in: 10.0,
            height_in: 7.5,
            dpi: 150.0,
            lon_ticks: TickRange::new( 95.0, 140.0, 5.0),
            lat_ticks: TickRange::new( -15.0, 15.0, 5.0),
            tick_label_pt: 8.0,

            background: "white".into(),
            others_fill: "white".into(),
            indonesia_fill: "lightgrey".into(),
            edge: "black".into(),
            box_fill: "moccasin".into(),
            grid: "gray".into(),
            low_color: "green".into(),
            medium_color: "yellow".into(),
            high_color: "red".into(),

            hotspot_marker_area: 10.0,
            legend_marker_area: 30.0,

            legend_origin: (96.0, -13.0),
            legend_size: (9.0, 5.0),
            legend_pt: 9.0,

            region_box_origin: (127.5, 14.5),
            region_box_width: 15.0,
            region_row_height: 0.6,
            region_pt: 8.0,

            title_origin: (98.8, -15.2),
            title_line_spacing: 1.0,
            title_pt: 11.0,
            subtitle_pt: 10.0,

            logo_center: (97.3, -16.0),
            logo_zoom: 0.15,
        }
    }
}

impl MapStyle {
    pub fn canvas_size (&self)->(u32,u32) {
        ( (self.width_in * self.dpi).round() as u32, (self.height_in * self.dpi).round() as u32 )
    }

    pub fn color_of (&self, level: ConfidenceLevel)->&str {
        match level {
            ConfidenceLevel::Low => &self.low_color,
            ConfidenceLevel::Medium => &self.medium_color,
            ConfidenceLevel::High => &self.high_color,
        }
    }

    fn validate (&self)->Result<()> {
        if !self.extent.is_proper() {
            return Err( config_error!("map extent has to have positive width and height: {:?}", self.extent))
        }
        if !(self.dpi > 0.0 && self.width_in > 0.0 && self.height_in > 0.0) {
            return Err( config_error!("figure size and dpi have to be positive"))
        }
        let (w,h) = self.canvas_size();
        if w < 100 || h < 100 {
            return Err( config_error!("figure too small: {}x{} px", w, h))
        }
        if !(self.logo_zoom > 0.0) {
            return Err( config_error!("logo zoom has to be positive"))
        }
        Ok(())
    }
}

/// the (Indonesian) text items of the map
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct MapTexts {
    pub title: String,
    pub date_label: String,
    pub satellites: String,
    pub legend_title: String,
    pub low_label: String,
    pub medium_label: String,
    pub high_label: String,
    pub region_header: String,
    pub total_label: String,
}

impl Default for MapTexts {
    fn default()->Self {
        MapTexts {
            title: "PETA SEBARAN HOTSPOT".into(),
            date_label: "Tanggal".into(),
            satellites: "Satelit: Terra, Aqua, Suomi NPP, NOAA-20, dan NOAA-21".into(),
            legend_title: "Tingkat Kepercayaan".into(),
            low_label: "Rendah".into(),
            medium_label: "Sedang".into(),
            high_label: "Tinggi".into(),
            region_header: "Wilayah".into(),
            total_label: "INDONESIA".into(),
        }
    }
}

impl MapTexts {
    pub fn label_of (&self, level: ConfidenceLevel)->&str {
        match level {
            ConfidenceLevel::Low => &self.low_label,
            ConfidenceLevel::Medium => &self.medium_label,
            ConfidenceLevel::High => &self.high_label,
        }
    }
}

/* #endregion map layout and style */
