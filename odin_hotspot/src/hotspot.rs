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

//! import of the tab separated daily hotspot list as it is published by BMKG.
//! The first line is a header, every other line is a hotspot with (among others) BUJUR (longitude),
//! LINTANG (latitude), KEPERCAYAAN (confidence score) and REGION columns

use std::{fs::File, io::{self,BufRead,BufReader}, path::Path, str::FromStr};
use serde::{Serialize,Deserialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use geo_types::Point;
use tracing::{debug,info};
use odin_common::MinMax;
use crate::config::{ColumnConfig,ConfidenceScores};
use crate::errors::{OdinHotspotError,Result,config_error,invalid_field};

/* #region enumerations ***********************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,EnumIter,AsRefStr,Serialize,Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High
}

/// the major geographic groupings of Indonesia we aggregate over, in report order
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,EnumIter,EnumString,IntoStaticStr,Serialize,Deserialize)]
pub enum Region {
    #[strum(serialize = "SUMATERA")] Sumatera,
    #[strum(serialize = "JAWA")] Jawa,
    #[strum(serialize = "KEPULAUAN NUSA TENGGARA")] NusaTenggara,
    #[strum(serialize = "KALIMANTAN")] Kalimantan,
    #[strum(serialize = "SULAWESI")] Sulawesi,
    #[strum(serialize = "KEPULAUAN MALUKU")] Maluku,
    #[strum(serialize = "PAPUA")] Papua,
}

impl Region {
    /// exact match of the REGION column value
    pub fn from_label (label: &str)->Option<Region> {
        Region::from_str( label).ok()
    }

    /// the label as it appears in the input data
    pub fn label (&self)->&'static str { (*self).into() }

    pub fn all ()->Vec<Region> { Region::iter().collect() }
}

/* #endregion enumerations */

/* #region records ****************************************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub struct HotspotRecord {
    /// 1-based line number in the input
    pub line: usize,
    pub lon: f64,
    pub lat: f64,
    pub confidence: i64,
    pub region: String,

    /// all fields of the row, as read
    pub fields: Vec<String>,
}

impl HotspotRecord {
    pub fn point (&self)->Point<f64> { Point::new( self.lon, self.lat) }

    /// None if the REGION label is not one of our aggregation regions
    pub fn known_region (&self)->Option<Region> { Region::from_label( &self.region) }

    pub fn level (&self, scores: &ConfidenceScores)->Option<ConfidenceLevel> { scores.level_of( self.confidence) }
}

/// positions of the interpreted columns within a row
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ColumnIndices {
    pub lon: usize,
    pub lat: usize,
    pub confidence: usize,
    pub region: usize,
}

impl ColumnIndices {
    fn from_header (header: &[String], columns: &ColumnConfig)->Result<Self> {
        let find = |name: &str| {
            header.iter().position(|h| h == name)
                .ok_or_else(|| OdinHotspotError::MissingColumn( format!("{} not in header {:?}", name, header)))
        };

        let idx = ColumnIndices {
            lon: find( &columns.longitude)?,
            lat: find( &columns.latitude)?,
            confidence: find( &columns.confidence)?,
            region: find( &columns.region)?,
        };

        if idx.max() >= columns.expected_fields {
            Err( config_error!("interpreted columns exceed expected_fields {}", columns.expected_fields))
        } else {
            Ok(idx)
        }
    }

    fn max (&self)->usize {
        self.lon.max( self.lat).max( self.confidence).max( self.region)
    }
}

/// the cleaned hotspot list: header plus all rows that had the expected number of fields
#[derive(Debug,Clone)]
pub struct HotspotTable {
    pub header: Vec<String>,
    pub columns: ColumnIndices,
    pub records: Vec<HotspotRecord>,

    /// number of non-header lines that were dropped because they did not have the expected number of fields
    pub n_dropped: usize,
}

impl HotspotTable {
    pub fn len (&self)->usize { self.records.len() }

    pub fn is_empty (&self)->bool { self.records.is_empty() }
}

/// BMKG lines can have leading/trailing blanks and tabs, which do not count as (empty) fields
fn split_line (line: &str)->Vec<&str> {
    line.trim().split('\t').collect()
}

fn parse_field<T: FromStr> (fields: &[&str], idx: usize, col_name: &str, line: usize)->Result<T> {
    let s = fields[idx].trim();
    s.parse::<T>().map_err(|_| invalid_field!("line {}: column {} has invalid value '{}'", line, col_name, s))
}

/// parse tab separated hotspot data.
/// Lines that do not split into exactly `columns.expected_fields` fields are dropped, lines with
/// non-numeric coordinates or confidence score are errors
pub fn parse_hotspots (reader: impl BufRead, columns: &ColumnConfig)->Result<HotspotTable> {
    let mut lines = reader.lines();

    let header: Vec<String> = match lines.next() {
        Some(line) => split_line( &line?).into_iter().map(String::from).collect(),
        None => return Err( OdinHotspotError::EmptyInput("no header line".into()))
    };
    let idx = ColumnIndices::from_header( &header, columns)?;

    let mut records: Vec<HotspotRecord> = Vec::new();
    let mut n_dropped = 0;

    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line?;
        let fields = split_line( &line);

        if fields.len() != columns.expected_fields {
            n_dropped += 1;
            continue
        }

        let lon: f64 = parse_field( &fields, idx.lon, &columns.longitude, line_no)?;
        let lat: f64 = parse_field( &fields, idx.lat, &columns.latitude, line_no)?;
        let confidence: i64 = parse_field( &fields, idx.confidence, &columns.confidence, line_no)?;
        let region = fields[idx.region].to_string();
        let fields = fields.into_iter().map(String::from).collect();

        records.push( HotspotRecord { line: line_no, lon, lat, confidence, region, fields });
    }

    if n_dropped > 0 {
        debug!("dropped {} malformed hotspot lines", n_dropped);
    }
    if !records.is_empty() && header.len() != columns.expected_fields {
        return Err( config_error!("header has {} columns but records have {} fields", header.len(), columns.expected_fields))
    }

    Ok( HotspotTable { header, columns: idx, records, n_dropped } )
}

pub fn load_hotspot_file (path: impl AsRef<Path>, columns: &ColumnConfig)->Result<HotspotTable> {
    let path = path.as_ref();
    let file = File::open( path)?;
    let table = parse_hotspots( BufReader::new(file), columns)?;

    if !table.is_empty() {
        let mut lons = MinMax::new();
        let mut lats = MinMax::new();
        for r in &table.records {
            lons.add( r.lon);
            lats.add( r.lat);
        }
        info!("read {} hotspots from {:?} (lon {:.2}..{:.2}, lat {:.2}..{:.2})",
              table.len(), path, lons.min, lons.max, lats.min, lats.max);
    } else {
        info!("no hotspots in {:?}", path);
    }

    Ok(table)
}

/* #endregion records */

/* #region confidence tiers *******************************************************************************************/

/// disjoint partition of hotspot records by exact confidence score match.
/// Records whose score is not one of the configured tier scores are not in any tier
#[derive(Debug,Clone)]
pub struct ConfidenceTiers<'a> {
    pub low: Vec<&'a HotspotRecord>,
    pub medium: Vec<&'a HotspotRecord>,
    pub high: Vec<&'a HotspotRecord>,
}

impl <'a> ConfidenceTiers<'a> {
    pub fn classify (table: &'a HotspotTable, scores: &ConfidenceScores)->Self {
        let mut tiers = ConfidenceTiers { low: Vec::new(), medium: Vec::new(), high: Vec::new() };

        for rec in &table.records {
            match rec.level( scores) {
                Some(ConfidenceLevel::Low) => tiers.low.push(rec),
                Some(ConfidenceLevel::Medium) => tiers.medium.push(rec),
                Some(ConfidenceLevel::High) => tiers.high.push(rec),
                None => {}
            }
        }

        tiers
    }

    pub fn get (&self, level: ConfidenceLevel)->&[&'a HotspotRecord] {
        match level {
            ConfidenceLevel::Low => &self.low,
            ConfidenceLevel::Medium => &self.medium,
            ConfidenceLevel::High => &self.high,
        }
    }

    pub fn len (&self, level: ConfidenceLevel)->usize { self.get(level).len() }

    pub fn total (&self)->usize { self.low.len() + self.medium.len() + self.high.len() }

    /// the hotspot positions of a tier as geographic (lon,lat) points
    pub fn points (&self, level: ConfidenceLevel)->Vec<Point<f64>> {
        self.get(level).iter().map(|r| r.point()).collect()
    }
}

/* #endregion confidence tiers */

/// parse in-memory hotspot data
pub fn parse_hotspot_str (data: &str, columns: &ColumnConfig)->Result<HotspotTable> {
    parse_hotspots( io::Cursor::new( data.as_bytes()), columns)
}
