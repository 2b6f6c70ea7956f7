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

use std::{io, path::Path};
use tracing::info;
use odin_common::fs::ensure_parent_dir;
use crate::errors::Result;
use crate::hotspot::{HotspotRecord,HotspotTable};

/// shortest round-trip representation that always has a fractional part ("106.0", not "106").
/// NaN is written as an empty field
pub fn format_float (v: f64)->String {
    if v.is_nan() { String::new() } else { format!("{:?}", v) }
}

fn record_fields (table: &HotspotTable, rec: &HotspotRecord)->Vec<String> {
    let idx = &table.columns;
    rec.fields.iter().enumerate().map( |(i,f)| {
        if i == idx.lon { format_float( rec.lon) }
        else if i == idx.lat { format_float( rec.lat) }
        else if i == idx.confidence { rec.confidence.to_string() }
        else { f.clone() }
    }).collect()
}

/// write the cleaned hotspot table as comma separated values with the original header.
/// Returns the number of data records written
pub fn write_hotspot_records (table: &HotspotTable, writer: impl io::Write)->Result<usize> {
    let mut csv_writer = csv::Writer::from_writer( writer);

    csv_writer.write_record( &table.header)?;
    for rec in &table.records {
        csv_writer.write_record( record_fields( table, rec))?;
    }
    csv_writer.flush()?;

    Ok( table.records.len())
}

pub fn write_hotspot_csv (table: &HotspotTable, path: impl AsRef<Path>)->Result<usize> {
    let path = path.as_ref();
    ensure_parent_dir( path)?;

    let file = std::fs::File::create( path)?;
    let n = write_hotspot_records( table, io::BufWriter::new(file))?;
    info!("wrote {} cleaned hotspot records to {:?}", n, path);

    Ok(n)
}
