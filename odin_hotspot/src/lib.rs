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

//! daily hotspot report for Indonesia: reads the BMKG tab separated hotspot list, writes a cleaned CSV
//! and renders a PNG map with per region and per confidence tier counts

use std::path::{Path,PathBuf};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use odin_common::fs::resolve_path;

pub mod errors;
pub mod config;
pub mod hotspot;
pub mod summary;
pub mod csv_export;
pub mod basemap;
pub mod map_frame;
pub mod render;

pub use errors::{OdinHotspotError,Result};
pub use config::{HotspotMapConfig,load_config,DEFAULT_CONFIG_FILE};
pub use hotspot::{ConfidenceLevel,ConfidenceTiers,HotspotRecord,HotspotTable,Region,load_hotspot_file,parse_hotspots};
pub use summary::{HotspotSummary,TierCounts};
pub use csv_export::write_hotspot_csv;
pub use basemap::{BaseLayer,load_base_layer};
pub use render::{MapContext,MapFonts,load_logo,render_hotspot_map,save_map};

/// what a report run produced
#[derive(Debug,Clone,Serialize)]
pub struct ReportOutcome {
    pub report_date: NaiveDate,
    pub csv_path: PathBuf,
    pub map_path: Option<PathBuf>,

    pub n_records: usize,
    pub n_dropped: usize,
    pub n_classified: usize,
    pub summary: HotspotSummary,
}

/// run the complete report: cleaned CSV plus map
pub fn run_report (config: &HotspotMapConfig, base_dir: impl AsRef<Path>, report_date: NaiveDate)->Result<ReportOutcome> {
    execute_report( config, base_dir.as_ref(), report_date, true)
}

/// only write the cleaned CSV and compute (and log) the summary
pub fn run_csv_report (config: &HotspotMapConfig, base_dir: impl AsRef<Path>, report_date: NaiveDate)->Result<ReportOutcome> {
    execute_report( config, base_dir.as_ref(), report_date, false)
}

fn execute_report (config: &HotspotMapConfig, base_dir: &Path, report_date: NaiveDate, with_map: bool)->Result<ReportOutcome> {
    config.validate()?;
    let path = |p: &PathBuf| resolve_path( base_dir, p);

    let table = load_hotspot_file( path( &config.input_path), &config.columns)?;

    let csv_path = path( &config.csv_path);
    write_hotspot_csv( &table, &csv_path)?;

    let tiers = ConfidenceTiers::classify( &table, &config.confidence);
    let summary = HotspotSummary::from_tiers( &tiers);
    log_summary( config, &summary);

    let map_path = if with_map {
        let others = load_base_layer( path( &config.others_layer))?;
        let indonesia = load_base_layer( path( &config.indonesia_layer))?;
        let bold_font_path = config.bold_font_path.as_ref().map( |p| path(p));
        let fonts = MapFonts::load( path( &config.font_path), bold_font_path.as_deref())?;
        let logo = load_logo( path( &config.logo_path))?;

        let ctx = MapContext {
            config,
            tiers: &tiers,
            summary: &summary,
            others: &others,
            indonesia: &indonesia,
            fonts: &fonts,
            logo: logo.as_ref(),
            report_date,
        };
        let img = render_hotspot_map( &ctx)?;

        let map_path = path( &config.map_path);
        save_map( &img, &map_path)?;
        Some(map_path)

    } else {
        None
    };

    let outcome = ReportOutcome {
        report_date,
        csv_path,
        map_path,
        n_records: table.len(),
        n_dropped: table.n_dropped,
        n_classified: tiers.total(),
        summary,
    };
    info!("Work has been completed.");

    Ok(outcome)
}

fn log_summary (config: &HotspotMapConfig, summary: &HotspotSummary) {
    info!("{}", HotspotSummary::header_row( &config.texts.region_header));
    for (region,_) in &summary.regions {
        info!("{}", summary.region_row( *region));
    }
    info!("{}", summary.total_row( &config.texts.total_label));

    let u = summary.unattributed();
    if u.total() > 0 {
        info!("{} classified hotspots without known region", u.total());
    }
}
