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

//! daily hotspot map job: cleaned CSV plus PNG map from the BMKG hotspot list

use std::path::{Path,PathBuf};
use anyhow::{Result,anyhow};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use odin_common::{datetime::{local_yesterday,parse_date}, fs::resolve_path};
use odin_hotspot::{HotspotMapConfig, DEFAULT_CONFIG_FILE, load_config, run_csv_report, run_report};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "create the cleaned CSV and the hotspot map of Indonesia from the daily hotspot list")]
pub struct Args {
    /// project root that all relative paths are resolved against
    #[arg(short,long, default_value = ".")]
    pub base_dir: PathBuf,

    /// RON config file (default: <base_dir>/hotspot_map.ron if it exists)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// report date shown in the map title (default: yesterday)
    #[arg(short,long, value_parser = parse_report_date)]
    pub date: Option<NaiveDate>,

    /// only write the cleaned CSV and log the summary
    #[arg(long)]
    pub no_map: bool,
}

fn parse_report_date (s: &str)->std::result::Result<NaiveDate,String> {
    parse_date( s).ok_or_else(|| format!("not a valid date: '{}' (use YYYY-MM-DD)", s))
}

fn get_config (args: &Args)->Result<HotspotMapConfig> {
    if let Some(path) = &args.config {
        let path = resolve_path( &args.base_dir, path);
        info!("using config {:?}", path);
        return load_config( &path).map_err(|e| anyhow!("failed to load config {:?}: {}", path, e))
    }

    let default_path = args.base_dir.join( DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        info!("using config {:?}", default_path);
        Ok( load_config( &default_path)? )
    } else {
        Ok( HotspotMapConfig::default() )
    }
}

fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();
    let config = get_config( &args)?;
    let report_date = args.date.unwrap_or_else( local_yesterday);
    let base_dir: &Path = &args.base_dir;

    let outcome = if args.no_map {
        run_csv_report( &config, base_dir, report_date)?
    } else {
        run_report( &config, base_dir, report_date)?
    };

    if let Some(map_path) = &outcome.map_path {
        info!("map: {:?}", map_path);
    }

    Ok(())
}
