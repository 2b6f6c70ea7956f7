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

use std::{fs, path::PathBuf};
use chrono::NaiveDate;
use odin_hotspot::{run_csv_report, run_report, HotspotMapConfig, OdinHotspotError, TierCounts};

/// a scratch project dir with the sample hotspot list and GeoJSON base layers
fn setup_project ()->(tempfile::TempDir, HotspotMapConfig) {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path();
    fs::create_dir_all( base.join("data")).unwrap();
    fs::create_dir_all( base.join("shp")).unwrap();
    fs::copy( "tests/data/sample_hotspots.txt", base.join("data/Hotspot_Indonesia.txt")).unwrap();
    fs::copy( "tests/data/islands.geojson", base.join("shp/indonesia.geojson")).unwrap();
    fs::copy( "tests/data/islands.geojson", base.join("shp/others.geojson")).unwrap();

    let mut config = HotspotMapConfig::default();
    config.indonesia_layer = PathBuf::from("shp/indonesia.geojson");
    config.others_layer = PathBuf::from("shp/others.geojson");
    config.map.dpi = 50.0;

    (tmp, config)
}

/// a scratch project dir laid out the way the default configuration expects it, with shapefile base layers
/// and the fonts in place
fn setup_default_project ()->tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path();
    for dir in ["data", "shp", "fonts"] {
        fs::create_dir_all( base.join(dir)).unwrap();
    }
    fs::copy( "tests/data/sample_hotspots.txt", base.join("data/Hotspot_Indonesia.txt")).unwrap();
    for ext in ["shp", "shx", "dbf"] {
        fs::copy( format!("tests/data/islands.{ext}"), base.join( format!("shp/Indonesia_38_Provinsi.{ext}"))).unwrap();
        fs::copy( format!("tests/data/islands.{ext}"), base.join( format!("shp/world_without_idn.{ext}"))).unwrap();
    }
    for font in ["DejaVuSansMono.ttf", "DejaVuSansMono-Bold.ttf"] {
        fs::copy( format!("tests/data/fonts/{font}"), base.join("fonts").join(font)).unwrap();
    }
    tmp
}

fn report_date ()->NaiveDate { NaiveDate::from_ymd_opt( 2025, 8, 14).unwrap() }

#[test]
fn test_csv_report() {
    let (tmp, config) = setup_project();
    let outcome = run_csv_report( &config, tmp.path(), report_date()).unwrap();
    println!("{:#?}", outcome);

    assert_eq!( outcome.csv_path, tmp.path().join("data/Hotspot_Indonesia.csv"));
    assert!( outcome.csv_path.is_file());
    assert!( outcome.map_path.is_none());
    assert_eq!( (outcome.n_records, outcome.n_dropped, outcome.n_classified), (10, 2, 9));
    assert_eq!( outcome.summary.total, TierCounts::new( 3, 3, 3));
}

#[test]
fn test_missing_input() {
    let tmp = tempfile::tempdir().unwrap();
    let res = run_csv_report( &HotspotMapConfig::default(), tmp.path(), report_date());
    assert!( matches!( res, Err(OdinHotspotError::IOError(_))));
}

#[test]
fn test_missing_font_is_fatal() {
    let (tmp, mut config) = setup_project();
    config.font_path = PathBuf::from("fonts/missing.ttf");

    let res = run_report( &config, tmp.path(), report_date());
    assert!( matches!( res, Err(OdinHotspotError::ImageError(_))));
    assert!( !tmp.path().join( &config.map_path).exists());
}

#[test]
fn test_missing_base_layer_is_fatal() {
    let (tmp, mut config) = setup_project();
    config.others_layer = PathBuf::from("shp/world_without_idn.geojson");

    assert!( run_report( &config, tmp.path(), report_date()).is_err());
}

#[test]
fn test_default_report() {
    let tmp = setup_default_project();
    let config = HotspotMapConfig::default();

    let outcome = run_report( &config, tmp.path(), report_date()).unwrap();
    println!("{:#?}", outcome);

    assert_eq!( outcome.csv_path, tmp.path().join("data/Hotspot_Indonesia.csv"));
    let map_path = outcome.map_path.unwrap();
    assert_eq!( map_path, tmp.path().join("images/update_hotspot.png"));
    let img = image::open( &map_path).unwrap();
    assert_eq!( (img.width(), img.height()), (1500, 1125));
}

#[test]
fn test_full_report() {
    let (tmp, mut config) = setup_project();
    fs::create_dir_all( tmp.path().join("fonts")).unwrap();
    fs::copy( "tests/data/fonts/DejaVuSansMono.ttf", tmp.path().join("fonts/DejaVuSansMono.ttf")).unwrap();
    config.bold_font_path = Some( PathBuf::from("fonts/not_there-Bold.ttf")); // falls back to regular

    // no logo in the project dir, which is not an error
    let outcome = run_report( &config, tmp.path(), report_date()).unwrap();

    let map_path = outcome.map_path.unwrap();
    assert_eq!( map_path, tmp.path().join("images/update_hotspot.png"));
    let img = image::open( &map_path).unwrap();
    assert_eq!( (img.width(), img.height()), (500, 375));
}
