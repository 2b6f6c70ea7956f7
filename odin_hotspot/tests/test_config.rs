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
use odin_hotspot::{
    config::{load_config,HotspotMapConfig,TickRange},
    hotspot::ConfidenceLevel,
    OdinHotspotError
};

fn write_config (contents: &str)->(tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hotspot_map.ron");
    fs::write( &path, contents).unwrap();
    (tmp, path)
}

#[test]
fn test_defaults() {
    let config = HotspotMapConfig::default();
    config.validate().unwrap();

    assert_eq!( config.input_path, PathBuf::from("data/Hotspot_Indonesia.txt"));
    assert_eq!( config.columns.expected_fields, 12);
    assert_eq!( config.confidence.level_of( 7), Some(ConfidenceLevel::Low));
    assert_eq!( config.confidence.level_of( 9), Some(ConfidenceLevel::High));
    assert_eq!( config.confidence.level_of( 10), None);
    assert_eq!( config.texts.label_of( ConfidenceLevel::Medium), "Sedang");
    assert_eq!( config.map.color_of( ConfidenceLevel::Low), "green");
}

#[test]
fn test_shipped_config() {
    let config = load_config("configs/hotspot_map.ron").unwrap();
    let defaults = HotspotMapConfig::default();

    assert_eq!( config.map.extent, defaults.map.extent);
    assert_eq!( config.map.canvas_size(), (1500, 1125));
    assert_eq!( config.texts.region_header, "Wilayah"); // not in file
}

#[test]
fn test_partial_config() {
    let (_tmp, path) = write_config( r##"
        HotspotMapConfig(
            input_path: "in/today.txt",
            confidence: ( high: 10 ),
            map: ( dpi: 100.0, high_color: "#ff00ff" ),
        )
    "##);
    let config = load_config( &path).unwrap();

    assert_eq!( config.input_path, PathBuf::from("in/today.txt"));
    assert_eq!( config.csv_path, PathBuf::from("data/Hotspot_Indonesia.csv"));
    assert_eq!( (config.confidence.low, config.confidence.medium, config.confidence.high), (7, 8, 10));
    assert_eq!( config.map.canvas_size(), (1000, 750));
    assert_eq!( config.map.color_of( ConfidenceLevel::High), "#ff00ff");
    assert_eq!( config.map.legend_origin, (96.0, -13.0));
}

#[test]
fn test_invalid_configs() {
    let (_tmp, path) = write_config("HotspotMapConfig( confidence: ( low: 8 ) )");
    assert!( matches!( load_config( &path), Err(OdinHotspotError::ConfigError(_))));

    let (_tmp, path) = write_config("HotspotMapConfig( columns: ( region: \"BUJUR\" ) )");
    assert!( matches!( load_config( &path), Err(OdinHotspotError::ConfigError(_))));

    let (_tmp, path) = write_config("HotspotMapConfig( map: ( extent: ( west: 10.0, south: 0.0, east: 10.0, north: 5.0 ) ) )");
    assert!( matches!( load_config( &path), Err(OdinHotspotError::ConfigError(_))));

    let (_tmp, path) = write_config("HotspotMapConfig( map: ( dpi: \"high\" ) )");
    assert!( matches!( load_config( &path), Err(OdinHotspotError::RonError(_))));

    assert!( matches!( load_config("configs/no_such_config.ron"), Err(OdinHotspotError::IOError(_))));
}

#[test]
fn test_tick_range() {
    assert_eq!( TickRange::new( 95.0, 140.0, 5.0).values().len(), 10);
    assert_eq!( TickRange::new( -15.0, 15.0, 5.0).values(), vec![-15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0]);
    assert!( TickRange::new( 0.0, 1.0, 0.0).values().is_empty());
    assert!( TickRange::new( 1.0, 0.0, 1.0).values().is_empty());
}
