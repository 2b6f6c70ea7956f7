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

use std::path::{Path,PathBuf};
use odin_common::fs::*;

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_resolve_path() {
    let base = Path::new("/data/hotspots");
    assert_eq!( resolve_path( base, "data/Hotspot_Indonesia.txt"), PathBuf::from("/data/hotspots/data/Hotspot_Indonesia.txt"));
    assert_eq!( resolve_path( base, "/tmp/out.png"), PathBuf::from("/tmp/out.png"));
}

#[test]
fn test_extensions() {
    assert_eq!( normalized_extension("shp/Indonesia_38_Provinsi.SHP"), "shp");
    assert_eq!( normalized_extension("layers/world.geojson"), "geojson");
    assert_eq!( normalized_extension("README"), "");
    assert_eq!( filestem(&"shp/world_without_idn.shp"), Some("world_without_idn"));
}

#[test]
fn test_ensure_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a").join("b").join("out.csv");

    ensure_parent_dir( &file).unwrap();
    assert!( dir.path().join("a").join("b").is_dir());

    // bare filenames have no parent to create
    ensure_parent_dir( "out.csv").unwrap();
}

#[test]
fn test_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.txt");

    std::fs::write( &path, "").unwrap();
    assert!( filepath_contents( &path).is_err());

    std::fs::write( &path, "BUJUR\tLINTANG").unwrap();
    assert_eq!( filepath_contents_as_string( &path).unwrap(), "BUJUR\tLINTANG");
    assert_eq!( filepath_contents( &path).unwrap().len(), 13);
}
