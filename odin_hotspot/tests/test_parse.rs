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

use odin_hotspot::{
    config::{ColumnConfig,ConfidenceScores},
    hotspot::{parse_hotspot_str,load_hotspot_file,ConfidenceLevel,ConfidenceTiers,Region},
    OdinHotspotError
};

const SAMPLE: &str = "tests/data/sample_hotspots.txt";

fn row (lon: &str, lat: &str, conf: &str, region: &str)->String {
    format!("1\t2025-08-14\t06:12\t{lon}\t{lat}\t{conf}\tNOAA-20\tdesa\tkec\tkab\tprov\t{region}")
}

const HEADER: &str = "NO\tTANGGAL\tWAKTU\tBUJUR\tLINTANG\tKEPERCAYAAN\tSATELIT\tDESA\tKECAMATAN\tKABUPATEN\tPROVINSI\tREGION";

#[test]
fn test_load_sample() {
    let table = load_hotspot_file( SAMPLE, &ColumnConfig::default()).unwrap();
    println!("header: {:?}", table.header);

    assert_eq!( table.header.len(), 12);
    assert_eq!( table.header[11], "REGION"); // no trailing CR
    assert_eq!( table.len(), 10);
    assert_eq!( table.n_dropped, 2);

    let first = &table.records[0];
    assert_eq!( first.line, 2);
    assert_eq!( first.lon, 101.4512);
    assert_eq!( first.lat, 0.5123);
    assert_eq!( first.confidence, 9);
    assert_eq!( first.known_region(), Some(Region::Sumatera));
    assert_eq!( first.fields[7], "Sungai Apit, Siak");

    // surrounding blanks and tabs are stripped before splitting
    let jawa = table.records.iter().find(|r| r.fields[0] == "6").unwrap();
    assert_eq!( jawa.region, "JAWA");
    assert_eq!( jawa.known_region(), Some(Region::Jawa));

    let unknown = table.records.iter().find(|r| r.region == "LAUT").unwrap();
    assert_eq!( unknown.known_region(), None);
}

#[test]
fn test_wrong_field_count_dropped() {
    let data = format!("{HEADER}\n{}\n{}\textra\n1\t2\t3\n{}\n",
        row("101.0","1.0","7","SUMATERA"), row("102.0","2.0","8","JAWA"), row("103.0","3.0","9","PAPUA"));
    let table = parse_hotspot_str( &data, &ColumnConfig::default()).unwrap();

    assert_eq!( table.len(), 2);
    assert_eq!( table.n_dropped, 2);
    assert_eq!( table.records[1].line, 5);
    assert_eq!( table.records[1].region, "PAPUA");
}

#[test]
fn test_header_only() {
    let table = parse_hotspot_str( HEADER, &ColumnConfig::default()).unwrap();
    assert!( table.is_empty());
    assert_eq!( table.n_dropped, 0);
}

#[test]
fn test_empty_input() {
    match parse_hotspot_str( "", &ColumnConfig::default()) {
        Err(OdinHotspotError::EmptyInput(_)) => {}
        other => panic!("expected EmptyInput error, got {:?}", other)
    }
}

#[test]
fn test_missing_column() {
    let data = HEADER.replace("KEPERCAYAAN", "CONFIDENCE");
    match parse_hotspot_str( &data, &ColumnConfig::default()) {
        Err(OdinHotspotError::MissingColumn(msg)) => assert!( msg.contains("KEPERCAYAAN")),
        other => panic!("expected MissingColumn error, got {:?}", other)
    }
}

#[test]
fn test_invalid_numeric_field() {
    let data = format!("{HEADER}\n{}\n{}\n", row("101.0","1.0","7","SUMATERA"), row("101.0","1.0","high","SUMATERA"));
    match parse_hotspot_str( &data, &ColumnConfig::default()) {
        Err(OdinHotspotError::InvalidField(msg)) => {
            println!("{msg}");
            assert!( msg.contains("line 3"));
            assert!( msg.contains("KEPERCAYAAN"));
            assert!( msg.contains("high"));
        }
        other => panic!("expected InvalidField error, got {:?}", other)
    }

    let data = format!("{HEADER}\n{}\n", row("x101","1.0","7","SUMATERA"));
    assert!( matches!( parse_hotspot_str( &data, &ColumnConfig::default()), Err(OdinHotspotError::InvalidField(_))));
}

#[test]
fn test_custom_columns() {
    let columns = ColumnConfig {
        longitude: "LON".into(),
        latitude: "LAT".into(),
        confidence: "CONF".into(),
        region: "AREA".into(),
        expected_fields: 4,
    };
    let data = "LAT\tLON\tAREA\tCONF\n-2.5\t110.25\tKALIMANTAN\t8\n";
    let table = parse_hotspot_str( data, &columns).unwrap();

    assert_eq!( table.len(), 1);
    let r = &table.records[0];
    assert_eq!( (r.lon, r.lat, r.confidence), (110.25, -2.5, 8));
    assert_eq!( r.known_region(), Some(Region::Kalimantan));
}

#[test]
fn test_classify() {
    let table = load_hotspot_file( SAMPLE, &ColumnConfig::default()).unwrap();
    let tiers = ConfidenceTiers::classify( &table, &ConfidenceScores::default());

    assert_eq!( tiers.len( ConfidenceLevel::Low), 3);
    assert_eq!( tiers.len( ConfidenceLevel::Medium), 3);
    assert_eq!( tiers.len( ConfidenceLevel::High), 3);
    assert_eq!( tiers.total(), 9); // the score 6 record is in no tier

    for level in [ConfidenceLevel::Low, ConfidenceLevel::Medium, ConfidenceLevel::High] {
        let score = ConfidenceScores::default().score_of( level);
        assert!( tiers.get( level).iter().all(|r| r.confidence == score));
    }

    // tiers are disjoint
    let mut lines: Vec<usize> = tiers.low.iter().chain( tiers.medium.iter()).chain( tiers.high.iter()).map(|r| r.line).collect();
    lines.sort();
    lines.dedup();
    assert_eq!( lines.len(), 9);

    let pts = tiers.points( ConfidenceLevel::High);
    assert_eq!( pts.len(), 3);
    assert_eq!( (pts[0].x(), pts[0].y()), (101.4512, 0.5123));
}

#[test]
fn test_classify_custom_scores() {
    let table = load_hotspot_file( SAMPLE, &ColumnConfig::default()).unwrap();
    let scores = ConfidenceScores { low: 6, medium: 7, high: 8 };
    let tiers = ConfidenceTiers::classify( &table, &scores);

    assert_eq!( tiers.len( ConfidenceLevel::Low), 1);
    assert_eq!( tiers.len( ConfidenceLevel::Medium), 3);
    assert_eq!( tiers.len( ConfidenceLevel::High), 3);

    let first = &table.records[0]; // score 9
    assert_eq!( first.level( &scores), None);
    assert_eq!( first.level( &ConfidenceScores::default()), Some(ConfidenceLevel::High));
    let sulawesi = table.records.iter().find(|r| r.confidence == 6).unwrap();
    assert_eq!( sulawesi.level( &scores), Some(ConfidenceLevel::Low));
}

#[test]
fn test_region_labels() {
    assert_eq!( Region::all().len(), 7);
    assert_eq!( Region::all()[2], Region::NusaTenggara);
    assert_eq!( Region::NusaTenggara.label(), "KEPULAUAN NUSA TENGGARA");
    assert_eq!( Region::from_label("KEPULAUAN MALUKU"), Some(Region::Maluku));
    assert_eq!( Region::from_label("Papua"), None); // exact match only
}
