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

use serde::Serialize;
use strum::IntoEnumIterator;
use crate::hotspot::{ConfidenceLevel,ConfidenceTiers,Region};

/// width of the label column in the monospace region table
pub const LABEL_WIDTH: usize = 24;

#[derive(Debug,Clone,Copy,Default,PartialEq,Eq,Serialize)]
pub struct TierCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl TierCounts {
    pub fn new (low: usize, medium: usize, high: usize)->Self { TierCounts { low, medium, high } }

    pub fn get (&self, level: ConfidenceLevel)->usize {
        match level {
            ConfidenceLevel::Low => self.low,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::High => self.high,
        }
    }

    fn inc (&mut self, level: ConfidenceLevel) {
        match level {
            ConfidenceLevel::Low => self.low += 1,
            ConfidenceLevel::Medium => self.medium += 1,
            ConfidenceLevel::High => self.high += 1,
        }
    }

    pub fn total (&self)->usize { self.low + self.medium + self.high }
}

/// per region and national hotspot counts for each confidence tier.
/// National totals include hotspots with unknown region labels, hence they can exceed the sum over regions
#[derive(Debug,Clone,Serialize)]
pub struct HotspotSummary {
    pub regions: Vec<(Region,TierCounts)>,
    pub total: TierCounts,
}

impl HotspotSummary {
    pub fn from_tiers (tiers: &ConfidenceTiers)->Self {
        let mut regions: Vec<(Region,TierCounts)> = Region::iter().map(|r| (r, TierCounts::default())).collect();
        let mut total = TierCounts::default();

        for level in ConfidenceLevel::iter() {
            for rec in tiers.get(level) {
                total.inc(level);
                if let Some(e) = regions.iter_mut().find(|(r,_)| r.label() == rec.region) {
                    e.1.inc(level);
                }
            }
        }

        HotspotSummary { regions, total }
    }

    pub fn counts (&self, region: Region)->TierCounts {
        self.regions.iter().find(|(r,_)| *r == region).map(|(_,c)| *c).unwrap_or_default()
    }

    /// the number of tier hotspots that could not be attributed to any region
    pub fn unattributed (&self)->TierCounts {
        let mut c = self.total;
        for (_,rc) in &self.regions {
            c.low -= rc.low;
            c.medium -= rc.medium;
            c.high -= rc.high;
        }
        c
    }

    pub fn header_row (header: &str)->String {
        format!("{:<w$}", header, w = LABEL_WIDTH)
    }

    pub fn region_row (&self, region: Region)->String {
        format_row( &title_case( region.label()), &self.counts(region))
    }

    pub fn total_row (&self, label: &str)->String {
        format_row( label, &self.total)
    }
}

fn format_row (label: &str, c: &TierCounts)->String {
    format!("{:<w$} {:>4} {:>4} {:>5}", label, c.low, c.medium, c.high, w = LABEL_WIDTH)
}

/// capitalize the first letter of each word and lower case the rest, where words are runs of letters
pub fn title_case (s: &str)->String {
    let mut res = String::with_capacity( s.len());
    let mut prev_is_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha { res.extend( c.to_lowercase()) } else { res.extend( c.to_uppercase()) }
            prev_is_alpha = true;
        } else {
            res.push(c);
            prev_is_alpha = false;
        }
    }

    res
}
