/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

use serde::{Serialize,Deserialize};
use num::Num;

pub mod macros;
pub mod fs;
pub mod datetime;

/// a generic bounding box without semantics for the coordinate type
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    pub fn width (&self) -> T { self.east - self.west }

    pub fn height (&self) -> T { self.north - self.south }

    /// a box is only usable for projections if it has a positive extent in both dimensions
    pub fn is_proper (&self) -> bool {
        self.east > self.west && self.north > self.south
    }
}

/// a simple incremental min/max accumulator for f64 observations
#[derive(Debug,Clone,Copy)]
pub struct MinMax {
    pub n: usize,
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    pub fn new()->Self { MinMax { n: 0, min: f64::MAX, max: f64::MIN } }

    pub fn add (&mut self, x: f64) {
        self.n += 1;
        if x < self.min { self.min = x }
        if x > self.max { self.max = x }
    }

    pub fn is_empty (&self)->bool { self.n == 0 }
}

impl Default for MinMax {
    fn default()->Self { MinMax::new() }
}
