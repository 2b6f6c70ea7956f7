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

use image::{Rgba,RgbaImage};
use odin_common::BoundingBox;
use odin_image::pt_to_px;
use crate::errors::{Result,config_error};

/// pixel space around the map frame that is reserved for tick marks and labels
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    /// enough room for 8pt tick labels on the left and bottom side
    pub fn for_dpi (dpi: f32)->Self {
        Margins {
            left: pt_to_px( 30.0, dpi),
            right: pt_to_px( 8.0, dpi),
            top: pt_to_px( 10.0, dpi),
            bottom: pt_to_px( 20.0, dpi),
        }
    }
}

/// the (plate carree) placement of a geographic extent within a canvas.
/// Pixel positions are relative to the frame origin unless a function says otherwise. Anything that is
/// rendered into a frame layer (see `new_layer`) is clipped to the frame
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct MapFrame {
    pub extent: BoundingBox<f64>,
    pub x0: u32,
    pub y0: u32,
    pub width: u32,
    pub height: u32,
}

impl MapFrame {
    /// fit the extent into the canvas area within the margins, with the same pixel size for a degree of
    /// longitude and latitude. The frame is centered in the available area
    pub fn fit (extent: BoundingBox<f64>, canvas_size: (u32,u32), margins: &Margins)->Result<Self> {
        if !extent.is_proper() {
            return Err( config_error!("degenerate map extent {:?}", extent))
        }

        let avail_w = canvas_size.0 as f64 - (margins.left + margins.right) as f64;
        let avail_h = canvas_size.1 as f64 - (margins.top + margins.bottom) as f64;
        if avail_w < 1.0 || avail_h < 1.0 {
            return Err( config_error!("no room for map in {}x{} canvas", canvas_size.0, canvas_size.1))
        }

        let scale = (avail_w / extent.width()).min( avail_h / extent.height());
        let width = (extent.width() * scale).round().max(1.0);
        let height = (extent.height() * scale).round().max(1.0);

        let x0 = margins.left as f64 + (avail_w - width) / 2.0;
        let y0 = margins.top as f64 + (avail_h - height) / 2.0;

        Ok( MapFrame { extent, x0: x0.round() as u32, y0: y0.round() as u32, width: width as u32, height: height as u32 } )
    }

    /// pixels per degree in x and y direction
    pub fn scale (&self)->(f64,f64) {
        ( self.width as f64 / self.extent.width(), self.height as f64 / self.extent.height() )
    }

    /// frame relative pixel position of a geographic position
    pub fn to_px (&self, lon: f64, lat: f64)->(f32,f32) {
        let (sx,sy) = self.scale();
        ( ((lon - self.extent.west) * sx) as f32, ((self.extent.north - lat) * sy) as f32 )
    }

    /// canvas pixel position of a geographic position
    pub fn to_canvas_px (&self, lon: f64, lat: f64)->(f32,f32) {
        let (x,y) = self.to_px( lon, lat);
        ( x + self.x0 as f32, y + self.y0 as f32 )
    }

    /// does a geographic bounding box overlap the frame extent
    pub fn overlaps (&self, bbox: &BoundingBox<f64>)->bool {
        let e = &self.extent;
        bbox.west <= e.east && bbox.east >= e.west && bbox.south <= e.north && bbox.north >= e.south
    }

    /// the frame sized image that gets drawn into and then copied into the canvas
    pub fn new_layer (&self, background: Rgba<u8>)->RgbaImage {
        RgbaImage::from_pixel( self.width, self.height, background)
    }

    /// canvas pixel corners (top left, bottom right) of the frame
    pub fn canvas_corners (&self)->((f32,f32),(f32,f32)) {
        ( (self.x0 as f32, self.y0 as f32), ((self.x0 + self.width) as f32, (self.y0 + self.height) as f32) )
    }
}
