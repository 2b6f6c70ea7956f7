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

//! reference polygons (provinces, neighbouring countries) the hotspots are drawn on.
//! Coordinates are expected to be geographic (EPSG:4326) degrees. GeoJSON and ESRI shapefiles are always
//! supported, other OGR vector formats are read through GDAL if the `gdal` feature is enabled

use std::path::Path;
use geo_types::{Coord,Geometry,GeometryCollection,LineString,Polygon};
use shapefile::{PolygonRing,Shape};
use geojson::GeoJson;
use tracing::info;
use odin_common::{BoundingBox, error_variant, fs::{filestem,filepath_contents_as_string,normalized_extension}};
use crate::errors::{OdinHotspotError,Result};

#[derive(Debug,Clone)]
pub struct BaseLayer {
    pub name: String,
    pub polygons: Vec<Polygon<f64>>,
}

impl BaseLayer {
    pub fn new (name: impl ToString, polygons: Vec<Polygon<f64>>)->Self {
        BaseLayer { name: name.to_string(), polygons }
    }

    pub fn len (&self)->usize { self.polygons.len() }

    pub fn is_empty (&self)->bool { self.polygons.is_empty() }

    /// the bounding box of all exterior rings, None if there are no vertices
    pub fn bounds (&self)->Option<BoundingBox<f64>> {
        coord_bounds( self.polygons.iter().flat_map(|p| p.exterior().coords()))
    }
}

/// the bounding box of a polygon exterior ring
pub fn polygon_bounds (poly: &Polygon<f64>)->Option<BoundingBox<f64>> {
    coord_bounds( poly.exterior().coords())
}

fn coord_bounds<'a> (mut coords: impl Iterator<Item=&'a Coord<f64>>)->Option<BoundingBox<f64>> {
    let first = coords.next()?;
    let mut bbox = BoundingBox::new( first.x, first.y, first.x, first.y);
    for c in coords {
        bbox.west = bbox.west.min(c.x);
        bbox.east = bbox.east.max(c.x);
        bbox.south = bbox.south.min(c.y);
        bbox.north = bbox.north.max(c.y);
    }
    Some(bbox)
}

/// load a polygon layer, dispatching on the file extension
pub fn load_base_layer (path: impl AsRef<Path>)->Result<BaseLayer> {
    let path = path.as_ref();
    let name = filestem( &path).unwrap_or("layer").to_string();

    let polygons = match normalized_extension( path).as_str() {
        "geojson" | "json" => {
            let src = filepath_contents_as_string( &path)?;
            parse_geojson_polygons( &src)?
        }
        "shp" => read_shp_polygons( path)?,
        "gpkg" | "gml" | "kml" => read_ogr_polygons( path)?,
        ext => return Err( error_variant!( OdinHotspotError::UnsupportedFormat, "{:?} (extension '{}')", path, ext))
    };

    info!("loaded {} polygons from base layer {:?}", polygons.len(), path);
    Ok( BaseLayer { name, polygons } )
}

/// extract all polygons from GeoJSON source. Non-areal geometries are skipped
pub fn parse_geojson_polygons (src: &str)->Result<Vec<Polygon<f64>>> {
    let gj: GeoJson = src.parse()?;
    let gc = GeometryCollection::<f64>::try_from( &gj)?;

    let mut polygons = Vec::new();
    for geom in gc {
        collect_polygons( geom, &mut polygons);
    }
    Ok(polygons)
}

fn collect_polygons (geom: Geometry<f64>, acc: &mut Vec<Polygon<f64>>) {
    match geom {
        Geometry::Polygon(p) => acc.push(p),
        Geometry::MultiPolygon(mp) => acc.extend( mp.0),
        Geometry::Rect(r) => acc.push( r.to_polygon()),
        Geometry::Triangle(t) => acc.push( t.to_polygon()),
        Geometry::GeometryCollection(gc) => {
            for g in gc { collect_polygons( g, acc) }
        }
        _ => {} // points and lines have no area to fill
    }
}

/// read all polygon records of an ESRI shapefile. Only the .shp geometry is used, the .dbf attributes are ignored
pub fn read_shp_polygons (path: &Path)->Result<Vec<Polygon<f64>>> {
    let shapes = shapefile::read_shapes( path)
        .map_err(|e| error_variant!( OdinHotspotError::BaseLayerError, "failed to read {:?}: {}", path, e))?;

    let mut polygons = Vec::new();
    for shape in shapes {
        match shape {
            Shape::Polygon(p) => rings_to_polygons( p.rings(), |q: &shapefile::Point| (q.x, q.y), &mut polygons),
            Shape::PolygonM(p) => rings_to_polygons( p.rings(), |q: &shapefile::PointM| (q.x, q.y), &mut polygons),
            Shape::PolygonZ(p) => rings_to_polygons( p.rings(), |q: &shapefile::PointZ| (q.x, q.y), &mut polygons),
            _ => {} // no area
        }
    }
    Ok(polygons)
}

/// shapefile polygons are flat ring lists: each outer (clockwise) ring starts a new polygon,
/// inner rings are holes of the preceding outer ring
fn rings_to_polygons<P> (rings: &[PolygonRing<P>], xy: impl Fn(&P)->(f64,f64), acc: &mut Vec<Polygon<f64>>) {
    let mut current: Option<(LineString<f64>,Vec<LineString<f64>>)> = None;

    for ring in rings {
        let line: LineString<f64> = ring.points().iter().map(|p| xy(p)).collect::<Vec<_>>().into();
        match ring {
            PolygonRing::Outer(_) => {
                if let Some((exterior,holes)) = current.replace( (line, Vec::new())) {
                    acc.push( Polygon::new( exterior, holes));
                }
            }
            PolygonRing::Inner(_) => match current.as_mut() {
                Some((_,holes)) => holes.push( line),
                None => current = Some( (line, Vec::new())) // orphan hole, draw it as area
            }
        }
    }
    if let Some((exterior,holes)) = current {
        acc.push( Polygon::new( exterior, holes));
    }
}

#[cfg(feature="gdal")]
fn read_ogr_polygons (path: &Path)->Result<Vec<Polygon<f64>>> {
    use gdal::{Dataset, vector::LayerAccess};

    let ds = Dataset::open( path)
        .map_err(|e| error_variant!( OdinHotspotError::BaseLayerError, "failed to open {:?}: {}", path, e))?;

    let mut polygons = Vec::new();
    for mut layer in ds.layers() {
        for feature in layer.features() {
            if let Some(geom) = feature.geometry() {
                let geom = geom.to_geo()
                    .map_err(|e| error_variant!( OdinHotspotError::BaseLayerError, "invalid geometry in {:?}: {}", path, e))?;
                collect_polygons( geom, &mut polygons);
            }
        }
    }
    Ok(polygons)
}

#[cfg(not(feature="gdal"))]
fn read_ogr_polygons (path: &Path)->Result<Vec<Polygon<f64>>> {
    if !path.is_file() {
        return Err( error_variant!( OdinHotspotError::BaseLayerError, "base layer not found: {:?}", path))
    }
    Err( error_variant!( OdinHotspotError::UnsupportedFormat, "{:?} requires a build with the 'gdal' feature (or convert it to GeoJSON or shapefile)", path))
}
