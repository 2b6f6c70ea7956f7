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

use odin_common::define_error;
use odin_image::OdinImageError;

pub type Result<T> = std::result::Result<T, OdinHotspotError>;

define_error!{ pub OdinHotspotError =
    IOError( #[from] std::io::Error) : "IO error: {0}",
    CsvError( #[from] csv::Error) : "CSV error: {0}",
    RonError( #[from] ron::error::SpannedError) : "config RON error: {0}",
    GeoJsonError( #[from] geojson::Error) : "GeoJSON error: {0}",
    ImageError( #[from] OdinImageError) : "image error: {0}",
    EmptyInput(String) : "empty input: {0}",
    MissingColumn(String) : "missing column: {0}",
    InvalidField(String) : "invalid field: {0}",
    UnsupportedFormat(String) : "unsupported base layer format: {0}",
    BaseLayerError(String) : "base layer error: {0}",
    ConfigError(String) : "invalid config: {0}"
}

macro_rules! invalid_field {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinHotspotError::InvalidField( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_field;

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinHotspotError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
