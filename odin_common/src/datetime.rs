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

use chrono::{DateTime, Days, Local, NaiveDate};

#[inline]
pub fn local_now()->DateTime<Local> {
    Local::now()
}

#[inline]
pub fn local_today()->NaiveDate {
    local_now().date_naive()
}

/// the calendar day before the given date (saturates at the earliest representable date)
pub fn day_before (date: NaiveDate)->NaiveDate {
    date.checked_sub_days( Days::new(1)).unwrap_or(date)
}

/// daily products are usually about the previous (complete) day
pub fn local_yesterday()->NaiveDate {
    day_before( local_today())
}

/// parse dates given as "YYYY-MM-DD" (ISO), "YYYY/MM/DD" or "DD-MM-YYYY"
pub fn parse_date (spec: &str)->Option<NaiveDate> {
    let spec = spec.trim();
    ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"].iter()
        .find_map( |fmt| NaiveDate::parse_from_str( spec, fmt).ok())
}

/// day-month-year with dashes, as used in Indonesian reports
pub fn format_dmy (date: &NaiveDate)->String {
    date.format("%d-%m-%Y").to_string()
}
