/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Date and timestamp parameters.
//!
//! The API takes `startDate`/`endDate` as `YYYY-MM-DD` and
//! `startTime`/`endTime` as `YYYY-MM-DD hh:mm:ss`. Both parameter kinds accept
//! either textual form here and are normalised to the form the API expects.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format of date-only parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of timestamp parameters
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse `value` in either accepted format. A bare date means midnight.
pub fn parse_timestamp(parameter: &str, value: &str) -> Result<NaiveDateTime> {
  let value = value.trim();
  if value.is_empty() {
    return Err(Error::validation(parameter, "must not be empty"));
  }

  if let Ok(ts) = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT) {
    return Ok(ts);
  }
  if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
    return Ok(date.and_time(NaiveTime::MIN));
  }

  Err(Error::validation(
    parameter,
    format!("`{value}` is neither `YYYY-MM-DD` nor `YYYY-MM-DD hh:mm:ss`"),
  ))
}

/// Validate a date-only parameter and render it as `YYYY-MM-DD`
pub fn date_param(parameter: &str, value: &str) -> Result<String> {
  Ok(parse_timestamp(parameter, value)?.format(DATE_FORMAT).to_string())
}

/// Validate a timestamp parameter and render it as `YYYY-MM-DD hh:mm:ss`
pub fn time_param(parameter: &str, value: &str) -> Result<String> {
  Ok(parse_timestamp(parameter, value)?.format(DATE_TIME_FORMAT).to_string())
}

/// Validate a `startDate`/`endDate` pair
pub fn date_range(start: &str, end: &str) -> Result<(String, String)> {
  let (from, to) = ordered("startDate", start, "endDate", end)?;
  Ok((from.format(DATE_FORMAT).to_string(), to.format(DATE_FORMAT).to_string()))
}

/// Validate a `startTime`/`endTime` pair
pub fn time_range(start: &str, end: &str) -> Result<(String, String)> {
  let (from, to) = ordered("startTime", start, "endTime", end)?;
  Ok((from.format(DATE_TIME_FORMAT).to_string(), to.format(DATE_TIME_FORMAT).to_string()))
}

fn ordered(
  start_name: &str,
  start: &str,
  end_name: &str,
  end: &str,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
  let from = parse_timestamp(start_name, start)?;
  let to = parse_timestamp(end_name, end)?;
  if from > to {
    return Err(Error::validation(end_name, format!("must not be before {start_name}")));
  }
  Ok((from, to))
}
