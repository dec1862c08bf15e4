// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Flight Computer.

/// Converts an angle from degree minutes and seconds to decimal.
pub fn dms_to_decimal(degree: u8, minutes: u8, seconds: u8) -> f64 {
    degree as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

/// Converts an absolute decimal angle to degree and minutes, rounded to the
/// nearest full minute.
pub fn decimal_to_dm(decimal: f64) -> (u8, u8) {
    let total_minutes = (decimal.abs() * 60.0).round() as u32;
    ((total_minutes / 60) as u8, (total_minutes % 60) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_dms() {
        assert_eq!(dms_to_decimal(53, 30, 0), 53.5);
        assert!((dms_to_decimal(9, 59, 17) - 9.988055).abs() < 1e-6);
    }

    #[test]
    fn rounds_minute_overflow_into_degree() {
        // 45° 59' 50" rounds up to 46° 00'
        assert_eq!(decimal_to_dm(dms_to_decimal(45, 59, 50)), (46, 0));
        assert_eq!(decimal_to_dm(-73.5), (73, 30));
    }
}
