// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

/// Cleans text pasted as route description and returns its words.
///
/// The text is uppercased and every character other than letters, digits,
/// `.` and `/` separates words. Leading and trailing dots and slashes are
/// removed from each word and empty words are dropped. Cleaning the joined
/// words again returns the same words.
///
/// ```
/// use routestring::route::clean_route_string;
///
/// assert_eq!(
///     clean_route_string("(kjfk,  DCT\talb..)\n-J121- bos/"),
///     vec!["KJFK", "DCT", "ALB", "J121", "BOS"]
/// );
/// ```
pub fn clean_route_string(s: &str) -> Vec<String> {
    s.to_uppercase()
        .split(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '/'))
        .map(|word| word.trim_matches(|c: char| c == '.' || c == '/'))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
