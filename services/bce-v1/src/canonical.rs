// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Canonicalization of query parameters and headers for BCE auth v1.

use std::collections::HashSet;

use percent_encoding::percent_encode;

use crate::constants::{AUTHORIZATION_PARAM, BCE_URI_ENCODE_SET, X_BCE_PREFIX};

/// Percent-encode `value` the way BCE expects.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` becomes `%XX` with uppercase hex,
/// so space is `%20` and `!'()*` are `%21 %27 %28 %29 %2A`.
pub fn normalize(value: &str) -> String {
    normalize_bytes(value.as_bytes())
}

fn normalize_bytes(value: &[u8]) -> String {
    percent_encode(value, &BCE_URI_ENCODE_SET).to_string()
}

/// Build the canonical query string.
///
/// ```text
/// [(b, 2), (a, 1), (Authorization, x)] => "a=1&b=2"
/// ```
///
/// Pairs whose key is `authorization` in any case are dropped. Duplicate keys
/// are kept as separate entries.
pub fn canonicalize_params(params: &[(String, String)]) -> String {
    let mut entries: Vec<String> = params
        .iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case(AUTHORIZATION_PARAM))
        .map(|(k, v)| format!("{}={}", normalize(k), normalize(v)))
        .collect();
    entries.sort_unstable();

    entries.join("&")
}

/// Select the headers to sign and build the canonical header block.
///
/// A header is selected when its trimmed value is not empty and its
/// lower-cased name is either listed in `headers_to_sign` or starts with
/// `x-bce-`.
///
/// Returns `(signed_names, canonical_block)`:
///
/// - `signed_names` keeps the iteration order of `headers`, so callers
///   wanting a reproducible token must iterate headers reproducibly.
/// - `canonical_block` is the sorted `name:value` lines joined with `\n`,
///   and doesn't depend on iteration order.
///
/// Values that are valid UTF-8 are trimmed. Anything else is opaque bytes
/// and is encoded as-is.
pub fn canonicalize_headers<K, V>(
    headers: impl IntoIterator<Item = (K, V)>,
    headers_to_sign: &[impl AsRef<str>],
) -> (Vec<String>, String)
where
    K: AsRef<str>,
    V: AsRef<[u8]>,
{
    let headers_to_sign: HashSet<String> = headers_to_sign
        .iter()
        .map(|h| h.as_ref().to_lowercase())
        .collect();

    let mut signed_names = Vec::new();
    let mut entries = Vec::new();
    for (name, value) in headers {
        let value = value.as_ref();
        let value = match std::str::from_utf8(value) {
            Ok(v) => v.trim().as_bytes(),
            Err(_) => value,
        };
        if value.is_empty() {
            continue;
        }

        let name = name.as_ref().to_lowercase();
        if !(headers_to_sign.contains(&name) || name.starts_with(X_BCE_PREFIX)) {
            continue;
        }

        entries.push(format!("{}:{}", normalize(&name), normalize_bytes(value)));
        signed_names.push(name);
    }
    entries.sort_unstable();

    (signed_names, entries.join("\n"))
}
