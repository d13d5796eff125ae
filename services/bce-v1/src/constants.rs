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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Version tag leading every auth string.
pub const BCE_AUTH_VERSION: &str = "bce-auth-v1";

/// Expiration used when none (or a non-positive one) is given.
pub const DEFAULT_EXPIRE_IN_SECONDS: i64 = 1800;

/// Headers signed when the caller doesn't choose any.
pub const DEFAULT_HEADERS_TO_SIGN: [&str; 4] =
    ["host", "content-md5", "content-length", "content-type"];

// Headers used in bce services.
pub const X_BCE_PREFIX: &str = "x-bce-";
pub const X_BCE_DATE: &str = "x-bce-date";
pub const X_BCE_SECURITY_TOKEN: &str = "x-bce-security-token";

// Query parameter never signed, whatever its case.
pub const AUTHORIZATION_PARAM: &str = "authorization";

// Env values used in bce services.
pub const BCE_ACCESS_KEY_ID: &str = "BCE_ACCESS_KEY_ID";
pub const BCE_SECRET_ACCESS_KEY: &str = "BCE_SECRET_ACCESS_KEY";
pub const BCE_SESSION_TOKEN: &str = "BCE_SESSION_TOKEN";

/// AsciiSet for BCE normalization.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `!`, `'`, `(`, `)` and `*` are encoded as well.
pub static BCE_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
