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

use std::mem;

use http::header::HeaderName;
use http::uri::Authority;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

/// Signing context for request.
///
/// Headers are moved out of the request while signing and moved back by
/// [`SigningRequest::apply`]. The uri is never rewritten.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority, if the uri carries one.
    pub authority: Option<Authority>,
    /// HTTP path, without query.
    pub path: String,
    /// HTTP query parameters, percent decoded, in request order.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Self {
        SigningRequest {
            method: parts.method.clone(),
            authority: parts.uri.authority().cloned(),
            path: parts.uri.path().to_string(),
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        }
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) {
        mem::swap(&mut parts.headers, &mut self.headers);
    }

    /// Insert header only if the request doesn't carry it yet.
    ///
    /// Returns `true` if the header was inserted.
    pub fn header_insert_if_absent(&mut self, name: HeaderName, value: HeaderValue) -> bool {
        if self.headers.contains_key(&name) {
            return false;
        }
        self.headers.insert(name, value);
        true
    }
}
