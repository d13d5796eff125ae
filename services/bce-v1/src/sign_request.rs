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

use std::fmt::{Debug, Formatter, Write};

use bcesign_core::hash::hex_hmac_sha256;
use bcesign_core::time::{format_iso8601, DateTime};
use bcesign_core::utils::Redact;
use bcesign_core::{Error, Result, SigningRequest};
use http::header::{HeaderName, AUTHORIZATION, HOST};
use http::request::Parts;
use http::{HeaderMap, HeaderValue};
use log::debug;

use crate::canonical::{canonicalize_headers, canonicalize_params};
use crate::constants::*;
use crate::Credential;

/// A snapshot of the request to authorize.
///
/// `headers` is an ordered list on purpose: the signed header names in the
/// token follow its order.
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    /// Upper-case HTTP verb.
    pub method: String,
    /// Target path, without query string.
    pub url: String,
    /// Request headers in iteration order.
    pub headers: Vec<(String, String)>,
    /// Query parameters, not percent encoded.
    pub params: Vec<(String, String)>,
}

impl RequestInfo {
    /// Create a request info without headers or params.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// Per-call signing options.
#[derive(Debug, Clone)]
pub struct SigningOptions {
    timestamp: String,
    headers_to_sign: Option<Vec<String>>,
    expire_in_seconds: Option<i64>,
}

impl SigningOptions {
    /// Create options with the given UTC timestamp, e.g. `2015-04-27T08:23:49Z`.
    ///
    /// The timestamp is used verbatim and is not validated.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            headers_to_sign: None,
            expire_in_seconds: None,
        }
    }

    /// Create options whose timestamp is `time` formatted as ISO 8601.
    pub fn from_time(time: DateTime) -> Self {
        Self::new(format_iso8601(time))
    }

    /// Sign exactly these headers (plus every `x-bce-*` header).
    ///
    /// An empty list falls back to [`DEFAULT_HEADERS_TO_SIGN`].
    pub fn with_headers_to_sign<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.headers_to_sign = Some(
            names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Set how long the authorization stays valid.
    ///
    /// Zero or negative values fall back to [`DEFAULT_EXPIRE_IN_SECONDS`].
    pub fn with_expire_in_seconds(mut self, expire_in_seconds: i64) -> Self {
        self.expire_in_seconds = Some(expire_in_seconds);
        self
    }

    /// The timestamp carried in the auth string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The effective expiration in seconds.
    pub fn expire_in_seconds(&self) -> i64 {
        match self.expire_in_seconds {
            Some(v) if v > 0 => v,
            _ => DEFAULT_EXPIRE_IN_SECONDS,
        }
    }

    /// The effective list of header names to sign.
    pub fn headers_to_sign(&self) -> Vec<&str> {
        match &self.headers_to_sign {
            Some(names) if !names.is_empty() => names.iter().map(String::as_str).collect(),
            _ => DEFAULT_HEADERS_TO_SIGN.to_vec(),
        }
    }
}

/// Everything computed while authorizing one request.
///
/// Built by [`Signer::signature_context`] and thrown away after use.
#[derive(Clone)]
pub struct SignatureContext {
    /// `method \n url \n canonical query \n canonical headers`
    pub canonical_request: String,
    /// Lower-cased signed header names, in request order.
    pub signed_headers: Vec<String>,
    /// `bce-auth-v1/{access_key_id}/{timestamp}/{expire_in_seconds}`
    pub auth_string_prefix: String,
    signing_key: String,
    /// Hex encoded final signature.
    pub signature: String,
}

impl SignatureContext {
    /// Format the value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!(
            "{}/{}/{}",
            self.auth_string_prefix,
            self.signed_headers.join(";"),
            self.signature
        )
    }
}

impl Debug for SignatureContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureContext")
            .field("canonical_request", &self.canonical_request)
            .field("signed_headers", &self.signed_headers)
            .field("auth_string_prefix", &self.auth_string_prefix)
            .field("signing_key", &Redact::from(&self.signing_key))
            .field("signature", &self.signature)
            .finish()
    }
}

/// Signer that implements BCE auth v1.
///
/// The credential is owned and never mutated, so one signer can be shared
/// across threads and used concurrently.
#[derive(Debug, Clone)]
pub struct Signer {
    credential: Credential,
}

impl Signer {
    /// Create a signer that owns `credential`.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Compute the `Authorization` header value for `req`.
    ///
    /// ```text
    /// bce-auth-v1/{access_key_id}/{timestamp}/{expire}/{signed headers}/{signature}
    /// ```
    pub fn authorize(&self, req: &RequestInfo, options: &SigningOptions) -> Result<String> {
        Ok(self.signature_context(req, options)?.authorization())
    }

    /// Compute the whole signature context for `req`.
    pub fn signature_context(
        &self,
        req: &RequestInfo,
        options: &SigningOptions,
    ) -> Result<SignatureContext> {
        self.build_context(
            &req.method,
            &req.url,
            &req.params,
            req.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            options,
        )
    }

    /// Sign an http request in place.
    ///
    /// Before signing, `host` is taken from the uri authority and
    /// `x-bce-date` from the options timestamp when the request lacks them,
    /// and `x-bce-security-token` is set when the credential carries one.
    /// The token is then inserted as the `Authorization` header.
    ///
    /// A header carrying several values is signed once, with its values
    /// joined by `,` in request order.
    ///
    /// On error the request headers are left exactly as they were.
    pub fn sign(&self, parts: &mut Parts, options: &SigningOptions) -> Result<()> {
        let host = parts
            .uri
            .authority()
            .map(|a| HeaderValue::from_str(a.as_str()))
            .transpose()?;
        if host.is_none() && !parts.headers.contains_key(HOST) {
            return Err(Error::request_invalid(
                "request without host is invalid for signing",
            ));
        }
        let date = HeaderValue::from_str(options.timestamp())?;
        let security_token = match self.credential.security_token() {
            Some(token) => {
                let mut value = HeaderValue::from_str(token)?;
                // Set token value sensitive to avoid leaking.
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let mut req = SigningRequest::build(parts);
        let original_headers = req.headers.clone();
        if let Some(host) = host {
            req.header_insert_if_absent(HOST, host);
        }
        req.header_insert_if_absent(HeaderName::from_static(X_BCE_DATE), date);
        if let Some(token) = security_token {
            req.headers
                .insert(HeaderName::from_static(X_BCE_SECURITY_TOKEN), token);
        }

        let signed = self
            .build_context(
                req.method.as_str(),
                &req.path,
                &req.query,
                header_entries(&req.headers),
                options,
            )
            .and_then(|ctx| HeaderValue::from_str(&ctx.authorization()).map_err(Error::from));
        match signed {
            Ok(mut authorization) => {
                authorization.set_sensitive(true);
                req.headers.insert(AUTHORIZATION, authorization);
                req.apply(parts);
                Ok(())
            }
            Err(err) => {
                req.headers = original_headers;
                req.apply(parts);
                Err(err)
            }
        }
    }

    fn build_context<K, V>(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        headers: impl IntoIterator<Item = (K, V)>,
        options: &SigningOptions,
    ) -> Result<SignatureContext>
    where
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        if self.credential.secret_access_key().is_empty() {
            return Err(Error::credential_invalid(
                "secret access key must not be empty",
            ));
        }

        let (signed_headers, canonical_headers) =
            canonicalize_headers(headers, &options.headers_to_sign());
        let canonical_query = canonicalize_params(params);

        let canonical_request = {
            // 256 is specially chosen to avoid reallocation for most requests.
            let mut f = String::with_capacity(256);
            writeln!(f, "{method}")?;
            writeln!(f, "{url}")?;
            writeln!(f, "{canonical_query}")?;
            write!(f, "{canonical_headers}")?;
            f
        };
        debug!("calculated canonical request: {canonical_request}");
        debug!("calculated signed headers: {}", signed_headers.join(";"));

        let auth_string_prefix = format!(
            "{BCE_AUTH_VERSION}/{}/{}/{}",
            self.credential.access_key_id(),
            options.timestamp(),
            options.expire_in_seconds()
        );
        debug!("calculated auth string prefix: {auth_string_prefix}");

        let signing_key = hex_hmac_sha256(
            self.credential.secret_access_key().as_bytes(),
            auth_string_prefix.as_bytes(),
        )?;
        let signature = hex_hmac_sha256(signing_key.as_bytes(), canonical_request.as_bytes())?;

        Ok(SignatureContext {
            canonical_request,
            signed_headers,
            auth_string_prefix,
            signing_key,
            signature,
        })
    }
}

/// One `(name, value)` entry per header name, repeated values joined by `,`.
fn header_entries(headers: &HeaderMap) -> Vec<(&str, Vec<u8>)> {
    headers
        .keys()
        .map(|name| {
            let mut value = Vec::new();
            for (idx, v) in headers.get_all(name).iter().enumerate() {
                if idx > 0 {
                    value.push(b',');
                }
                value.extend_from_slice(v.as_bytes());
            }
            (name.as_str(), value)
        })
        .collect()
}
