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

use std::collections::HashSet;

use super::{init_signing_test, object_request, TIMESTAMP};
use anyhow::Result;
use bcesign_bce_v1::constants::DEFAULT_HEADERS_TO_SIGN;
use bcesign_bce_v1::{canonicalize_headers, canonicalize_params, normalize};
use bcesign_bce_v1::{Credential, RequestInfo, Signer, SigningOptions};
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;

#[test]
fn test_normalize_printable_ascii_round_trip() -> Result<()> {
    let printable: String = (b' '..=b'~').map(char::from).collect();

    let encoded = normalize(&printable);
    assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.~%".contains(&b)));
    assert_eq!(percent_decode_str(&encoded).decode_utf8()?, printable);

    for c in printable.chars() {
        let encoded = normalize(&c.to_string());
        assert_eq!(percent_decode_str(&encoded).decode_utf8()?, c.to_string());
    }
    assert_eq!(normalize(" "), "%20");
    assert_eq!(normalize("!'()*"), "%21%27%28%29%2A");
    Ok(())
}

#[test]
fn test_authorization_param_never_signed() {
    let params: Vec<(String, String)> = ["authorization", "Authorization", "AUTHORIZATION"]
        .iter()
        .map(|k| (k.to_string(), "secret".to_string()))
        .chain([("a".to_string(), "1".to_string())])
        .collect();

    let canonical = canonicalize_params(&params);
    assert_eq!(canonical, "a=1");
    assert!(!canonical.to_lowercase().contains("authorization"));
}

#[test]
fn test_signature_ignores_input_order() -> Result<()> {
    let signer = init_signing_test();
    let options = SigningOptions::new(TIMESTAMP);

    let forward = RequestInfo::new("GET", "/v1/bucket")
        .with_param("prefix", "a")
        .with_param("maxKeys", "10")
        .with_header("Host", "bj.bcebos.com")
        .with_header("X-Bce-Date", TIMESTAMP);
    let backward = RequestInfo::new("GET", "/v1/bucket")
        .with_param("maxKeys", "10")
        .with_param("prefix", "a")
        .with_header("X-Bce-Date", TIMESTAMP)
        .with_header("Host", "bj.bcebos.com");

    let forward = signer.signature_context(&forward, &options)?;
    let backward = signer.signature_context(&backward, &options)?;

    // Same signed content, same signature.
    assert_eq!(forward.canonical_request, backward.canonical_request);
    assert_eq!(forward.signature, backward.signature);
    // Signed names follow input order, so the tokens differ. This is expected.
    assert_eq!(forward.signed_headers, vec!["host", "x-bce-date"]);
    assert_eq!(backward.signed_headers, vec!["x-bce-date", "host"]);
    assert_ne!(forward.authorization(), backward.authorization());
    Ok(())
}

#[test]
fn test_header_selection() {
    let (signed, canonical) = canonicalize_headers(
        [
            ("X-Bce-Date", TIMESTAMP),
            ("Content-Type", "   "),
            ("Accept", "*/*"),
        ],
        &DEFAULT_HEADERS_TO_SIGN,
    );

    assert_eq!(signed, vec!["x-bce-date"]);
    assert_eq!(canonical, "x-bce-date:2015-04-27T08%3A23%3A49Z");
}

#[test]
fn test_auth_string_prefix_avalanche() -> Result<()> {
    let req = object_request();
    let mut signatures = HashSet::new();
    let mut count = 0;

    for ak in ["AK", "AK2", "ak"] {
        let signer = Signer::new(Credential::new(ak, "SK"));
        for timestamp in [TIMESTAMP, "2015-04-27T08:23:50Z", "2016-04-27T08:23:49Z"] {
            for expire in [1800, 1801, 3600] {
                let options = SigningOptions::new(timestamp).with_expire_in_seconds(expire);
                signatures.insert(signer.signature_context(&req, &options)?.signature);
                count += 1;
            }
        }
    }

    assert_eq!(signatures.len(), count);
    Ok(())
}

#[test]
fn test_secret_key_changes_signature() -> Result<()> {
    let req = object_request();
    let options = SigningOptions::new(TIMESTAMP);

    let a = Signer::new(Credential::new("AK", "SK")).authorize(&req, &options)?;
    let b = Signer::new(Credential::new("AK", "SK2")).authorize(&req, &options)?;
    assert_ne!(a, b);
    Ok(())
}
