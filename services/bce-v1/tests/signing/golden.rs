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

//! Pinned tokens, calculated once with an independent HMAC-SHA256
//! implementation.

use super::{init_signing_test, object_request, TIMESTAMP};
use anyhow::Result;
use bcesign_bce_v1::{RequestInfo, SigningOptions};
use pretty_assertions::assert_eq;

#[test]
fn test_get_object() -> Result<()> {
    let signer = init_signing_test();

    let token = signer.authorize(&object_request(), &SigningOptions::new(TIMESTAMP))?;
    assert_eq!(
        token,
        "bce-auth-v1/AK/2015-04-27T08:23:49Z/1800/host/\
         8fccaa6779b00964bf32a694073a973189deb82587495823e098263c5c302751"
    );
    Ok(())
}

#[test]
fn test_list_objects_with_reserved_characters() -> Result<()> {
    let signer = init_signing_test();

    let req = RequestInfo::new("GET", "/v1/bucket")
        .with_param("prefix", "a/b")
        .with_param("marker", "it's(*)!")
        .with_header("x-bce-date", TIMESTAMP)
        .with_header("host", "bj.bcebos.com");

    let ctx = signer.signature_context(&req, &SigningOptions::new(TIMESTAMP))?;
    assert_eq!(
        ctx.canonical_request,
        "GET\n/v1/bucket\nmarker=it%27s%28%2A%29%21&prefix=a%2Fb\n\
         host:bj.bcebos.com\n\
         x-bce-date:2015-04-27T08%3A23%3A49Z"
    );
    assert_eq!(
        ctx.authorization(),
        "bce-auth-v1/AK/2015-04-27T08:23:49Z/1800/x-bce-date;host/\
         ffe6b9f7bb0e0621e4ea62b8286c21a546bdf119a46d690b67313731385beab2"
    );
    Ok(())
}

#[test]
fn test_token_shape() -> Result<()> {
    let signer = init_signing_test();

    let token = signer.authorize(
        &object_request().with_header("x-bce-date", TIMESTAMP),
        &SigningOptions::new(TIMESTAMP).with_expire_in_seconds(60),
    )?;

    let segments: Vec<&str> = token.split('/').collect();
    assert_eq!(segments.len(), 6);
    assert_eq!(segments[..5], ["bce-auth-v1", "AK", TIMESTAMP, "60", "host;x-bce-date"]);
    assert_eq!(segments[5].len(), 64);
    assert!(segments[5].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    Ok(())
}
