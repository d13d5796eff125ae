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

use std::thread;

use super::{init_signing_test, object_request, TIMESTAMP};
use anyhow::Result;
use bcesign_bce_v1::SigningOptions;

#[test]
fn test_shared_signer_across_threads() -> Result<()> {
    let signer = init_signing_test();
    let options = SigningOptions::new(TIMESTAMP);
    let expected = signer.authorize(&object_request(), &options)?;

    let tokens = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| signer.authorize(&object_request(), &options)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("signing thread must not panic"))
            .collect::<Result<Vec<_>, _>>()
    })?;

    assert_eq!(tokens.len(), 8);
    assert!(tokens.iter().all(|token| *token == expected));
    Ok(())
}
