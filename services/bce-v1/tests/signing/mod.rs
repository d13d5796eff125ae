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

mod concurrency;
mod golden;
mod properties;

use bcesign_bce_v1::{Credential, RequestInfo, Signer};

pub const TIMESTAMP: &str = "2015-04-27T08:23:49Z";

pub fn init_signing_test() -> Signer {
    let _ = env_logger::builder().is_test(true).try_init();

    Signer::new(Credential::new("AK", "SK"))
}

pub fn object_request() -> RequestInfo {
    RequestInfo::new("GET", "/v1/object").with_header("Host", "bj.bcebos.com")
}
