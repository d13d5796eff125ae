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

//! Sign a request with credentials loaded from the environment.
//!
//! ```shell
//! BCE_ACCESS_KEY_ID=ak BCE_SECRET_ACCESS_KEY=sk RUST_LOG=debug cargo run --example sign_request
//! ```

use bcesign_bce_v1::{Config, Signer, SigningOptions};
use bcesign_core::{Context, OsEnv, Result};
use chrono::Utc;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    info!("loaded config: {config:?}");

    let signer = Signer::new(config.into_credential()?);

    let (mut parts, _) = http::Request::get("https://bj.bcebos.com/v1/my-bucket/my-object")
        .header(http::header::CONTENT_TYPE, "application/octet-stream")
        .body(())
        .map_err(|e| bcesign_core::Error::request_invalid("build request").with_source(e))?
        .into_parts();

    // The caller owns the clock.
    let options = SigningOptions::from_time(Utc::now()).with_expire_in_seconds(3600);
    signer.sign(&mut parts, &options)?;

    for (name, value) in parts.headers.iter() {
        info!("{name}: {value:?}");
    }
    println!(
        "Authorization: {}",
        parts.headers[http::header::AUTHORIZATION]
            .to_str()
            .map_err(bcesign_core::Error::from)?
    );
    Ok(())
}
