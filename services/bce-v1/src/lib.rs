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

//! Signer for Baidu Cloud (BCE) services, implementing `bce-auth-v1`.
//!
//! ## Example
//!
//! ```
//! use bcesign_bce_v1::{Credential, RequestInfo, Signer, SigningOptions};
//!
//! # fn main() -> bcesign_core::Result<()> {
//! let signer = Signer::new(Credential::new("AK", "SK"));
//!
//! let req = RequestInfo::new("GET", "/v1/object").with_header("Host", "bj.bcebos.com");
//! let token = signer.authorize(&req, &SigningOptions::new("2015-04-27T08:23:49Z"))?;
//!
//! assert!(token.starts_with("bce-auth-v1/AK/2015-04-27T08:23:49Z/1800/host/"));
//! # Ok(())
//! # }
//! ```

mod canonical;
pub use canonical::{canonicalize_headers, canonicalize_params, normalize};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{RequestInfo, SignatureContext, Signer, SigningOptions};

pub mod constants;
