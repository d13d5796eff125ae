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

use std::fmt::{Debug, Formatter};

use bcesign_core::{utils::Redact, Context, Error, Result};

use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for bce services.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BCE_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BCE_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `security_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BCE_SESSION_TOKEN`]
    pub security_token: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set security_token
    pub fn with_security_token(mut self, security_token: impl Into<String>) -> Self {
        self.security_token = Some(security_token.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set on this config win over the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(BCE_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BCE_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BCE_SESSION_TOKEN) {
            self.security_token.get_or_insert(v);
        }

        self
    }

    /// Build the credential this config describes.
    pub fn into_credential(self) -> Result<Credential> {
        let access_key_id = self.access_key_id.ok_or_else(|| {
            Error::config_invalid(format!(
                "access_key_id is required, set it directly or via {BCE_ACCESS_KEY_ID}"
            ))
        })?;
        let secret_access_key = self.secret_access_key.ok_or_else(|| {
            Error::config_invalid(format!(
                "secret_access_key is required, set it directly or via {BCE_SECRET_ACCESS_KEY}"
            ))
        })?;

        let cred = Credential::new(access_key_id, secret_access_key);
        Ok(match self.security_token {
            Some(token) => cred.with_security_token(token),
            None => cred,
        })
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("security_token", &Redact::from(&self.security_token))
            .finish()
    }
}
