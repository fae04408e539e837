/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Route `tracing` events to stderr, filtered by `filter`.
///
/// An unparsable filter falls back to the default level and is
/// reported once logging is up. Installing twice is a no-op.
pub fn initialize_logging(filter: &str) {
    let (env_filter, bad_filter) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (
            EnvFilter::new(crate::config::DEFAULT_LOG_FILTER),
            Some(err),
        ),
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();

    if let Some(err) = bad_filter {
        tracing::warn!("ignoring invalid log filter '{}': {}", filter, err);
    }
}
