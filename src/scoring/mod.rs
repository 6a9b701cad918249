// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Field dominates frequency. A title that mentions a term once beats a body that
//! repeats it fifty times, because term frequency saturates (BM25-style) well below
//! the gap between the field boosts.
//!
//! # Key Invariant: Field Dominance
//!
//! ```text
//! title_boost * tf_weight(1)  >  content_boost * lim tf_weight(tf)
//!        10.0 * 1.0           >          1.0 * (K1 + 1) = 2.2
//! ```
//!
//! `tf_weight` is 1.0 at one occurrence and approaches `K1 + 1` from below, so the
//! inequality holds for every frequency as long as
//! `title_boost > content_boost * (K1 + 1)`.

use crate::config::SearchConfig;
use crate::types::Field;

/// Term frequency saturation. Same constant Lucene uses for BM25.
pub const K1: f64 = 1.2;

/// Upper bound of [`tf_weight`].
pub const MAX_TF_WEIGHT: f64 = K1 + 1.0;

/// Saturating term-frequency weight: 1.0 for a single hit, never reaching `K1 + 1`.
#[inline]
pub fn tf_weight(tf: u32) -> f64 {
    if tf == 0 {
        return 0.0;
    }
    let tf = f64::from(tf);
    tf * (K1 + 1.0) / (tf + K1)
}

#[inline]
pub fn field_boost(field: Field, config: &SearchConfig) -> f64 {
    match field {
        Field::Title => config.title_boost,
        Field::Content => config.content_boost,
    }
}

/// Score contributed by one term occurring `tf` times in `field`.
#[inline]
pub fn term_score(field: Field, tf: u32, config: &SearchConfig) -> f64 {
    field_boost(field, config) * tf_weight(tf)
}

/// Whether a config keeps the field-dominance invariant.
pub fn title_dominates(config: &SearchConfig) -> bool {
    config.title_boost > config.content_boost * MAX_TF_WEIGHT
}
