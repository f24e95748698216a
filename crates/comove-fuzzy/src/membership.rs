//! Low / medium / high membership ramps over an absolute percentage change.
//!
//! The ranges are evaluated as a strict partition with closed upper ends,
//! so exactly one formula applies to each bucket at any `x`. Some ramps
//! cross below zero inside their own range (`low(30)` would be `-0.295`);
//! every degree is clamped to `[0, 1]`. Only positivity feeds the encoder,
//! and the clamp never changes the sign of a degree.

use comove_core::types::{ChangeTable, MembershipRecord, MembershipTable};
use tracing::debug;

/// Upper end of the fully-low region.
pub const LOW_FULL: f64 = 25.0;
/// Upper end of the low fall-off and start of the medium rise.
pub const LOW_EDGE: f64 = 33.0;
/// Medium peak.
pub const MEDIUM_PEAK: f64 = 50.0;
/// Upper end of the medium fall-off and start of the high rise.
pub const MEDIUM_EDGE: f64 = 66.0;
/// Start of the fully-high region (exclusive).
pub const HIGH_FULL: f64 = 75.0;

const LOW_INTERCEPT: f64 = 0.33;
const MEDIUM_INTERCEPT: f64 = 0.66;

/// Negative or missing magnitudes are read as zero change.
fn magnitude(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.max(0.0)
    }
}

fn unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

pub fn low(x: f64) -> f64 {
    let x = magnitude(x);
    if x <= LOW_FULL {
        1.0
    } else if x <= LOW_EDGE {
        unit(LOW_INTERCEPT - (x - LOW_FULL) / (LOW_EDGE - LOW_FULL))
    } else {
        0.0
    }
}

pub fn medium(x: f64) -> f64 {
    let x = magnitude(x);
    if x <= LOW_EDGE {
        0.0
    } else if x <= MEDIUM_PEAK {
        unit((x - LOW_EDGE) / (MEDIUM_PEAK - LOW_EDGE))
    } else if x <= MEDIUM_EDGE {
        unit(MEDIUM_INTERCEPT - (x - MEDIUM_PEAK) / (MEDIUM_EDGE - MEDIUM_PEAK))
    } else {
        0.0
    }
}

pub fn high(x: f64) -> f64 {
    let x = magnitude(x);
    if x <= MEDIUM_EDGE {
        0.0
    } else if x <= HIGH_FULL {
        unit((x - MEDIUM_EDGE) / (HIGH_FULL - MEDIUM_EDGE))
    } else {
        1.0
    }
}

/// All three degrees for one magnitude.
pub fn degrees(x: f64) -> MembershipRecord {
    MembershipRecord {
        low: low(x),
        medium: medium(x),
        high: high(x),
    }
}

/// Evaluate the ramps for every cell of a change table.
pub fn fuzzify(changes: &ChangeTable) -> MembershipTable {
    let memberships = changes.map(|record| degrees(record.abs_change));
    debug!(
        periods = memberships.row_count(),
        commodities = memberships.commodity_count(),
        "evaluated membership degrees"
    );
    memberships
}
