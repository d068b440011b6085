/*!
 * Core Types
 * Common types used across the simulator
 */

use crate::core::limits::{PRIORITY_MAX, PRIORITY_MIN};

/// Process ID type
pub type Pid = u32;

/// Priority level (1-50, higher is dispatched first)
pub type Priority = u8;

/// Clamp a raw priority into the schedulable range.
///
/// Every path that writes a priority runs through this, so a block can never
/// carry an out-of-range value.
#[inline(always)]
pub const fn clamp_priority(priority: Priority) -> Priority {
    if priority < PRIORITY_MIN {
        PRIORITY_MIN
    } else if priority > PRIORITY_MAX {
        PRIORITY_MAX
    } else {
        priority
    }
}
