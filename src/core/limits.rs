/*!
 * System Limits and Constants
 *
 * Centralized location for all simulator-wide limits, thresholds, and magic numbers.
 * Organized by domain for maintainability and discoverability.
 *
 * ## Design Philosophy
 * - All values include rationale comments explaining WHY they exist
 * - Performance-critical constants are marked with [PERF]
 */

use crate::core::types::Priority;

// =============================================================================
// PRIORITY BOUNDS
// =============================================================================

/// Lowest schedulable priority
/// Leaves headroom below it for the queue's internal stale-entry sentinel
pub const PRIORITY_MIN: Priority = 1;

/// Highest schedulable priority
pub const PRIORITY_MAX: Priority = 50;

// =============================================================================
// READY QUEUE
// =============================================================================

/// Heap capacity raised from zero on first use (16 entries)
/// [PERF] Skips the smallest doubling steps for typical workloads
pub const READY_QUEUE_BASELINE: usize = 16;

// =============================================================================
// DRIVER DEFAULTS
// =============================================================================

/// Default process table slots
/// Sized so a stock run exercises one heap growth past the baseline
pub const DEFAULT_TABLE_CAPACITY: usize = 20;

/// Default number of processes the driver spawns
pub const DEFAULT_PROCESS_COUNT: usize = 20;
