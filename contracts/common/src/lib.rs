//! Shared access-control utilities and error types for the staking suite.
//!
//! This crate provides:
//! - [`CommonError`]: standardised error codes for all contracts.
//! - Role-based access control behind the [`AccessGate`] seam.
//! - A storage-backed reentrancy lock for entry points that call out to
//!   token contracts.
//!
//! Contract-specific errors can extend the range starting at code **100** and
//! above, ensuring no collisions with the common set.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod access_control;
pub mod reentrancy;

pub use access_control::{default_admin_role, AccessGate, RoleTable};

// ── Shared error enum ────────────────────────────────────────────────────────

/// Standardised error codes shared by every contract in the workspace.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 10 – 19 | Authentication & authorisation|
/// | 40 – 49 | Contract state                |
/// | 100+    | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,

    /// The contract has already been initialised.
    /// Returned when `initialize` is called more than once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller does not hold the role required by the operation.
    AccessDenied = 10,

    // ── Contract state (40–49) ───────────────────────────────
    /// A balance-mutating entry point was re-entered while an outbound
    /// token call was still pending.
    ReentrantCall = 41,
}

#[cfg(test)]
mod tests {
    use super::CommonError;

    #[test]
    fn common_error_discriminants_are_stable() {
        assert_eq!(CommonError::NotInitialized as u32, 1);
        assert_eq!(CommonError::AlreadyInitialized as u32, 2);
        assert_eq!(CommonError::AccessDenied as u32, 10);
        assert_eq!(CommonError::ReentrantCall as u32, 41);
    }
}
