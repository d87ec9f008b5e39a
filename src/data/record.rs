// src/data/record.rs

//! Network address types, the masked range comparison, and the [`LogRecord`]
//! read from the log file.
//!
//! [`LogRecord`]: self::LogRecord

use crate::data::datetime::DateTimeL;

use std::net::Ipv4Addr;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Address and AddressMask
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A fixed-width binary network address. The 4-octet width is enforced by the
/// type so every [`address_in_range`] comparison is between equal widths.
pub type Address = Ipv4Addr;
pub type AddressOpt = Option<Address>;

/// A per-octet bit-selection pattern applied to [`Address`es] for range
/// comparison. Same width as `Address`; need not be a contiguous CIDR prefix.
///
/// [`Address`es]: self::Address
pub type AddressMask = Ipv4Addr;
pub type AddressMaskOpt = Option<AddressMask>;

/// The all-ones mask; under it [`address_in_range`] is exact-address equality.
pub const MASK_HOST: AddressMask = Ipv4Addr::new(255, 255, 255, 255);

/// Is `candidate` within the masked range of `reference`?
///
/// True if and only if, for every octet `i`,
/// `candidate[i] & mask[i] == reference[i] & mask[i]`.
///
/// The comparison is bitwise AND per octet; a sparse (non-CIDR) mask is
/// legal and honored as-is.
pub fn address_in_range(
    candidate: &Address,
    reference: &Address,
    mask: &AddressMask,
) -> bool {
    let candidate_octets = candidate.octets();
    let reference_octets = reference.octets();
    let mask_octets = mask.octets();
    for i in 0..mask_octets.len() {
        if candidate_octets[i] & mask_octets[i] != reference_octets[i] & mask_octets[i] {
            return false;
        }
    }

    true
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogRecord
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One `(address, timestamp)` observation from the source log.
/// Read-only; created only by [`read_records`].
///
/// [`read_records`]: crate::readers::logreader::read_records
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LogRecord {
    pub address: Address,
    pub dt: DateTimeL,
}

impl LogRecord {
    pub const fn new(
        address: Address,
        dt: DateTimeL,
    ) -> LogRecord {
        LogRecord { address, dt }
    }
}

/// An ordered sequence of [`LogRecord`s]; order matches the source log.
///
/// [`LogRecord`s]: self::LogRecord
pub type LogRecords = Vec<LogRecord>;
