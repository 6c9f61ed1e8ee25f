//! Conversion between host byte order and the little-endian wire order.

/// Byte order of a multi-byte scalar in memory.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ByteOrder {
    /// Least significant byte first. This is the wire order.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

/// The byte order used on the wire for every multi-byte scalar.
pub const WIRE_ORDER: ByteOrder = ByteOrder::LittleEndian;

/// The byte order of the host, determined by looking at the in-memory bytes of a known constant.
pub const HOST_ORDER: ByteOrder = detect();

const fn detect() -> ByteOrder {
    let probe = 0x1234_5678u32.to_ne_bytes();
    if probe[0] == 0x78 {
        ByteOrder::LittleEndian
    } else {
        ByteOrder::BigEndian
    }
}

/// Returns the byte order of the host.
#[inline(always)]
pub const fn host_order() -> ByteOrder {
    HOST_ORDER
}

/// Converts the bytes of a scalar between `host` order and wire order, in place. The conversion
/// is its own inverse.
#[inline(always)]
pub fn normalize(host: ByteOrder, bytes: &mut [u8]) {
    if host != WIRE_ORDER {
        bytes.reverse();
    }
}

/// Converts the native bytes of a scalar into wire order, in place.
#[inline(always)]
pub fn to_wire(bytes: &mut [u8]) {
    normalize(HOST_ORDER, bytes)
}

/// Converts the wire bytes of a scalar into native order, in place.
#[inline(always)]
pub fn from_wire(bytes: &mut [u8]) {
    normalize(HOST_ORDER, bytes)
}
