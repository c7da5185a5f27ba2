//! Last-octet address pool.
//!
//! The pool is shuffled once and then drained from the end, so each octet is
//! handed out at most once per pool.

use crate::config::ADDRESS_POOL_CAPACITY;
use rand::seq::SliceRandom;
use rand::Rng;
use std::net::Ipv4Addr;

/// Lowest assignable host octet (.1 is left to the gateway)
pub const POOL_FIRST_OCTET: u8 = 2;
/// Highest assignable host octet (.255 is broadcast)
pub const POOL_LAST_OCTET: u8 = 254;

/// Shuffled set of unused host octets
#[derive(Debug, Clone)]
pub struct AddressPool {
    octets: Vec<u8>,
}

impl AddressPool {
    /// Full pool in random order
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut octets: Vec<u8> = (POOL_FIRST_OCTET..=POOL_LAST_OCTET).collect();
        octets.shuffle(rng);
        Self { octets }
    }

    /// Number of octets in a fresh pool
    pub const fn capacity() -> usize {
        ADDRESS_POOL_CAPACITY
    }

    /// Take the next unused octet, `None` once the pool is drained
    pub fn allocate(&mut self) -> Option<u8> {
        self.octets.pop()
    }

    pub fn remaining(&self) -> usize {
        self.octets.len()
    }
}

/// Combine the network prefix with a host octet
pub fn host_address(base: [u8; 3], octet: u8) -> Ipv4Addr {
    Ipv4Addr::new(base[0], base[1], base[2], octet)
}
