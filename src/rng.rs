use getrandom::getrandom;
use oorandom::Rand64;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

/// Draws a full 128 bit seed from the given generator.
/// Used to hand every ant its own stream, so ants never share generator state.
pub fn split_seed(rng: &mut Rand64) -> u128 {
    rng.rand_u64() as u128 + ((rng.rand_u64() as u128) << 64)
}

pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    let _res = getrandom(&mut buf);
    u128::from_le_bytes(buf)
}
