//! Standalone prime lister. Shares no state or interface with the
//! bundling pipeline; it exists as an independent generator utility.

const BOUND: u32 = 30_000;

fn is_prime(n: u32) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

fn main() {
    for n in 1..=BOUND {
        if is_prime(n) {
            println!("{n}");
        }
    }
}
