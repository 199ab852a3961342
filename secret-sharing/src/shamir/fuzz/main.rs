use honggfuzz::fuzz;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use compact_secret_sharing::{
    config::{Config, MalformedShares, SchemeKind},
    scheme::SecretSharing,
};

const SCHEMES: [SchemeKind; 3] = [
    SchemeKind::Compact96,
    SchemeKind::Compact104,
    SchemeKind::Compact128,
];

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            fuzz_join_random(data);
            fuzz_split_join_from_seed(data);
        });
    }
}

fn fuzz_join_random(data: &[u8]) {
    for kind in SCHEMES {
        for malformed_shares in [MalformedShares::Discard, MalformedShares::Reject] {
            let ss = SecretSharing::with_config(Config {
                scheme: kind,
                malformed_shares,
            });

            // Chunks of the share size plus a possibly shorter tail.
            let shares: Vec<_> = data.chunks(kind.share_size()).collect();
            let _ = ss.join(&shares);
        }
    }
}

fn fuzz_split_join_from_seed(data: &[u8]) {
    if data.len() < 32 {
        return;
    }

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&data[..32]);
    let mut rng: StdRng = SeedableRng::from_seed(seed);

    for kind in SCHEMES {
        let ss = SecretSharing::new(kind);
        let threshold = rng.gen_range(1..=16);
        let n = rng.gen_range(threshold..=16);
        let secret = ss.random_secret(&mut rng);

        let mut shares = ss
            .split(&secret, threshold, n)
            .expect("splitting should succeed");
        shares.shuffle(&mut rng);
        shares.truncate(threshold as usize);

        let restored = ss.join(&shares).expect("joining should succeed");
        assert_eq!(secret, restored);
    }
}
