// Placeholder data for sources configured without a feed.

use crate::draft::player::{Player, Position};

const MOCK_PLAYER_COUNT: usize = 180;

const POSITION_CYCLE: [Position; 4] = [
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
];

/// A small xorshift generator so placeholder ADPs look scattered but stay
/// stable for a given source label across runs.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn from_label(label: &str) -> Self {
        // FNV-1a over the label bytes; the offset basis keeps a zero seed out.
        let seed = label
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
                (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
            });
        XorShift64 {
            state: if seed == 0 { 0xcbf2_9ce4_8422_2325 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Enumerate 180 synthetic players for a source label, cycling through the
/// four board positions with pseudo-random ADPs in [1, 180] and tiers
/// repeating every 60 rows.
pub fn generate(label: &str) -> Vec<Player> {
    let mut rng = XorShift64::from_label(label);

    (0..MOCK_PLAYER_COUNT)
        .map(|i| Player {
            id: format!("{}-{}", label, i),
            name: format!("{} Player {}", label, i + 1),
            team: String::new(),
            bye: String::new(),
            position: POSITION_CYCLE[i % POSITION_CYCLE.len()],
            adp: (rng.next() % MOCK_PLAYER_COUNT as u64 + 1) as f64,
            tier: (((i as u32 % 60) + 14) / 15).max(1),
        })
        .collect()
}
