/// Astronomy facts shown once in the header at startup
use rand::seq::SliceRandom;
use rand::Rng;

pub const FACTS: [&str; 8] = [
    "A day on Venus is longer than a year on Venus.",
    "Neutron stars can spin up to 600 times per second.",
    "The footprints left on the Moon will likely last millions of years.",
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "Saturn would float if you could find a bathtub big enough.",
    "There are more stars in the universe than grains of sand on all of Earth's beaches.",
    "Olympus Mons on Mars is roughly three times the height of Mount Everest.",
    "The Andromeda Galaxy is on a collision course with the Milky Way.",
];

/// Pick one fact uniformly at random
pub fn pick_fact() -> &'static str {
    pick_fact_with(&mut rand::thread_rng())
}

pub fn pick_fact_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FACTS.choose(rng).copied().unwrap_or(FACTS[0])
}
