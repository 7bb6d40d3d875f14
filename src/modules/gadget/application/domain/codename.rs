/// Names handed out to gadgets created without one.
pub const CODENAMES: [&str; 30] = [
    "The Kraken",
    "Nightangle",
    "Phantom Viper",
    "Ironclad Titan",
    "Echo Pulse",
    "Stealth Hawk",
    "Nebula Rider",
    "Vortex Spear",
    "Quantum Fury",
    "Rogue Shadow",
    "Stellar Blaze",
    "Thunderstrike X",
    "Shadow Serpent",
    "Nova Striker",
    "Tempest Fury",
    "Viperfang",
    "Solar Flare",
    "Dark Horizon",
    "Spectral Phantom",
    "Iron Vortex",
    "Echo Reaper",
    "Celestial Wrath",
    "Radiant Storm",
    "Nebula Ghost",
    "Blackout Enigma",
    "Titan Reborn",
    "Cosmic Titan",
    "Stealth Seraph",
    "Inferno Burst",
    "Chaos Striker",
];
