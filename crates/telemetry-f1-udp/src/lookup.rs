//! Display-name lookups for coded session and tyre fields.

const TRACK_NAMES: &[&str] = &[
    "Melbourne",         // 0
    "Paul Ricard",       // 1
    "Shanghai",          // 2
    "Sakhir (Bahrain)",  // 3
    "Catalunya",         // 4
    "Monaco",            // 5
    "Montreal",          // 6
    "Silverstone",       // 7
    "Hockenheim",        // 8
    "Hungaroring",       // 9
    "Spa",               // 10
    "Monza",             // 11
    "Singapore",         // 12
    "Suzuka",            // 13
    "Abu Dhabi",         // 14
    "Texas",             // 15
    "Brazil",            // 16
    "Austria",           // 17
    "Sochi",             // 18
    "Mexico",            // 19
    "Baku (Azerbaijan)", // 20
    "Sakhir Short",      // 21
    "Silverstone Short", // 22
    "Texas Short",       // 23
    "Suzuka Short",      // 24
    "Hanoi",             // 25
    "Zandvoort",         // 26
    "Imola",             // 27
    "Portimao",          // 28
    "Jeddah",            // 29
    "Miami",             // 30
    "Las Vegas",         // 31
    "Losail",            // 32
];

/// Maps a session `trackId` to a display name.
///
/// Negative (unknown) and unmapped ids return `"Unknown"`.
pub fn track_name(track_id: i8) -> &'static str {
    usize::try_from(track_id)
        .ok()
        .and_then(|idx| TRACK_NAMES.get(idx))
        .copied()
        .unwrap_or("Unknown")
}

/// Maps an actual tyre compound code to a display name.
pub fn tyre_compound_name(compound: u8) -> &'static str {
    match compound {
        7 => "Intermediate",
        8 => "Wet",
        9 => "Dry (classic)",
        10 => "Wet (classic)",
        11 => "Super Soft",
        12 => "Soft",
        13 => "Medium",
        14 => "Hard",
        15 => "Wet",
        16 => "C5",
        17 => "C4",
        18 => "C3",
        19 => "C2",
        20 => "C1",
        21 => "C0",
        _ => "Unknown",
    }
}
