//! Fixed text tables for the oracle.

use forge_core::{RandomSource, pick};

/// Inspiration seeds (20 entries). Drawn independently of any question.
pub const INSPIRATIONS: &[&str] = &[
    "Ancient ruins",
    "Mysterious stranger",
    "Hidden treasure",
    "Urgent message",
    "Dangerous creature",
    "Lost artifact",
    "Secret door",
    "Abandoned camp",
    "Strange weather",
    "Unusual sound",
    "Flickering light",
    "Foul odor",
    "Fresh tracks",
    "Broken weapon",
    "Torn clothing",
    "Spilled blood",
    "Carved symbol",
    "Glowing crystal",
    "Whispered voice",
    "Sudden silence",
];

/// Complications attached to narrative answers that carry one (12 entries).
pub const COMPLICATIONS: &[&str] = &[
    "But it attracts unwanted attention",
    "But it costs more than expected",
    "But it takes longer than anticipated",
    "But someone gets hurt",
    "But it creates a new problem",
    "But it alerts enemies",
    "But it damages equipment",
    "But it exhausts resources",
    "But it reveals a secret",
    "But it angers someone important",
    "But it breaks something valuable",
    "But it causes a misunderstanding",
];

/// Verbs for verb + noun prompts.
pub const VERBS: &[&str] = &[
    "Abandon",
    "Abuse",
    "Activate",
    "Adapt",
    "Agree",
    "Ambush",
    "Antagonise",
    "Arrive",
    "Assist",
    "Attach",
    "Attract",
    "Avenge",
    "Banish",
    "Befriend",
    "Begrudge",
    "Bestow",
    "Betray",
    "Block",
    "Break",
    "Carry",
    "Care",
    "Celebrate",
    "Change",
    "Collaborate",
    "Communicate",
    "Control",
    "Create",
    "Debase",
    "Deceive",
    "Decrease",
    "Delay",
    "Desert",
    "Destroy",
    "Develop",
    "Deviate",
    "Discover",
    "Dispute",
    "Disrupt",
    "Divide",
    "Dominate",
    "Drop",
    "Endure",
    "Excite",
    "Expose",
    "Fail",
    "Fight",
    "Finance",
    "Gratify",
    "Guide",
    "Haggle",
    "Harm",
    "Heal",
    "Imprison",
    "Imitate",
    "Increase",
    "Inform",
    "Inquire",
    "Inspect",
    "Inspire",
    "Judge",
    "Kill",
    "Lie",
    "Love",
    "Mistrust",
    "Move",
    "Navigate",
    "Neglect",
    "Oppose",
    "Oppress",
    "Open",
    "Overindulge",
    "Overthrow",
    "Persecute",
    "Postpone",
    "Preserve",
    "Proceed",
    "Procrastinate",
    "Propose",
    "Protect",
    "Provoke",
    "Pursue",
    "Praise",
    "Recruit",
    "Refuse",
    "Release",
    "Return",
    "Ruin",
    "Separate",
    "Spy",
    "Start",
    "Stop",
    "Struggle",
    "Surrender",
    "Take",
    "Thrive",
    "Throw",
    "Tolerate",
    "Transform",
    "Triumph",
    "Trick",
    "Truce",
    "Trust",
    "Usurp",
    "Violate",
    "Waste",
    "Work",
    "Wield",
    "Yield",
];

/// Nouns for verb + noun prompts.
pub const NOUNS: &[&str] = &[
    "Advantage",
    "Adversity",
    "Advice",
    "Agreement",
    "Ally",
    "Ambush",
    "Anger",
    "Animal",
    "Art",
    "Attention",
    "Balance",
    "Battle",
    "Benefit",
    "Burden",
    "Bureaucracy",
    "Business",
    "Chaos",
    "Competition",
    "Danger",
    "Death",
    "Defence",
    "Disadvantage",
    "Distraction",
    "Dream",
    "Element",
    "Emotion",
    "Enemy",
    "Energy",
    "Environment",
    "Evil",
    "Expectation",
    "Exterior",
    "Extravagance",
    "Failure",
    "Fame",
    "Fear",
    "Food",
    "Freedom",
    "Friendship",
    "Goal",
    "Good",
    "Group",
    "Guilty",
    "Home",
    "Hope",
    "Idea",
    "Illness",
    "Illusion",
    "Information",
    "Innocent",
    "Inside",
    "Intellectual",
    "Invention",
    "Investment",
    "Jealousy",
    "Joy",
    "Law",
    "Leadership",
    "Legal",
    "Liberty",
    "Love",
    "Magic",
    "Message",
    "Military",
    "Misfortune",
    "Mundane",
    "Nature",
    "Neutrality",
    "Obscurity",
    "Official",
    "Opulence",
    "Outside",
    "Pain",
    "Path",
    "Peace",
    "Penance",
    "People",
    "Physical",
    "Pleasure",
    "Plot",
    "Portal",
    "Possession",
    "Poverty",
    "Power",
    "Prison",
    "Project",
    "Protection",
    "Reality",
    "Riches",
    "Rumour",
    "Status",
    "Success",
    "Suffering",
    "Support",
    "Surprise",
    "Tactic",
    "Technology",
    "Tension",
    "Travel",
    "Value",
    "Vehicle",
    "Victory",
    "War",
    "Weapon",
    "Weather",
    "Wish",
    "Work",
    "Wound",
];

/// Random event focus, indexed by a d6.
pub const EVENT_FOCUS: [&str; 6] = [
    "Remote Event",
    "NPC Related",
    "Quest Related",
    "PC Related",
    "Ambiguous Event",
    "Current Situation",
];

/// Random event spin, indexed by a d6: 1-3 negative, 4-6 positive.
pub const EVENT_EFFECT: [&str; 6] = [
    "Negative Spin",
    "Negative Spin",
    "Negative Spin",
    "Positive Spin",
    "Positive Spin",
    "Positive Spin",
];

/// Draw one inspiration seed.
pub fn pick_inspiration<R: RandomSource + ?Sized>(source: &mut R) -> &'static str {
    pick(source, INSPIRATIONS).copied().unwrap_or(INSPIRATIONS[0])
}
