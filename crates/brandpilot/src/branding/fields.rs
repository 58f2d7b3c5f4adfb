//! Structural fields counted toward each branding section.
//!
//! Order follows the questionnaire steps. Keys absent from a record count as
//! unfilled; keys not listed here are ignored.

pub const PERSONA_FIELDS: &[&str] = &[
    "step_1_frustrations",
    "step_2_transformation",
    "step_3a_objections",
    "step_3b_cliches",
    "step_4_feelings",
];

pub const PROPOSITION_FIELDS: &[&str] = &[
    "step_1_what_you_do",
    "step_2a_process",
    "step_2c_proof",
    "step_3_for_whom",
];

pub const TONE_FIELDS: &[&str] = &[
    "voice_description",
    "tone_register",
    "tone_level",
    "tone_style",
    "tone_humor",
    "key_expressions",
    "things_to_avoid",
];

pub const STRATEGY_FIELDS: &[&str] = &["cycle_type", "pillar_major", "creative_concept"];
