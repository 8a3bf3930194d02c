//! Built-in type profiles

use super::ProfileSeed;
use ennea_model::Center;

pub(crate) static PROFILES: [ProfileSeed; 9] = [
    ProfileSeed {
        type_number: 1,
        name: "The Reformer",
        center: Center::Gut,
        core_desire: "To be good, right and in integrity",
        core_fear: "Being corrupt, defective or wrong",
        summary: "Principled and purposeful, Ones hold themselves to high standards and work to improve whatever they touch.",
    },
    ProfileSeed {
        type_number: 2,
        name: "The Helper",
        center: Center::Heart,
        core_desire: "To be loved and wanted",
        core_fear: "Being unwanted or unworthy of love",
        summary: "Caring and generous, Twos attune to what others need and give freely, sometimes losing track of their own needs.",
    },
    ProfileSeed {
        type_number: 3,
        name: "The Achiever",
        center: Center::Heart,
        core_desire: "To be valuable and worthwhile",
        core_fear: "Being worthless apart from achievement",
        summary: "Adaptable and driven, Threes set goals, read what succeeds and become it, often mistaking image for self.",
    },
    ProfileSeed {
        type_number: 4,
        name: "The Individualist",
        center: Center::Heart,
        core_desire: "To find themselves and their significance",
        core_fear: "Having no identity or personal significance",
        summary: "Sensitive and expressive, Fours seek authenticity and feel keenly what seems to be missing.",
    },
    ProfileSeed {
        type_number: 5,
        name: "The Investigator",
        center: Center::Head,
        core_desire: "To be capable and competent",
        core_fear: "Being useless, helpless or overwhelmed",
        summary: "Perceptive and private, Fives observe, gather knowledge and conserve their energy against intrusion.",
    },
    ProfileSeed {
        type_number: 6,
        name: "The Loyalist",
        center: Center::Head,
        core_desire: "To have security and support",
        core_fear: "Being without support or guidance",
        summary: "Committed and vigilant, Sixes anticipate problems and invest in people and systems they can trust.",
    },
    ProfileSeed {
        type_number: 7,
        name: "The Enthusiast",
        center: Center::Head,
        core_desire: "To be satisfied and content",
        core_fear: "Being deprived or trapped in pain",
        summary: "Spontaneous and versatile, Sevens chase new experiences and keep their options open to stay ahead of pain.",
    },
    ProfileSeed {
        type_number: 8,
        name: "The Challenger",
        center: Center::Gut,
        core_desire: "To protect themselves and control their own life",
        core_fear: "Being harmed or controlled by others",
        summary: "Powerful and decisive, Eights take charge, protect their people and resist any attempt to be controlled.",
    },
    ProfileSeed {
        type_number: 9,
        name: "The Peacemaker",
        center: Center::Gut,
        core_desire: "To have inner stability and peace of mind",
        core_fear: "Loss and separation",
        summary: "Receptive and reassuring, Nines smooth over conflict and merge with others, often forgetting their own priorities.",
    },
];
