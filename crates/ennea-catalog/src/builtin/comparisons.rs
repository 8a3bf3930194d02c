//! Curated comparison scenarios for commonly confused types
//!
//! Sparse: most of the 36 pairs are intentionally absent.

use super::ComparisonSeed;

pub(crate) static COMPARISONS: [ComparisonSeed; 7] = [
    ComparisonSeed {
        scenario: "Your manager announces a sudden change to a process you helped design.",
        type_a: 1,
        type_a_response: "I want to know whether the new process is actually better. If it is, fine; if it is sloppy, I will say so and offer a corrected version.",
        type_b: 6,
        type_b_response: "I want to know why this is happening and who decided. I run through what could go wrong and check whether people I trust are on board.",
        key_distinction: "Ones measure the change against an inner standard of right; Sixes measure it against a sense of safety and trust.",
    },
    ComparisonSeed {
        scenario: "A close friend asks you to spend the weekend helping them move.",
        type_a: 9,
        type_a_response: "I say yes before I have checked whether I want to. It is easier to go along, and I will quietly lose the weekend I had planned for myself.",
        type_b: 2,
        type_b_response: "I say yes and show up with snacks and a plan. Being the one they called feels good, and I hope they notice how much I did.",
        key_distinction: "Nines agree to avoid friction; Twos agree to be needed and appreciated.",
    },
    ComparisonSeed {
        scenario: "You have a free evening with no obligations.",
        type_a: 3,
        type_a_response: "I end up doing something productive, catching up on work or a side project, because an unused evening feels slightly wasted.",
        type_b: 7,
        type_b_response: "I text three friends and look up a new restaurant. An empty evening is an opportunity for something fun.",
        key_distinction: "Threes fill time to accomplish; Sevens fill time to experience.",
    },
    ComparisonSeed {
        scenario: "You receive a negative review of creative work you care about.",
        type_a: 4,
        type_a_response: "It lands in my chest. I replay it, wonder if it reveals something true about me, and feel it for days.",
        type_b: 5,
        type_b_response: "I step back and analyze whether the critique is accurate. The feeling arrives later, alone, if at all.",
        key_distinction: "Fours move toward the feeling to find identity; Fives move away from it to regain mastery.",
    },
    ComparisonSeed {
        scenario: "You are invited to a party where you know only the host.",
        type_a: 6,
        type_a_response: "I arrive with a plan: stay near the host, find one friendly face, leave if it feels off. I warm up once I know who is safe.",
        type_b: 4,
        type_b_response: "I feel different from everyone there before I even walk in. I look for one real conversation and skip the small talk.",
        key_distinction: "Sixes scan for safety and allies; Fours scan for authenticity and feel their own difference.",
    },
    ComparisonSeed {
        scenario: "A heated disagreement breaks out at a team meeting.",
        type_a: 5,
        type_a_response: "I go quiet and watch. I am collecting information and will share my view later, in writing, once I have thought it through.",
        type_b: 9,
        type_b_response: "I try to find the common ground and calm things down. I might drift off mentally if it goes on too long.",
        key_distinction: "Fives withdraw to think; Nines withdraw to keep the peace.",
    },
    ComparisonSeed {
        scenario: "Someone challenges your leadership in front of others.",
        type_a: 8,
        type_a_response: "I meet the challenge directly, right there. Respect is earned by standing your ground.",
        type_b: 3,
        type_b_response: "I stay composed and redirect, then handle it privately. How this looks to the room matters.",
        key_distinction: "Eights defend their power openly; Threes protect their image strategically.",
    },
];
