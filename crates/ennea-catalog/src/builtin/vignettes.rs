//! Built-in essence vignettes, one per type

use super::VignetteSeed;

pub(crate) static VIGNETTES: [VignetteSeed; 9] = [
    VignetteSeed {
        type_number: 1,
        title: "The Inner Critic",
        inner_voice: "I notice the crooked picture frame before I notice the room. There is a voice in me that keeps score, quietly, all day long: that email could have been clearer, that promise should have been kept sooner. I am not trying to be difficult. I just know how things ought to be, and the gap between ought and is feels like my job to close. When I finally rest, it is because everything is done right.",
        core_question: "What if you were already good enough?",
    },
    VignetteSeed {
        type_number: 2,
        title: "The Open Door",
        inner_voice: "I know you are tired before you say it. I have already made the tea, cleared the afternoon, found the number you needed. Helping feels like breathing to me, and being needed feels like being loved. Sometimes, late at night, I wonder who would show up for me if I stopped showing up for everyone. Then I push the thought away, because someone just texted, and they sound like they could use a friend.",
        core_question: "Who are you when no one needs you?",
    },
    VignetteSeed {
        type_number: 3,
        title: "The Scoreboard",
        inner_voice: "I can feel a room's expectations the moment I walk in, and I adjust without thinking. Give me a goal and I am already halfway there. I like winning, yes, but mostly I like being the person who delivers. When a project ends, there is a strange hollow minute before the next one begins, and I fill it fast. I am not sure what I would find if I let that minute stretch into an hour.",
        core_question: "Would you still be valuable if you accomplished nothing today?",
    },
    VignetteSeed {
        type_number: 4,
        title: "The Missing Piece",
        inner_voice: "Everyone else seems to have received instructions for being a person, and mine were lost in the mail. I feel things deeply, maybe too deeply, and I would rather feel the ache than feel nothing. Beauty undoes me. Ordinary days can feel like a costume I am forced to wear. I keep searching for the version of me that is finally whole, and sometimes I suspect the searching itself is who I am.",
        core_question: "What if nothing essential is missing from you?",
    },
    VignetteSeed {
        type_number: 5,
        title: "The Watchtower",
        inner_voice: "I prefer to understand a thing before I step into it. People ask for my time as if it were endless, and I quietly calculate what each conversation will cost. Give me a quiet room, a hard problem and no interruptions, and I am content. I am not cold. I simply feel safest watching from a little distance, gathering enough knowledge that nothing can catch me unprepared again.",
        core_question: "What would you do if you trusted that you had enough?",
    },
    VignetteSeed {
        type_number: 6,
        title: "The Rehearsal",
        inner_voice: "Before the meeting, I have already run through every way it could go wrong. It is not pessimism; it is preparation. I want to know who I can count on and what the plan is when the plan fails. Loyalty matters to me more than almost anything. I question authority and I question myself, sometimes in the same breath, and when I finally commit, I am all in.",
        core_question: "What would you do if you trusted your own judgment?",
    },
    VignetteSeed {
        type_number: 7,
        title: "The Open Horizon",
        inner_voice: "There is always something better around the corner, and I want to be there when it arrives. My calendar is full and my mind is fuller, a dozen plans and ideas sparking at once. I love the beginning of things. When a conversation turns heavy, I feel the pull to lighten it, to reframe, to find the upside. I am not running from pain, I tell myself. I am just choosing joy faster.",
        core_question: "What might you find if you stayed with this moment instead of the next one?",
    },
    VignetteSeed {
        type_number: 8,
        title: "The Shield",
        inner_voice: "I say what I mean, and I expect the same from you. If something is unfair, I will not sit quietly while it happens. I take up space because somebody has to, and I would rather be the one holding the line than the one being pushed around. People think I am tough, and I am. What they rarely see is how fiercely I protect the soft things I never show.",
        core_question: "What would it mean to be strong enough to be vulnerable?",
    },
    VignetteSeed {
        type_number: 9,
        title: "The Still Lake",
        inner_voice: "I can see every side of an argument, which makes it hard to pick one. Conflict feels like a storm I would rather wait out. I go along, I smooth things over, and the day drifts by in small comfortable tasks. People find me easy to be with. But somewhere under the calm there is a voice with its own opinions, and I am not always sure I have heard it lately.",
        core_question: "What do you want, apart from what keeps the peace?",
    },
];
