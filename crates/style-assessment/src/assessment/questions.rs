use super::domain::Question;

/// The fixed questionnaire, in presentation order.
pub fn standard_questions() -> &'static [Question] {
    &STANDARD_QUESTIONS
}

static STANDARD_QUESTIONS: [Question; 18] = [
    Question {
        ordinal: 1,
        text: "When talking to a customer…",
        choices: [
            "I maintain eye contact the whole time.",
            "I alternate between looking at the person and looking down.",
            "I look around the room a good deal of the time.",
            "I try to maintain eye contact but look away from time to time.",
        ],
    },
    Question {
        ordinal: 2,
        text: "If I have an important decision to make…",
        choices: [
            "I think it through completely before deciding.",
            "I go with my gut feelings.",
            "I consider the impact it will have on other people before deciding.",
            "I run it by someone whose opinion I respect before deciding.",
        ],
    },
    Question {
        ordinal: 3,
        text: "My office or work area mostly has…",
        choices: [
            "Family photos and sentimental items displayed.",
            "Inspirational posters, awards, and art displayed.",
            "Graphs and charts displayed.",
            "Calendars and project outlines displayed.",
        ],
    },
    Question {
        ordinal: 4,
        text: "If I am having a conflict with a colleague or customer…",
        choices: [
            "I try to help the situation along by focusing on the positive.",
            "I stay calm and try to understand the cause of the conflict.",
            "I try to avoid discussing the issue causing the conflict.",
            "I confront it right away so that it can get resolved as soon as possible.",
        ],
    },
    Question {
        ordinal: 5,
        text: "When I talk on the phone at work…",
        choices: [
            "I keep the conversation focused on the purpose of the call.",
            "I will spend a few minutes chatting before getting down to business.",
            "I am in no hurry to get off the phone and do not mind chatting about personal things, the weather, and so on.",
            "I try to keep the conversation as brief as possible.",
        ],
    },
    Question {
        ordinal: 6,
        text: "If a colleague is upset…",
        choices: [
            "I ask if I can do anything to help.",
            "I leave him alone because I do not want to intrude on his privacy.",
            "I try to cheer him up and help him to see the bright side.",
            "I feel uncomfortable and hope he gets over it soon.",
        ],
    },
    Question {
        ordinal: 7,
        text: "When I attend meetings at work…",
        choices: [
            "I sit back and think about what is being said before offering my opinion.",
            "I put all my cards on the table so my opinion is well known.",
            "I express my opinion enthusiastically, but listen to other's ideas as well.",
            "I try to support the ideas of the other people in the meeting.",
        ],
    },
    Question {
        ordinal: 8,
        text: "When I make presentation to a group…",
        choices: [
            "I am entertaining and often humorous.",
            "I am clear and concise.",
            "I speak relatively quietly.",
            "I am direct, specific and sometimes loud.",
        ],
    },
    Question {
        ordinal: 9,
        text: "When a client is explaining a problem to me…",
        choices: [
            "I try to understand and empathize with how she is feeling.",
            "I look for the specific facts pertaining to the situation.",
            "I listen carefully for the main issue so that I can find a solution.",
            "I use my body language and tone of voice to show that I understand.",
        ],
    },
    Question {
        ordinal: 10,
        text: "When I attend training programs or presentations…",
        choices: [
            "I get bored if the person moves too slowly.",
            "I try to be supportive of the speaker, knowing how hard the job is.",
            "I want it to be entertaining as well as informative.",
            "I look for the logic behind what the speaker is saying.",
        ],
    },
    Question {
        ordinal: 11,
        text: "When I want to get my point across to customers or co-workers…",
        choices: [
            "I listen to their point of view first and then express my ideas gently.",
            "I strongly state my opinion so that they know where I stand.",
            "I try to persuade them without being too forceful.",
            "I explain the thinking and logic behind what I am saying.",
        ],
    },
    Question {
        ordinal: 12,
        text: "When I am late for an appointment or meeting…",
        choices: [
            "I do not panic but call ahead to say that I will be a few minutes late.",
            "I feel bad about keeping the other person waiting.",
            "I get very upset and rush to get there as soon as possible.",
            "I sincerely apologize once I arrive.",
        ],
    },
    Question {
        ordinal: 13,
        text: "I set goals and objectives at work that…",
        choices: [
            "I think I can realistically attain.",
            "I feel are challenging and would be exciting to achieve.",
            "I need to achieve as part of a bigger objective.",
            "Will make me feel good when I achieve them.",
        ],
    },
    Question {
        ordinal: 14,
        text: "When explaining a problem to a colleague from whom I need help…",
        choices: [
            "I explain the problem in as much detail as possible.",
            "I sometimes exaggerate to make my point.",
            "I try to explain how the problem makes me feel.",
            "I explain how I would like the problem to be solved.",
        ],
    },
    Question {
        ordinal: 15,
        text: "If customers or colleagues are late for an appointment with me…",
        choices: [
            "I keep myself busy by making phone calls or working until they arrive.",
            "I assume they were delayed a bit and do not get upset.",
            "I call to make sure that I have the correct information.",
            "I get upset that the person is wasting my time.",
        ],
    },
    Question {
        ordinal: 16,
        text: "When I am behind on a project and feel pressure to get it done…",
        choices: [
            "I make a list of everything I need to do, in what order, by when.",
            "I block out everything else and focus 100% on the work I need to do.",
            "I become anxious and have a hard time focusing on my work.",
            "I set a date to get the project done by and go for it.",
        ],
    },
    Question {
        ordinal: 17,
        text: "When I feel verbally attacked…",
        choices: [
            "I ask the person to stop.",
            "I feel hurt but usually do not say anything about it to them.",
            "I ignore their anger and try to focus on the facts of the situation.",
            "I let them know in strong terms that I do not like their behavior.",
        ],
    },
    Question {
        ordinal: 18,
        text: "When I see someone whom I like and haven't seen recently…",
        choices: [
            "I give him a friendly hug.",
            "Greet but do not shake hands.",
            "Give a firm and quick handshake.",
            "Give an enthusiastic handshake that lasts a few moments.",
        ],
    },
];
