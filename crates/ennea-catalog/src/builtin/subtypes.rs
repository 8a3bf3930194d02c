//! Built-in subtype table, type-major then sp/so/sx

use super::SubtypeSeed;
use ennea_model::Instinct::{SelfPreservation as Sp, Sexual as Sx, Social as So};

pub(crate) static SUBTYPES: [SubtypeSeed; 27] = [
    // Type 1
    SubtypeSeed {
        type_number: 1,
        instinct: Sp,
        name: "Worry",
        ichazo_title: "Anxiety",
        description: "The self-preservation One channels the drive for rightness into making their own life safe and well-ordered. Anger is the most repressed here, showing up instead as warmth, planning and a steady background hum of worry.",
        characteristics: &["Meticulous planner", "Self-critical more than critical of others", "Appears warm and friendly"],
        blind_spots: &["Mistakes tension for responsibility", "Cannot rest until everything is handled"],
        growth_path: "Growth comes from letting good-enough be genuinely good and trusting that the world will not fall apart when they stop checking.",
    },
    SubtypeSeed {
        type_number: 1,
        instinct: So,
        name: "Non-Adaptability",
        ichazo_title: "Rigidity",
        description: "The social One becomes the model of correct behavior for the group. They feel responsible for showing others the right way and can hold their standards with a cool, teacherly certainty.",
        characteristics: &["Sets the example for others", "Strong sense of the proper way to do things", "Intellectual about ethics"],
        blind_spots: &["Confuses their method with the only method", "Appears superior without intending to"],
        growth_path: "Growth comes from staying curious about other people's reasons and allowing the group to find its own right way.",
    },
    SubtypeSeed {
        type_number: 1,
        instinct: Sx,
        name: "Zeal",
        ichazo_title: "Jealousy",
        description: "The sexual One aims the reforming impulse outward, at partners and the world. Their anger is the most visible of the three, carried by a conviction that things must change now.",
        characteristics: &["Passionate reformer", "Feels entitled to correct others", "Intense in close relationships"],
        blind_spots: &["Righteousness can override empathy", "Holds others to standards they exempt themselves from"],
        growth_path: "Growth comes from turning the same scrutiny inward with kindness and letting loved ones be imperfect.",
    },
    // Type 2
    SubtypeSeed {
        type_number: 2,
        instinct: Sp,
        name: "Privilege",
        ichazo_title: "Me First",
        description: "The self-preservation Two wants to be cared for as much as they care, often in a youthful, charming way. They are more guarded than other Twos and ambivalent about depending on anyone.",
        characteristics: &["Childlike charm", "Wants to be loved for who they are", "Fearful of rejection underneath"],
        blind_spots: &["Expects special treatment without asking", "Denies their own neediness"],
        growth_path: "Growth comes from naming their own needs directly and receiving care without having to earn it.",
    },
    SubtypeSeed {
        type_number: 2,
        instinct: So,
        name: "Ambition",
        ichazo_title: "Ambition",
        description: "The social Two gives in order to gain influence and standing. They are leaders who help strategically and take pride in being indispensable to important people and causes.",
        characteristics: &["Power behind the throne", "Generous with a purpose", "Skilled at reading group needs"],
        blind_spots: &["Gifts with strings attached", "Blind to their own desire for status"],
        growth_path: "Growth comes from giving without an invisible ledger and admitting the ambition that drives the help.",
    },
    SubtypeSeed {
        type_number: 2,
        instinct: Sx,
        name: "Seduction",
        ichazo_title: "Aggression",
        description: "The sexual Two pursues connection with particular people and becomes whoever those people would find irresistible. Their generosity is personal, ardent and sometimes overwhelming.",
        characteristics: &["Intensely attentive to one person", "Romantic and persuasive", "Bold in pursuit"],
        blind_spots: &["Loses themselves in the other", "Feels entitled to reciprocation"],
        growth_path: "Growth comes from letting closeness unfold at the other person's pace and finding a self apart from the bond.",
    },
    // Type 3
    SubtypeSeed {
        type_number: 3,
        instinct: Sp,
        name: "Security",
        ichazo_title: "Security",
        description: "The self-preservation Three works hard to secure material stability and wants to be good, not merely look good. Vanity is hidden behind modesty and a relentless work ethic.",
        characteristics: &["Quietly productive", "Self-reliant", "Avoids showing off"],
        blind_spots: &["Identifies completely with work", "Does not notice their own exhaustion"],
        growth_path: "Growth comes from valuing themselves when nothing is being produced and letting feelings slow them down.",
    },
    SubtypeSeed {
        type_number: 3,
        instinct: So,
        name: "Prestige",
        ichazo_title: "Prestige",
        description: "The social Three seeks recognition and knows how to climb. They read what the room admires and embody it, which makes them effective leaders and convincing performers.",
        characteristics: &["Image-savvy", "Competitive and goal-driven", "Comfortable in the spotlight"],
        blind_spots: &["Sells a version of themselves", "Measures worth by applause"],
        growth_path: "Growth comes from letting people see an unpolished self and discovering they are still valued.",
    },
    SubtypeSeed {
        type_number: 3,
        instinct: Sx,
        name: "Charisma",
        ichazo_title: "Masculinity/Femininity",
        description: "The sexual Three pours ambition into making others shine and into being attractive to them. They support the people they love and are shy about promoting themselves directly.",
        characteristics: &["Supportive promoter of others", "Attractive and engaging", "Less overtly competitive"],
        blind_spots: &["Hides their own desires behind others' success", "Performs desirability"],
        growth_path: "Growth comes from wanting things for themselves out loud and trusting love that is not earned by appeal.",
    },
    // Type 4
    SubtypeSeed {
        type_number: 4,
        instinct: Sp,
        name: "Tenacity",
        ichazo_title: "Reckless/Dauntless",
        description: "The self-preservation Four suffers in silence and endures. They hold their longing close, take risks to feel alive and present a stoic face to the world.",
        characteristics: &["Stoic and enduring", "Drawn to challenge", "Tenderhearted toward others' pain"],
        blind_spots: &["Refuses help they need", "Equates struggle with authenticity"],
        growth_path: "Growth comes from letting others see the pain they carry and accepting comfort without shame.",
    },
    SubtypeSeed {
        type_number: 4,
        instinct: So,
        name: "Shame",
        ichazo_title: "Shame",
        description: "The social Four compares themselves with others and usually comes out lacking. Their sensitivity is finely tuned and their suffering is openly felt and expressed.",
        characteristics: &["Emotionally expressive", "Highly sensitive to status", "Deeply empathic"],
        blind_spots: &["Over-identifies with what is missing", "Attached to melancholy"],
        growth_path: "Growth comes from noticing what is already whole in them and acting before feeling ready.",
    },
    SubtypeSeed {
        type_number: 4,
        instinct: Sx,
        name: "Competition",
        ichazo_title: "Hate",
        description: "The sexual Four turns envy outward into competition. They demand to be seen, fight for what they want and express feelings with intensity rather than sorrow.",
        characteristics: &["Assertive and demanding", "Competitive in relationships", "Emotionally vivid"],
        blind_spots: &["Pushes away the people they want close", "Projects envy as anger"],
        growth_path: "Growth comes from recognizing the hurt beneath the fight and asking for love instead of taking it.",
    },
    // Type 5
    SubtypeSeed {
        type_number: 5,
        instinct: Sp,
        name: "Castle",
        ichazo_title: "Refuge",
        description: "The self-preservation Five builds a secure, private space and rations contact with the outside world. Boundaries are clear and needs are kept minimal.",
        characteristics: &["Strong boundaries", "Minimal needs", "Independent"],
        blind_spots: &["Withdraws before connection can form", "Hoards time and energy"],
        growth_path: "Growth comes from opening the door a little wider and discovering that contact restores as much as it costs.",
    },
    SubtypeSeed {
        type_number: 5,
        instinct: So,
        name: "Totem",
        ichazo_title: "Totem",
        description: "The social Five connects through shared knowledge and ideals. They seek the ultimate meaning and relate to groups that share their passion for understanding.",
        characteristics: &["Expert in a field", "Loyal to ideals", "Engaged through ideas"],
        blind_spots: &["Lives above daily feeling", "Values knowledge over people"],
        growth_path: "Growth comes from bringing ideas down into the body and letting ordinary relationships matter.",
    },
    SubtypeSeed {
        type_number: 5,
        instinct: Sx,
        name: "Confidence",
        ichazo_title: "Confidence",
        description: "The sexual Five searches for the one trusted person with whom they can share everything. Privately romantic, they hold intense feelings they rarely reveal.",
        characteristics: &["Romantic and idealistic", "Tests for trust", "Emotionally intense in private"],
        blind_spots: &["Demands perfect confidence", "Retreats at the first disappointment"],
        growth_path: "Growth comes from accepting that trust is built in imperfect steps and staying present through them.",
    },
    // Type 6
    SubtypeSeed {
        type_number: 6,
        instinct: Sp,
        name: "Warmth",
        ichazo_title: "Affection",
        description: "The self-preservation Six seeks protection through friendly alliances. Fear is most visible here, softened by warmth, humor and a wish to be liked.",
        characteristics: &["Warm and friendly", "Seeks reliable alliances", "Hesitant before committing"],
        blind_spots: &["Doubts their own judgment", "Avoids conflict to stay safe"],
        growth_path: "Growth comes from acting on inner knowing and finding that courage grows in use.",
    },
    SubtypeSeed {
        type_number: 6,
        instinct: So,
        name: "Duty",
        ichazo_title: "Duty",
        description: "The social Six manages anxiety with rules, reason and loyalty to a trusted structure. Clear guidelines and a sense of duty make them dependable and precise.",
        characteristics: &["Dutiful and reliable", "Follows principles", "Thinks in clear categories"],
        blind_spots: &["Rigid about rules", "Ignores gray areas"],
        growth_path: "Growth comes from tolerating ambiguity and trusting their own authority alongside the system's.",
    },
    SubtypeSeed {
        type_number: 6,
        instinct: Sx,
        name: "Strength",
        ichazo_title: "Strength/Beauty",
        description: "The sexual Six faces fear head-on with strength and intimidation. They move toward danger, challenging what they doubt rather than avoiding it.",
        characteristics: &["Bold and assertive", "Rebellious", "Takes risks"],
        blind_spots: &["Mistakes aggression for courage", "Cannot tolerate vulnerability"],
        growth_path: "Growth comes from admitting the fear behind the strength and letting others support them.",
    },
    // Type 7
    SubtypeSeed {
        type_number: 7,
        instinct: Sp,
        name: "Keepers of the Castle",
        ichazo_title: "Family",
        description: "The self-preservation Seven builds a network of allies and opportunities that guarantees safety and pleasure. Practical and alert, they are good at getting a deal.",
        characteristics: &["Resourceful networker", "Pragmatic", "Enjoys comfort"],
        blind_spots: &["Self-interest dressed as generosity", "Avoids discomfort at all costs"],
        growth_path: "Growth comes from staying with limitation long enough to find satisfaction in what is already here.",
    },
    SubtypeSeed {
        type_number: 7,
        instinct: So,
        name: "Sacrifice",
        ichazo_title: "Sacrifice",
        description: "The social Seven postpones their own gratification to serve the group or an ideal. They want to be good and seen as unselfish.",
        characteristics: &["Idealistic", "Service-oriented", "Enthusiastic team player"],
        blind_spots: &["Resents unacknowledged sacrifice", "Avoids pain by staying busy helping"],
        growth_path: "Growth comes from claiming their own needs honestly and allowing grief alongside the optimism.",
    },
    SubtypeSeed {
        type_number: 7,
        instinct: Sx,
        name: "Fascination",
        ichazo_title: "Suggestibility",
        description: "The sexual Seven is an enthusiast who sees the world through rose-colored glasses. They fall in love with ideas, people and possibilities with contagious energy.",
        characteristics: &["Dreamer", "Passionately enthusiastic", "Charming"],
        blind_spots: &["Idealizes and then escapes", "Lives in imagination over reality"],
        growth_path: "Growth comes from staying with one thing long enough to touch its real depth.",
    },
    // Type 8
    SubtypeSeed {
        type_number: 8,
        instinct: Sp,
        name: "Satisfactory Survival",
        ichazo_title: "Satisfactory Survival",
        description: "The self-preservation Eight is the most practical and direct. They focus on securing what is needed to survive and provide, and do not waste words.",
        characteristics: &["Direct and economical", "Protective provider", "Territorial"],
        blind_spots: &["Impatient with others' frailty", "Controls resources tightly"],
        growth_path: "Growth comes from allowing tenderness and trusting that others can provide too.",
    },
    SubtypeSeed {
        type_number: 8,
        instinct: So,
        name: "Solidarity",
        ichazo_title: "Friendship",
        description: "The social Eight protects the people and causes they care about. Strength is put in service of the group, making them loyal defenders and generous leaders.",
        characteristics: &["Protector of the vulnerable", "Loyal", "Socially engaged"],
        blind_spots: &["Neglects their own needs", "Rescues without asking"],
        growth_path: "Growth comes from admitting their own vulnerability to those they protect.",
    },
    SubtypeSeed {
        type_number: 8,
        instinct: Sx,
        name: "Possession",
        ichazo_title: "Surrender",
        description: "The sexual Eight is the most charismatic and rebellious. They want to possess the attention of those they love and to be the center of it.",
        characteristics: &["Magnetic and provocative", "Intense", "Rebellious"],
        blind_spots: &["Dominates the people they love", "Mistakes control for closeness"],
        growth_path: "Growth comes from surrendering control in intimacy and discovering that devotion need not be won.",
    },
    // Type 9
    SubtypeSeed {
        type_number: 9,
        instinct: Sp,
        name: "Appetite",
        ichazo_title: "Appetite",
        description: "The self-preservation Nine merges with comfort, routine and physical needs. Eating, sleeping and familiar activities become ways to stay calm and avoid inner stirring.",
        characteristics: &["Comfort-seeking", "Practical", "Stable and grounded"],
        blind_spots: &["Numbs out through routine", "Forgets their own priorities"],
        growth_path: "Growth comes from noticing what they actually want and acting on it before the day absorbs them.",
    },
    SubtypeSeed {
        type_number: 9,
        instinct: So,
        name: "Participation",
        ichazo_title: "Participation",
        description: "The social Nine merges with the group, working hard to belong. They are fun, friendly and tireless for the collective, often at their own expense.",
        characteristics: &["Hardworking for the group", "Friendly mediator", "Sociable"],
        blind_spots: &["Overextends to fit in", "Hides inner sadness"],
        growth_path: "Growth comes from belonging without earning it through effort and letting the group see their own wishes.",
    },
    SubtypeSeed {
        type_number: 9,
        instinct: Sx,
        name: "Fusion",
        ichazo_title: "Union",
        description: "The sexual Nine merges with a significant other and takes on that person's views and feelings. Gentle and devoted, they can lose sight of where they end.",
        characteristics: &["Devoted partner", "Highly attuned", "Gentle"],
        blind_spots: &["Lives through the other", "Loses a separate sense of self"],
        growth_path: "Growth comes from cultivating their own preferences so that union becomes meeting rather than merging.",
    },
];
