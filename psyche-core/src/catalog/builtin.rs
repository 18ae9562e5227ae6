//! The built-in emotion table.
//!
//! Relationships are directed and intentionally not always symmetric: an
//! entry lists what *it* suppresses or amplifies when it is (re)detected.

use crate::types::EmotionCategory::{self, Complex, Core, Meta, Poetic, Shadow, Social};

/// One authored row of the built-in table.
pub(super) struct Seed {
    pub name: &'static str,
    pub category: EmotionCategory,
    pub triggers: &'static [&'static str],
    pub conflicts: &'static [&'static str],
    pub enhances: &'static [&'static str],
    pub decay: f32,
    pub freq: f32,
}

const fn seed(
    name: &'static str,
    category: EmotionCategory,
    triggers: &'static [&'static str],
    conflicts: &'static [&'static str],
    enhances: &'static [&'static str],
    decay: f32,
    freq: f32,
) -> Seed {
    Seed { name, category, triggers, conflicts, enhances, decay, freq }
}

#[rustfmt::skip]
pub(super) const SEEDS: &[Seed] = &[
    // -- core -------------------------------------------------------------
    seed("happiness", Core, &["happy", "joy", "glad", "yay", "delight", "wonderful", "great day"], &["sadness", "grief", "despair"], &["gratitude", "excitement"], 0.92, 528.0),
    seed("sadness", Core, &["sad", "unhappy", "cry", "tears", "down today", "depressed"], &["happiness", "euphoria"], &["melancholy", "loneliness"], 0.94, 396.0),
    seed("anger", Core, &["angry", "mad at", "furious", "pissed", "annoyed me"], &["calm", "serenity"], &["rage", "frustration"], 0.88, 144.0),
    seed("fear", Core, &["afraid", "scared", "terrified", "fear", "frightened"], &["confidence", "calm"], &["anxiety", "dread"], 0.90, 256.0),
    seed("surprise", Core, &["wow", "whoa", "surprise", "unexpected", "no way", "can't believe"], &["boredom"], &["wonder", "excitement"], 0.80, 440.0),
    seed("disgust", Core, &["gross", "disgusting", "yuck", "revolting", "nasty"], &["affection", "admiration"], &["contempt"], 0.87, 174.0),
    seed("love", Core, &["love", "adore", "darling", "sweetheart", "cherish"], &["contempt", "scorn"], &["affection", "tenderness"], 0.95, 639.0),
    seed("trust", Core, &["trust", "rely on", "believe in you", "count on"], &["paranoia", "betrayal"], &["loyalty"], 0.94, 417.0),
    seed("anticipation", Core, &["can't wait", "soon", "looking forward", "upcoming", "countdown"], &["apathy"], &["excitement", "hope"], 0.86, 480.0),
    seed("calm", Core, &["calm", "relax", "peaceful", "chill", "take it easy"], &["anxiety", "anger", "rage"], &["serenity"], 0.90, 432.0),
    seed("excitement", Core, &["excited", "exciting", "hype", "pumped", "thrilled", "let's go"], &["boredom", "apathy"], &["enthusiasm", "anticipation"], 0.82, 660.0),
    seed("curiosity", Core, &["curious", "wonder if", "how does", "why does", "what if", "interesting"], &["boredom", "apathy"], &["fascination", "wonder"], 0.90, 741.0),
    seed("pride", Core, &["proud", "accomplished", "nailed it", "did it"], &["shame", "humility"], &["confidence"], 0.90, 586.0),
    seed("shame", Core, &["ashamed", "shame", "humiliated", "my fault"], &["pride", "confidence"], &["guilt", "embarrassment"], 0.93, 285.0),
    seed("gratitude", Core, &["thank", "grateful", "appreciate"], &["resentment", "bitterness"], &["affection", "happiness"], 0.93, 594.0),
    seed("confidence", Core, &["confident", "sure of", "i can do", "got this", "easy win"], &["doubt", "fear", "shame"], &["pride", "determination"], 0.91, 570.0),

    // -- complex ----------------------------------------------------------
    seed("nostalgia", Complex, &["remember when", "back then", "nostalgic", "old days", "childhood"], &["anticipation"], &["wistfulness", "longing"], 0.95, 363.0),
    seed("jealousy", Complex, &["jealous", "why them", "unfair that"], &["trust", "admiration"], &["resentment", "envy"], 0.90, 211.0),
    seed("envy", Complex, &["envy", "wish i had", "lucky them"], &["gratitude"], &["bitterness"], 0.90, 203.0),
    seed("guilt", Complex, &["guilty", "sorry", "apologize", "regret doing"], &["pride"], &["regret", "shame"], 0.94, 272.0),
    seed("hope", Complex, &["hope", "hopefully", "maybe it will", "fingers crossed", "optimistic"], &["despair", "cynicism"], &["anticipation"], 0.90, 512.0),
    seed("despair", Complex, &["hopeless", "despair", "give up", "pointless", "no point"], &["hope", "happiness"], &["sadness", "apathy"], 0.95, 110.0),
    seed("awe", Complex, &["awe", "breathtaking", "majestic", "incredible", "astonishing"], &["boredom", "contempt"], &["wonder", "sublime"], 0.85, 852.0),
    seed("contempt", Complex, &["pathetic", "beneath me", "contempt", "worthless"], &["respect", "admiration", "love"], &["scorn", "disgust"], 0.90, 160.0),
    seed("frustration", Complex, &["frustrat", "ugh", "stuck", "doesn't work", "not working"], &["calm", "serenity"], &["anger", "annoyance"], 0.85, 190.0),
    seed("relief", Complex, &["relief", "relieved", "phew", "finally over"], &["anxiety", "dread"], &["calm", "gratitude"], 0.80, 420.0),
    seed("anxiety", Complex, &["anxious", "worried", "nervous", "stress", "what if it"], &["calm", "serenity", "confidence"], &["fear", "dread"], 0.90, 230.0),
    seed("loneliness", Complex, &["lonely", "alone", "no one", "nobody cares", "isolated"], &["belonging"], &["sadness", "longing"], 0.95, 300.0),
    seed("determination", Complex, &["determined", "won't stop", "keep going", "never give up"], &["apathy", "despair"], &["confidence"], 0.92, 600.0),
    seed("embarrassment", Complex, &["embarrass", "awkward", "cringe", "blush"], &["confidence"], &["shame"], 0.80, 320.0),
    seed("boredom", Complex, &["bored", "boring", "meh", "whatever", "dull"], &["excitement", "curiosity", "fascination"], &["ennui", "apathy"], 0.88, 100.0),
    seed("wonder", Complex, &["wonder", "magical", "amazing", "marvel"], &["cynicism", "boredom"], &["curiosity", "awe"], 0.88, 963.0),
    seed("regret", Complex, &["regret", "should have", "wish i hadn't", "if only"], &["pride"], &["guilt", "melancholy"], 0.95, 250.0),
    seed("ambivalence", Complex, &["mixed feelings", "not sure how i feel", "torn", "on the fence", "both ways"], &["certainty"], &["doubt", "confusion"], 0.90, 333.0),

    // -- meta -------------------------------------------------------------
    seed("contemplation", Meta, &["contemplat", "ponder", "think about", "deep thought", "consider"], &["boredom"], &["introspection", "clarity"], 0.93, 777.0),
    seed("introspection", Meta, &["myself", "self-reflect", "look inward", "who am i", "soul searching"], &["detachment"], &["contemplation"], 0.94, 720.0),
    seed("epiphany", Meta, &["realize", "epiphany", "it clicked", "suddenly understand", "aha"], &["confusion"], &["clarity", "excitement"], 0.78, 888.0),
    seed("doubt", Meta, &["doubt", "not sure", "unsure", "maybe not", "second guess"], &["certainty", "confidence"], &["anxiety"], 0.90, 222.0),
    seed("certainty", Meta, &["certain", "definitely", "absolutely", "no doubt"], &["doubt", "confusion", "ambivalence"], &["confidence"], 0.90, 555.0),
    seed("confusion", Meta, &["confused", "confusing", "don't understand", "lost me", "huh"], &["clarity", "certainty"], &["doubt"], 0.85, 199.0),
    seed("fascination", Meta, &["fascinat", "captivat", "obsessed with", "can't stop thinking"], &["boredom"], &["curiosity"], 0.90, 729.0),
    seed("clarity", Meta, &["clear now", "makes sense", "clarity", "crystal clear"], &["confusion"], &["certainty", "calm"], 0.90, 750.0),
    seed("irony", Meta, &["ironic", "irony", "of course it did", "how convenient"], &["trust"], &["sarcasm", "amusement"], 0.88, 375.0),
    seed("paradox", Meta, &["paradox", "contradiction", "both true", "makes no sense but"], &["certainty"], &["contemplation", "confusion"], 0.92, 369.0),
    seed("detachment", Meta, &["detached", "numb", "don't care anymore", "distant"], &["empathy", "introspection"], &["apathy"], 0.95, 120.0),
    seed("absurdity", Meta, &["absurd", "ridiculous", "nonsense", "insane"], &["certainty"], &["amusement", "irony"], 0.85, 404.0),
    seed("skepticism", Meta, &["skeptical", "doubtful", "prove it", "sounds fake", "really?"], &["trust", "certainty"], &["cynicism", "doubt"], 0.90, 260.0),
    seed("vigilance", Meta, &["careful", "watch out", "stay alert", "be cautious", "heads up"], &["calm"], &["anxiety"], 0.88, 310.0),
    seed("inspiration", Meta, &["inspired", "inspiring", "idea", "creative spark", "muse"], &["apathy", "ennui"], &["excitement", "enthusiasm"], 0.86, 819.0),

    // -- shadow -----------------------------------------------------------
    seed("spite", Shadow, &["spite", "serves them right", "get back at"], &["compassion", "empathy"], &["malice", "resentment"], 0.88, 150.0),
    seed("rage", Shadow, &["rage", "livid", "seething", "so angry", "enraged"], &["calm", "serenity", "tranquility"], &["anger", "indignation"], 0.80, 130.0),
    seed("resentment", Shadow, &["resent", "never forgive", "grudge", "they always"], &["gratitude", "affection"], &["bitterness", "spite"], 0.95, 165.0),
    seed("bitterness", Shadow, &["bitter", "whatever they say", "typical", "figures"], &["happiness", "gratitude"], &["cynicism", "resentment"], 0.95, 170.0),
    seed("cynicism", Shadow, &["cynical", "yeah right", "sure, sure", "as if", "nothing matters"], &["hope", "wonder", "trust"], &["sarcasm", "skepticism"], 0.93, 180.0),
    seed("defiance", Shadow, &["defy", "won't obey", "make me", "you can't stop", "screw the rules", "no one tells me"], &["humility", "respect"], &["rebellion", "determination"], 0.87, 666.0),
    seed("rebellion", Shadow, &["rebel", "break the rules", "the system", "fight the power", "revolution", "anarchy"], &["loyalty", "respect"], &["defiance", "excitement"], 0.88, 616.0),
    seed("schadenfreude", Shadow, &["serves you right", "karma", "they failed", "laughing at them"], &["sympathy", "compassion"], &["amusement", "spite"], 0.82, 187.0),
    seed("malice", Shadow, &["destroy them", "ruin them", "make them suffer", "malice"], &["compassion", "love", "empathy"], &["rage", "spite"], 0.90, 66.0),
    seed("scorn", Shadow, &["scorn", "laughable", "ridicule", "mock"], &["admiration", "respect", "love"], &["contempt"], 0.88, 155.0),
    seed("indignation", Shadow, &["how dare", "outrageous", "unacceptable", "injustice"], &["calm", "apathy"], &["anger", "defiance"], 0.85, 210.0),
    seed("paranoia", Shadow, &["paranoid", "watching me", "they're after", "can't trust anyone", "conspiracy"], &["trust", "calm"], &["fear", "anxiety"], 0.90, 190.0),
    seed("dread", Shadow, &["dread", "doom", "something bad", "ominous", "impending"], &["hope", "relief"], &["fear", "anxiety"], 0.93, 90.0),
    seed("apathy", Shadow, &["don't care", "who cares", "pointless to", "couldn't care less"], &["enthusiasm", "curiosity", "excitement", "empathy"], &["detachment", "boredom"], 0.95, 70.0),
    seed("sarcasm", Shadow, &["oh great", "oh really", "sure thing", "sarcas", "obviously"], &["empathy"], &["amusement", "irony"], 0.85, 303.0),
    seed("grief", Shadow, &["grief", "grieving", "lost my", "passed away", "mourning", "funeral"], &["happiness", "euphoria", "elation"], &["sadness", "longing"], 0.97, 160.0),

    // -- poetic -----------------------------------------------------------
    seed("melancholy", Poetic, &["melancholy", "feeling blue", "gloomy", "rainy day", "grey"], &["euphoria", "elation"], &["wistfulness", "solitude"], 0.95, 285.0),
    seed("longing", Poetic, &["miss you", "longing", "wish you were", "so far away", "ache for"], &["belonging"], &["yearning", "nostalgia"], 0.95, 349.0),
    seed("serenity", Poetic, &["serene", "tranquil", "at peace", "stillness", "quiet moment"], &["anxiety", "rage", "frustration"], &["calm", "tranquility"], 0.93, 444.0),
    seed("euphoria", Poetic, &["euphori", "on top of the world", "best day ever", "ecstatic", "over the moon"], &["sadness", "melancholy", "grief"], &["happiness", "excitement"], 0.78, 936.0),
    seed("reverie", Poetic, &["daydream", "reverie", "lost in thought", "drifting"], &["vigilance"], &["contemplation", "wistfulness"], 0.92, 384.0),
    seed("yearning", Poetic, &["yearn", "crave", "desperately want", "need this"], &["apathy"], &["longing"], 0.93, 360.0),
    seed("elation", Poetic, &["elated", "soaring", "jubilant", "overjoyed"], &["sadness", "despair", "grief"], &["happiness", "euphoria"], 0.80, 680.0),
    seed("saudade", Poetic, &["saudade", "absent presence", "missing something", "never return"], &["anticipation"], &["nostalgia", "longing"], 0.96, 312.0),
    seed("wistfulness", Poetic, &["wistful", "what could have been", "if things were different", "sigh"], &["excitement"], &["melancholy", "nostalgia"], 0.94, 330.0),
    seed("sublime", Poetic, &["sublime", "transcend", "infinite", "cosmic", "vastness"], &["boredom", "cynicism"], &["awe", "wonder"], 0.88, 963.0),
    seed("ennui", Poetic, &["ennui", "listless", "same old", "nothing to do", "tedious"], &["enthusiasm", "excitement"], &["boredom", "apathy"], 0.95, 88.0),
    seed("rapture", Poetic, &["rapture", "enraptured", "blissful", "bliss", "heavenly"], &["despair", "dread"], &["euphoria", "awe"], 0.80, 999.0),
    seed("tranquility", Poetic, &["tranquility", "still waters", "gentle breeze", "harmony"], &["rage", "anxiety", "paranoia"], &["serenity", "calm"], 0.94, 402.0),
    seed("bittersweet", Poetic, &["bittersweet", "happy but sad", "sweet sorrow", "tears of joy"], &["certainty"], &["nostalgia", "melancholy"], 0.93, 318.0),
    seed("whimsy", Poetic, &["whimsical", "silly", "goofy", "quirky", "random thought"], &["cynicism", "boredom"], &["playfulness", "amusement"], 0.83, 711.0),
    seed("solitude", Poetic, &["solitude", "by myself", "alone time", "me time", "own company"], &["belonging"], &["introspection", "serenity"], 0.95, 272.0),

    // -- social -----------------------------------------------------------
    seed("empathy", Social, &["i understand", "that must be hard", "i feel you", "must be tough", "i hear you"], &["apathy", "detachment", "malice"], &["compassion", "sympathy"], 0.93, 537.0),
    seed("compassion", Social, &["compassion", "care about you", "here for you", "want to help", "poor thing"], &["spite", "malice", "schadenfreude"], &["empathy", "tenderness"], 0.94, 540.0),
    seed("affection", Social, &["affection", "fond of", "hug", "cuddle", "sweet of you"], &["disgust", "resentment"], &["love", "tenderness"], 0.93, 630.0),
    seed("tenderness", Social, &["gentle", "tender", "softly", "precious"], &["rage", "malice"], &["affection", "love"], 0.93, 620.0),
    seed("admiration", Social, &["admire", "impressive", "amazing work", "look up to", "brilliant"], &["contempt", "envy", "scorn"], &["respect", "inspiration"], 0.90, 590.0),
    seed("loyalty", Social, &["loyal", "have your back", "ride or die", "stand by you"], &["betrayal"], &["trust", "belonging"], 0.96, 500.0),
    seed("belonging", Social, &["belong", "part of the team", "our group", "family", "we're together"], &["loneliness", "rejection"], &["loyalty", "happiness"], 0.95, 510.0),
    seed("playfulness", Social, &["haha", "lol", "just kidding", "playful", "tease"], &["apathy"], &["amusement", "whimsy"], 0.82, 700.0),
    seed("amusement", Social, &["funny", "hilarious", "lmao", "amusing", "that's rich", "rofl"], &["boredom"], &["playfulness"], 0.82, 690.0),
    seed("enthusiasm", Social, &["enthusias", "love to", "let's do", "count me in", "sounds fun", "awesome"], &["apathy", "ennui", "boredom"], &["excitement"], 0.86, 672.0),
    seed("sympathy", Social, &["sorry to hear", "condolences", "sympathy", "that sucks"], &["schadenfreude"], &["compassion"], 0.93, 480.0),
    seed("humility", Social, &["humble", "just lucky", "not that good", "team effort", "modest"], &["pride", "defiance"], &["gratitude"], 0.95, 400.0),
    seed("respect", Social, &["respect", "honor", "well deserved", "tip my hat"], &["contempt", "scorn"], &["admiration", "trust"], 0.95, 505.0),
    seed("triumph", Social, &["we won", "i won", "victory", "triumph", "we did it", "champion", "crushed it"], &["despair", "shame", "rejection"], &["pride", "elation"], 0.82, 780.0),
    seed("betrayal", Social, &["betray", "backstab", "lied to me", "stabbed in the back", "sold me out"], &["trust", "loyalty"], &["anger", "resentment"], 0.96, 140.0),
    seed("rejection", Social, &["rejected", "ignored me", "left me out", "don't want me", "ghosted"], &["belonging", "confidence"], &["sadness", "loneliness"], 0.95, 200.0),
    seed("annoyance", Social, &["annoying", "irritat", "stop it", "bother", "seriously?"], &["calm", "amusement"], &["frustration"], 0.84, 240.0),
    seed("protectiveness", Social, &["protect", "keep you safe", "nobody hurts", "watch over", "i've got you"], &["apathy"], &["loyalty", "affection"], 0.93, 560.0),
    seed("empowerment", Social, &["empower", "unstoppable", "in control", "take charge", "strong enough"], &["despair", "doubt", "rejection"], &["confidence", "determination"], 0.88, 640.0),
];
