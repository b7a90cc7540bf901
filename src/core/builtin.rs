// src/core/builtin.rs
//! Static board content: symbol tables, quick phrases, keyboard layouts,
//! category labels.

use crate::core::types::{Category, Language};

/// (glyph, english, hindi, word type)
pub(crate) type TaggedRow = (&'static str, &'static str, &'static str, &'static str);
/// (glyph, english, hindi)
pub(crate) type PlainRow = (&'static str, &'static str, &'static str);

pub(crate) enum Rows {
    Tagged(&'static [TaggedRow]),
    Plain(&'static [PlainRow]),
}

pub(crate) struct Table {
    pub category: Category,
    /// Every row of the table carries the core flag.
    pub core: bool,
    pub rows: Rows,
}

pub(crate) const TABLES: &[Table] = &[
    Table { category: Category::Core, core: true, rows: Rows::Tagged(CORE) },
    Table { category: Category::Pronouns, core: false, rows: Rows::Tagged(PRONOUNS) },
    Table { category: Category::Adjectives, core: false, rows: Rows::Tagged(ADJECTIVES) },
    Table { category: Category::Feelings, core: false, rows: Rows::Plain(FEELINGS) },
    Table { category: Category::Food, core: false, rows: Rows::Plain(FOOD) },
    Table { category: Category::People, core: false, rows: Rows::Plain(PEOPLE) },
    Table { category: Category::Actions, core: false, rows: Rows::Plain(ACTIONS) },
    Table { category: Category::Places, core: false, rows: Rows::Plain(PLACES) },
    Table { category: Category::Body, core: false, rows: Rows::Plain(BODY) },
    Table { category: Category::Needs, core: false, rows: Rows::Plain(NEEDS) },
    Table { category: Category::Animals, core: false, rows: Rows::Plain(ANIMALS) },
    Table { category: Category::Colors, core: false, rows: Rows::Plain(COLORS) },
    Table { category: Category::Numbers, core: false, rows: Rows::Plain(NUMBERS) },
    Table { category: Category::School, core: false, rows: Rows::Plain(SCHOOL) },
    Table { category: Category::Toys, core: false, rows: Rows::Plain(TOYS) },
];

pub(crate) fn category_label(category: Category, language: Language) -> &'static str {
    match (category, language) {
        (Category::Core, Language::English) => "⭐ Core Words",
        (Category::Core, Language::Hindi) => "⭐ मुख्य शब्द",
        (Category::Pronouns, Language::English) => "👥 Pronouns",
        (Category::Pronouns, Language::Hindi) => "👥 सर्वनाम",
        (Category::Adjectives, Language::English) => "📝 Adjectives",
        (Category::Adjectives, Language::Hindi) => "📝 विशेषण",
        (Category::Feelings, Language::English) => "Feelings",
        (Category::Feelings, Language::Hindi) => "भावनाएं",
        (Category::Food, Language::English) => "Food & Drink",
        (Category::Food, Language::Hindi) => "खाना-पीना",
        (Category::People, Language::English) => "People",
        (Category::People, Language::Hindi) => "लोग",
        (Category::Actions, Language::English) => "Actions",
        (Category::Actions, Language::Hindi) => "क्रियाएं",
        (Category::Places, Language::English) => "Places",
        (Category::Places, Language::Hindi) => "स्थान",
        (Category::Body, Language::English) => "Body Parts",
        (Category::Body, Language::Hindi) => "शरीर के अंग",
        (Category::Needs, Language::English) => "Needs",
        (Category::Needs, Language::Hindi) => "आवश्यकताएं",
        (Category::Animals, Language::English) => "Animals",
        (Category::Animals, Language::Hindi) => "जानवर",
        (Category::Colors, Language::English) => "Colors",
        (Category::Colors, Language::Hindi) => "रंग",
        (Category::Numbers, Language::English) => "Numbers",
        (Category::Numbers, Language::Hindi) => "संख्या",
        (Category::School, Language::English) => "School",
        (Category::School, Language::Hindi) => "स्कूल",
        (Category::Toys, Language::English) => "Toys & Games",
        (Category::Toys, Language::Hindi) => "खिलौने",
        (Category::Keyboard, Language::English) => "⌨️ Type",
        (Category::Keyboard, Language::Hindi) => "⌨️ टाइप करें",
    }
}

pub(crate) const QUICK_PHRASES_EN: &[&str] = &[
    "I want", "I need", "I like", "I don't like",
    "I feel", "Help me", "Thank you", "Please",
    "I am hungry", "I am thirsty", "I am tired",
    "Can I have", "Where is", "I want to go",
];

pub(crate) const QUICK_PHRASES_HI: &[&str] = &[
    "मुझे चाहिए", "मुझे ज़रूरत है", "मुझे पसंद है", "मुझे पसंद नहीं",
    "मैं महसूस करता हूं", "मेरी मदद करो", "धन्यवाद", "कृपया",
    "मुझे भूख लगी है", "मुझे प्यास लगी है", "मैं थक गया हूं",
    "क्या मुझे मिल सकता है", "कहाँ है", "मैं जाना चाहता हूं",
];

pub(crate) const ENGLISH_KEYBOARD: &[&[&str]] = &[
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["SHIFT", "Z", "X", "C", "V", "B", "N", "M", "⌫"],
    &["SPACE", "ENTER"],
];

pub(crate) const HINDI_KEYBOARD: &[&[&str]] = &[
    &["अ", "आ", "इ", "ई", "उ", "ऊ", "ए", "ऐ", "ओ", "औ"],
    &["क", "ख", "ग", "घ", "च", "छ", "ज", "झ", "ट", "ठ"],
    &["ड", "ढ", "ण", "त", "थ", "द", "ध", "न", "प", "फ"],
    &["ब", "भ", "म", "य", "र", "ल", "व", "श", "ष", "स"],
    &["ह", "क्ष", "त्र", "ज्ञ", "ं", "ः", "ा", "ि", "ी", "ु"],
    &["ू", "े", "ै", "ो", "ौ", "्", "⌫"],
    &["SPACE", "ENTER"],
];

pub(crate) const VOICE_TEST_EN: &str = "Hello, this is a test of the voice settings";
pub(crate) const VOICE_TEST_HI: &str = "नमस्ते, यह आवाज़ सेटिंग का परीक्षण है";

const CORE: &[TaggedRow] = &[
    ("👤", "I", "मैं", "core"),
    ("👥", "You", "तुम", "core"),
    ("🧑", "He/She", "वह", "core"),
    ("👨‍👩‍👧", "We", "हम", "core"),
    ("👥", "They", "वे", "core"),
    ("🙋", "Me", "मुझे", "core"),
    ("👉", "My", "मेरा", "core"),
    ("👈", "Your", "तुम्हारा", "core"),
    ("❤️", "Want", "चाहना", "verb"),
    ("🆘", "Need", "ज़रूरत", "verb"),
    ("👍", "Like", "पसंद", "verb"),
    ("❌", "Don't", "नहीं", "core"),
    ("✅", "Do", "करना", "verb"),
    ("▶️", "Go", "जाओ", "verb"),
    ("🛑", "Stop", "रुको", "verb"),
    ("👀", "See", "देखो", "verb"),
    ("👂", "Hear", "सुनो", "verb"),
    ("🗣️", "Say", "कहो", "verb"),
    ("🎁", "Give", "दो", "verb"),
    ("🤲", "Take", "लो", "verb"),
    ("🔍", "Find", "खोजो", "verb"),
    ("💭", "Think", "सोचो", "verb"),
    ("📖", "Know", "जानना", "verb"),
    ("🤝", "Help", "मदद", "verb"),
    ("🏃", "Come", "आओ", "verb"),
    ("🔨", "Make", "बनाओ", "verb"),
    ("👉", "Put", "रखो", "verb"),
    ("🤲", "Get", "पाओ", "verb"),
    ("💬", "Tell", "बताओ", "verb"),
    ("🙏", "Ask", "पूछो", "verb"),
    ("🔴", "More", "और", "descriptor"),
    ("🔵", "Less", "कम", "descriptor"),
    ("💯", "All", "सब", "descriptor"),
    ("🔘", "Some", "कुछ", "descriptor"),
    ("🔴", "Big", "बड़ा", "descriptor"),
    ("🔵", "Small", "छोटा", "descriptor"),
    ("✅", "Good", "अच्छा", "descriptor"),
    ("❌", "Bad", "बुरा", "descriptor"),
    ("🆕", "New", "नया", "descriptor"),
    ("🕰️", "Old", "पुराना", "descriptor"),
    ("🏃", "Fast", "तेज़", "descriptor"),
    ("🐌", "Slow", "धीमा", "descriptor"),
    ("🔥", "Hot", "गर्म", "descriptor"),
    ("❄️", "Cold", "ठंडा", "descriptor"),
    ("❓", "What", "क्या", "question"),
    ("❔", "Who", "कौन", "question"),
    ("⁉️", "Where", "कहाँ", "question"),
    ("🕐", "When", "कब", "question"),
    ("🤔", "Why", "क्यों", "question"),
    ("🧐", "How", "कैसे", "question"),
    ("⚖️", "Which", "कौन सा", "question"),
    ("✅", "Yes", "हाँ", "social"),
    ("❌", "No", "नहीं", "social"),
    ("👍", "Okay", "ठीक है", "social"),
    ("🙏", "Please", "कृपया", "social"),
    ("🙏", "Thank You", "धन्यवाद", "social"),
    ("⏰", "Now", "अभी", "core"),
    ("⏱️", "Later", "बाद में", "core"),
    ("📅", "Today", "आज", "core"),
    ("📆", "Tomorrow", "कल", "core"),
    ("📍", "Here", "यहाँ", "core"),
    ("📌", "There", "वहाँ", "core"),
    ("🏠", "Home", "घर", "noun"),
    ("🏫", "School", "स्कूल", "noun"),
    ("⬆️", "Up", "ऊपर", "preposition"),
    ("⬇️", "Down", "नीचे", "preposition"),
    ("🏠", "In", "अंदर", "preposition"),
    ("🚪", "Out", "बाहर", "preposition"),
    ("🔛", "On", "पर", "preposition"),
    ("🔽", "Off", "से", "preposition"),
    ("➡️", "To", "को", "preposition"),
    ("👉", "For", "के लिए", "preposition"),
    ("↔️", "With", "के साथ", "preposition"),
    ("😊", "Happy", "खुश", "feeling"),
    ("😢", "Sad", "उदास", "feeling"),
    ("😠", "Angry", "गुस्सा", "feeling"),
    ("😰", "Scared", "डरा", "feeling"),
];

const PRONOUNS: &[TaggedRow] = &[
    ("👤", "I", "मैं", "core"),
    ("🙋", "Me", "मुझे", "core"),
    ("👉", "My", "मेरा", "core"),
    ("🙋‍♂️", "Mine", "मेरा", "core"),
    ("👥", "You", "तुम", "core"),
    ("👈", "Your", "तुम्हारा", "core"),
    ("🫵", "Yours", "तुम्हारा", "core"),
    ("🧑", "He", "वह (पुरुष)", "core"),
    ("👩", "She", "वह (महिला)", "core"),
    ("🧑", "His", "उसका", "core"),
    ("👩", "Her", "उसकी", "core"),
    ("👤", "It", "यह", "core"),
    ("👨‍👩‍👧", "We", "हम", "core"),
    ("👨‍👩‍👧‍👦", "Us", "हमें", "core"),
    ("👪", "Our", "हमारा", "core"),
    ("👥", "They", "वे", "core"),
    ("👥", "Them", "उन्हें", "core"),
    ("👥", "Their", "उनका", "core"),
    ("👤", "This", "यह", "core"),
    ("👉", "That", "वह", "core"),
    ("👥", "These", "ये", "core"),
    ("👉", "Those", "वे", "core"),
];

const ADJECTIVES: &[TaggedRow] = &[
    ("🔴", "Big", "बड़ा", "descriptor"),
    ("🔵", "Small", "छोटा", "descriptor"),
    ("📏", "Long", "लंबा", "descriptor"),
    ("📐", "Short", "छोटा", "descriptor"),
    ("⬆️", "Tall", "ऊंचा", "descriptor"),
    ("⬇️", "Low", "नीचा", "descriptor"),
    ("➡️", "Wide", "चौड़ा", "descriptor"),
    ("↔️", "Narrow", "संकरा", "descriptor"),
    ("🏋️", "Heavy", "भारी", "descriptor"),
    ("🪶", "Light", "हल्का", "descriptor"),
    ("✅", "Good", "अच्छा", "descriptor"),
    ("❌", "Bad", "बुरा", "descriptor"),
    ("😊", "Nice", "अच्छा", "descriptor"),
    ("👍", "Beautiful", "सुंदर", "descriptor"),
    ("👎", "Ugly", "बदसूरत", "descriptor"),
    ("🧼", "Clean", "साफ", "descriptor"),
    ("🗑️", "Dirty", "गंदा", "descriptor"),
    ("🆕", "New", "नया", "descriptor"),
    ("🕰️", "Old", "पुराना", "descriptor"),
    ("🏃", "Fast", "तेज़", "descriptor"),
    ("🐌", "Slow", "धीमा", "descriptor"),
    ("⏱️", "Quick", "जल्दी", "descriptor"),
    ("🐢", "Late", "देर", "descriptor"),
    ("⏰", "Early", "जल्दी", "descriptor"),
    ("🔥", "Hot", "गर्म", "descriptor"),
    ("❄️", "Cold", "ठंडा", "descriptor"),
    ("🌡️", "Warm", "गुनगुना", "descriptor"),
    ("🧊", "Cool", "ठंडक", "descriptor"),
    ("😋", "Sweet", "मीठा", "descriptor"),
    ("😖", "Sour", "खट्टा", "descriptor"),
    ("🧂", "Salty", "नमकीन", "descriptor"),
    ("🌶️", "Spicy", "मसालेदार", "descriptor"),
    ("😝", "Bitter", "कड़वा", "descriptor"),
    ("😋", "Tasty", "स्वादिष्ट", "descriptor"),
    ("🔊", "Loud", "तेज़", "descriptor"),
    ("🔇", "Quiet", "शांत", "descriptor"),
    ("🎵", "Noisy", "शोर", "descriptor"),
    ("📊", "Many", "बहुत", "descriptor"),
    ("📉", "Few", "कम", "descriptor"),
    ("💯", "All", "सब", "descriptor"),
    ("🔘", "Some", "कुछ", "descriptor"),
    ("➕", "More", "और", "descriptor"),
    ("➖", "Less", "कम", "descriptor"),
    ("🈳", "Empty", "खाली", "descriptor"),
    ("🈵", "Full", "भरा", "descriptor"),
    ("😊", "Happy", "खुश", "feeling"),
    ("😢", "Sad", "उदास", "feeling"),
    ("😠", "Angry", "गुस्सा", "feeling"),
    ("😰", "Scared", "डरा", "feeling"),
    ("😴", "Tired", "थका", "feeling"),
    ("🤒", "Sick", "बीमार", "feeling"),
    ("💪", "Strong", "मज़बूत", "descriptor"),
    ("🤕", "Weak", "कमज़ोर", "descriptor"),
    ("😌", "Calm", "शांत", "feeling"),
    ("😰", "Nervous", "घबराया", "feeling"),
];

const FEELINGS: &[PlainRow] = &[
    ("😊", "Happy", "खुश"),
    ("😢", "Sad", "उदास"),
    ("😠", "Angry", "गुस्सा"),
    ("😰", "Scared", "डरा हुआ"),
    ("😴", "Tired", "थका हुआ"),
    ("🤒", "Sick", "बीमार"),
    ("😃", "Excited", "उत्साहित"),
    ("😌", "Calm", "शांत"),
    ("😭", "Crying", "रो रहा"),
    ("❤️", "Love", "प्यार"),
    ("😱", "Surprised", "हैरान"),
    ("😄", "Laugh", "हंसना"),
    ("😥", "Worried", "चिंतित"),
    ("🥰", "Lovely", "प्यारा"),
    ("😡", "Mad", "पागल"),
    ("🤗", "Hug", "गले लगाना"),
    ("😎", "Cool", "कूल"),
    ("🥳", "Celebrate", "जश्न"),
    ("😫", "Frustrated", "निराश"),
    ("😌", "Relaxed", "आराम से"),
];

const FOOD: &[PlainRow] = &[
    ("💧", "Water", "पानी"),
    ("🍞", "Bread", "रोटी"),
    ("🍚", "Rice", "चावल"),
    ("🥛", "Milk", "दूध"),
    ("🍎", "Apple", "सेब"),
    ("🍌", "Banana", "केला"),
    ("🍪", "Biscuit", "बिस्कुट"),
    ("🍵", "Tea", "चाय"),
    ("🍽️", "Food", "खाना"),
    ("🍬", "Candy", "मिठाई"),
    ("🍊", "Orange", "संतरा"),
    ("🍇", "Grapes", "अंगूर"),
    ("🥕", "Carrot", "गाजर"),
    ("🥔", "Potato", "आलू"),
    ("🍅", "Tomato", "टमाटर"),
    ("🥒", "Cucumber", "खीरा"),
    ("🌽", "Corn", "मकई"),
    ("🥗", "Salad", "सलाद"),
    ("🍲", "Curry", "करी"),
    ("🍕", "Pizza", "पिज्जा"),
    ("🍔", "Burger", "बर्गर"),
    ("🍟", "Fries", "फ्राइज"),
    ("🍿", "Popcorn", "पॉपकॉर्न"),
    ("🍰", "Cake", "केक"),
    ("🍦", "Ice Cream", "आइसक्रीम"),
    ("🍫", "Chocolate", "चॉकलेट"),
    ("☕", "Coffee", "कॉफी"),
    ("🧃", "Juice", "जूस"),
    ("🥤", "Soft Drink", "सॉफ्ट ड्रिंक"),
    ("🍳", "Egg", "अंडा"),
];

const PEOPLE: &[PlainRow] = &[
    ("👨", "Father", "पिताजी"),
    ("👩", "Mother", "माताजी"),
    ("👦", "Brother", "भाई"),
    ("👧", "Sister", "बहन"),
    ("👴", "Grandfather", "दादाजी"),
    ("👵", "Grandmother", "दादीजी"),
    ("👨‍🏫", "Teacher", "शिक्षक"),
    ("👨‍⚕️", "Doctor", "डॉक्टर"),
    ("👶", "Baby", "बच्चा"),
    ("👫", "Friend", "दोस्त"),
    ("👨‍👩‍👧", "Family", "परिवार"),
    ("🧑", "Person", "व्यक्ति"),
    ("👧", "Girl", "लड़की"),
    ("👦", "Boy", "लड़का"),
    ("👪", "Parents", "माता-पिता"),
    ("👨‍💼", "Worker", "कार्यकर्ता"),
    ("👮", "Police", "पुलिस"),
    ("🧑‍🍳", "Chef", "रसोइया"),
    ("🧑‍🌾", "Farmer", "किसान"),
    ("👨‍✈️", "Pilot", "पायलट"),
];

const ACTIONS: &[PlainRow] = &[
    ("🍽️", "Eat", "खाओ"),
    ("🚰", "Drink", "पीओ"),
    ("😴", "Sleep", "सोओ"),
    ("🏃", "Run", "दौड़ो"),
    ("🚶", "Walk", "चलो"),
    ("🪑", "Sit", "बैठो"),
    ("🧍", "Stand", "खड़े हो"),
    ("🎮", "Play", "खेलो"),
    ("📖", "Read", "पढ़ो"),
    ("✍️", "Write", "लिखो"),
    ("🎨", "Draw", "बनाओ"),
    ("🎵", "Sing", "गाओ"),
    ("💃", "Dance", "नाचो"),
    ("🤸", "Jump", "कूदो"),
    ("🧗", "Climb", "चढ़ो"),
    ("🏊", "Swim", "तैरो"),
    ("🛁", "Bathe", "नहाओ"),
    ("🪥", "Brush", "ब्रश करो"),
    ("👀", "Look", "देखो"),
    ("👂", "Listen", "सुनो"),
    ("🗣️", "Talk", "बोलो"),
    ("🤫", "Quiet", "चुप"),
    ("😴", "Rest", "आराम"),
    ("🧹", "Clean", "साफ करो"),
    ("🧺", "Wash", "धोओ"),
    ("🔨", "Work", "काम करो"),
    ("🎓", "Study", "पढ़ाई"),
    ("💭", "Think", "सोचो"),
    ("🤝", "Help", "मदद करो"),
    ("🎁", "Give", "दो"),
];

const PLACES: &[PlainRow] = &[
    ("🏠", "Home", "घर"),
    ("🏫", "School", "स्कूल"),
    ("🏥", "Hospital", "अस्पताल"),
    ("🏪", "Shop", "दुकान"),
    ("🌳", "Park", "पार्क"),
    ("🚗", "Car", "गाड़ी"),
    ("🚌", "Bus", "बस"),
    ("🛏️", "Bedroom", "कमरा"),
    ("🚽", "Bathroom", "बाथरूम"),
    ("🍳", "Kitchen", "रसोई"),
    ("🏛️", "Temple", "मंदिर"),
    ("🕌", "Mosque", "मस्जिद"),
    ("⛪", "Church", "गिरजा"),
    ("🏖️", "Beach", "समुद्र तट"),
    ("🏔️", "Mountain", "पहाड़"),
    ("🌊", "River", "नदी"),
    ("🏟️", "Stadium", "स्टेडियम"),
    ("🎪", "Circus", "सर्कस"),
    ("🎢", "Amusement Park", "मनोरंजन पार्क"),
    ("🏨", "Hotel", "होटल"),
    ("🏦", "Bank", "बैंक"),
    ("📮", "Post Office", "डाकघर"),
    ("🚉", "Station", "स्टेशन"),
    ("✈️", "Airport", "हवाई अड्डा"),
    ("🚂", "Train", "ट्रेन"),
];

const BODY: &[PlainRow] = &[
    ("🧠", "Head", "सिर"),
    ("👁️", "Eyes", "आँखें"),
    ("👃", "Nose", "नाक"),
    ("👄", "Mouth", "मुँह"),
    ("👂", "Ears", "कान"),
    ("🦷", "Teeth", "दांत"),
    ("👅", "Tongue", "जीभ"),
    ("💪", "Arm", "बाजू"),
    ("✋", "Hand", "हाथ"),
    ("👆", "Finger", "उंगली"),
    ("🦵", "Leg", "पैर"),
    ("🦶", "Foot", "पाँव"),
    ("🫀", "Heart", "दिल"),
    ("🫁", "Lungs", "फेफड़े"),
    ("🦴", "Bone", "हड्डी"),
    ("🩸", "Blood", "खून"),
    ("💪", "Muscle", "मांसपेशी"),
    ("🧑", "Body", "शरीर"),
    ("👃", "Face", "चेहरा"),
    ("🦴", "Back", "पीठ"),
];

const NEEDS: &[PlainRow] = &[
    ("🚽", "Toilet", "शौचालय"),
    ("🛁", "Bath", "नहाना"),
    ("🤕", "Pain", "दर्द"),
    ("🥵", "Hot", "गर्म"),
    ("🥶", "Cold", "ठंडा"),
    ("😫", "Hungry", "भूख"),
    ("🥱", "Thirsty", "प्यास"),
    ("🌙", "Night", "रात"),
    ("☀️", "Day", "दिन"),
    ("🕐", "Time", "समय"),
    ("💊", "Medicine", "दवा"),
    ("🩹", "Bandage", "पट्टी"),
    ("😷", "Mask", "मास्क"),
    ("🌡️", "Fever", "बुखार"),
    ("🤧", "Sneeze", "छींक"),
    ("🤮", "Vomit", "उल्टी"),
    ("💤", "Sleepy", "नींद"),
    ("🥴", "Dizzy", "चक्कर"),
];

const ANIMALS: &[PlainRow] = &[
    ("🐕", "Dog", "कुत्ता"),
    ("🐈", "Cat", "बिल्ली"),
    ("🐄", "Cow", "गाय"),
    ("🐘", "Elephant", "हाथी"),
    ("🐅", "Tiger", "बाघ"),
    ("🦁", "Lion", "शेर"),
    ("🐒", "Monkey", "बंदर"),
    ("🐎", "Horse", "घोड़ा"),
    ("🐑", "Sheep", "भेड़"),
    ("🐐", "Goat", "बकरी"),
    ("🐖", "Pig", "सूअर"),
    ("🐔", "Chicken", "मुर्गी"),
    ("🐦", "Bird", "चिड़िया"),
    ("🦜", "Parrot", "तोता"),
    ("🦚", "Peacock", "मोर"),
    ("🐸", "Frog", "मेंढक"),
    ("🐍", "Snake", "सांप"),
    ("🐢", "Turtle", "कछुआ"),
    ("🦋", "Butterfly", "तितली"),
    ("🐝", "Bee", "मधुमक्खी"),
    ("🐜", "Ant", "चींटी"),
    ("🕷️", "Spider", "मकड़ी"),
    ("🐠", "Fish", "मछली"),
    ("🦈", "Shark", "शार्क"),
    ("🐙", "Octopus", "ऑक्टोपस"),
];

const COLORS: &[PlainRow] = &[
    ("🔴", "Red", "लाल"),
    ("🔵", "Blue", "नीला"),
    ("🟢", "Green", "हरा"),
    ("🟡", "Yellow", "पीला"),
    ("🟠", "Orange", "नारंगी"),
    ("🟣", "Purple", "बैंगनी"),
    ("🟤", "Brown", "भूरा"),
    ("⚫", "Black", "काला"),
    ("⚪", "White", "सफेद"),
    ("🩷", "Pink", "गुलाबी"),
    ("🩶", "Grey", "ग्रे"),
    ("🌈", "Rainbow", "इंद्रधनुष"),
];

const NUMBERS: &[PlainRow] = &[
    ("0️⃣", "Zero", "शून्य"),
    ("1️⃣", "One", "एक"),
    ("2️⃣", "Two", "दो"),
    ("3️⃣", "Three", "तीन"),
    ("4️⃣", "Four", "चार"),
    ("5️⃣", "Five", "पांच"),
    ("6️⃣", "Six", "छह"),
    ("7️⃣", "Seven", "सात"),
    ("8️⃣", "Eight", "आठ"),
    ("9️⃣", "Nine", "नौ"),
    ("🔟", "Ten", "दस"),
    ("💯", "Hundred", "सौ"),
    ("🔢", "Numbers", "संख्या"),
];

const SCHOOL: &[PlainRow] = &[
    ("📚", "Book", "किताब"),
    ("✏️", "Pencil", "पेंसिल"),
    ("🖊️", "Pen", "पेन"),
    ("📝", "Paper", "कागज"),
    ("📏", "Ruler", "स्केल"),
    ("✂️", "Scissors", "कैंची"),
    ("🖍️", "Crayon", "क्रेयॉन"),
    ("🎨", "Paint", "पेंट"),
    ("📐", "Geometry", "ज्यामिति"),
    ("🔬", "Science", "विज्ञान"),
    ("🧮", "Math", "गणित"),
    ("🌍", "Geography", "भूगोल"),
    ("📖", "Reading", "पढ़ना"),
    ("✍️", "Writing", "लिखना"),
    ("🎒", "Bag", "बैग"),
    ("🖥️", "Computer", "कंप्यूटर"),
    ("🖨️", "Printer", "प्रिंटर"),
    ("📱", "Phone", "फोन"),
    ("⌨️", "Keyboard", "कीबोर्ड"),
    ("🖱️", "Mouse", "माउस"),
];

const TOYS: &[PlainRow] = &[
    ("⚽", "Ball", "गेंद"),
    ("🏀", "Basketball", "बास्केटबॉल"),
    ("🏏", "Cricket", "क्रिकेट"),
    ("🎮", "Video Game", "वीडियो गेम"),
    ("🧸", "Teddy Bear", "टेडी बियर"),
    ("🪀", "Yo-Yo", "यो-यो"),
    ("🪁", "Kite", "पतंग"),
    ("🎯", "Dart", "डार्ट"),
    ("🎲", "Dice", "पासा"),
    ("🧩", "Puzzle", "पहेली"),
    ("🎪", "Circus", "सर्कस"),
    ("🎭", "Drama", "नाटक"),
    ("🎨", "Art", "कला"),
    ("🎵", "Music", "संगीत"),
    ("🎸", "Guitar", "गिटार"),
];
