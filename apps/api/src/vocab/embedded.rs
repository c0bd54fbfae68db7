//! Embedded fallback wordlists, versioned with the code.
//!
//! These are the availability guarantee when the remote source is
//! unreachable: a validated, uniformly-shaped fixture per level with correct
//! tone-mark spellings. Both lists must stay non-empty — the source adapter
//! relies on that to uphold its never-fails contract.

use super::{Level, VocabularyEntry};

/// (character, pinyin, gloss, stroke count)
type Row = (&'static str, &'static str, &'static str, u16);

const HSK2: &[Row] = &[
    ("爱", "ài", "to love", 10),
    ("八", "bā", "eight", 2),
    ("白", "bái", "white", 5),
    ("百", "bǎi", "hundred", 6),
    ("帮", "bāng", "to help", 9),
    ("北", "běi", "north", 5),
    ("本", "běn", "root; volume", 5),
    ("比", "bǐ", "to compare; than", 4),
    ("别", "bié", "other; don't", 7),
    ("长", "cháng", "long", 4),
    ("唱", "chàng", "to sing", 11),
    ("吃", "chī", "to eat", 6),
    ("出", "chū", "to go out", 5),
    ("穿", "chuān", "to wear", 9),
    ("床", "chuáng", "bed", 7),
    ("次", "cì", "time; occurrence", 6),
    ("从", "cóng", "from", 4),
    ("错", "cuò", "wrong; mistake", 13),
    ("打", "dǎ", "to hit; to play", 5),
    ("大", "dà", "big", 3),
    ("到", "dào", "to arrive", 8),
    ("得", "dé", "to obtain", 11),
    ("等", "děng", "to wait", 12),
    ("弟", "dì", "younger brother", 7),
    ("点", "diǎn", "dot; o'clock", 9),
    ("东", "dōng", "east", 5),
    ("懂", "dǒng", "to understand", 15),
    ("动", "dòng", "to move", 6),
    ("都", "dōu", "all; both", 10),
    ("对", "duì", "correct; towards", 5),
    ("多", "duō", "many; much", 6),
    ("饿", "è", "hungry", 10),
    ("儿", "ér", "child; son", 2),
    ("房", "fáng", "house; room", 8),
    ("飞", "fēi", "to fly", 3),
    ("非", "fēi", "not; wrong", 8),
    ("分", "fēn", "to divide; minute", 4),
    ("高", "gāo", "tall; high", 10),
    ("告", "gào", "to tell", 7),
    ("哥", "gē", "older brother", 10),
];

const HSK3: &[Row] = &[
    ("安", "ān", "peaceful; safe", 6),
    ("班", "bān", "class; shift", 10),
    ("搬", "bān", "to move (house)", 13),
    ("半", "bàn", "half", 5),
    ("办", "bàn", "to handle", 4),
    ("包", "bāo", "bag; to wrap", 5),
    ("饱", "bǎo", "full (after eating)", 8),
    ("被", "bèi", "by (passive); quilt", 10),
    ("鼻", "bí", "nose", 14),
    ("变", "biàn", "to change", 8),
    ("表", "biǎo", "surface; watch", 8),
    ("宾", "bīn", "guest", 10),
    ("冰", "bīng", "ice", 6),
    ("菜", "cài", "vegetable; dish", 11),
    ("层", "céng", "floor; layer", 7),
    ("差", "chà", "to differ; poor", 9),
    ("城", "chéng", "city; wall", 9),
    ("迟", "chí", "late", 7),
    ("除", "chú", "except; to remove", 9),
    ("船", "chuán", "boat; ship", 11),
    ("春", "chūn", "spring", 9),
    ("词", "cí", "word; term", 7),
    ("聪", "cōng", "clever", 15),
    ("单", "dān", "single; list", 8),
    ("蛋", "dàn", "egg", 11),
    ("灯", "dēng", "lamp; light", 6),
    ("地", "dì", "earth; ground", 6),
    ("冬", "dōng", "winter", 5),
    ("短", "duǎn", "short", 12),
    ("段", "duàn", "section; paragraph", 9),
    ("耳", "ěr", "ear", 6),
    ("发", "fā", "to send; to emit", 5),
    ("放", "fàng", "to put; to release", 8),
    ("风", "fēng", "wind", 4),
    ("复", "fù", "to repeat", 9),
    ("干", "gàn", "to do; dry", 3),
    ("刚", "gāng", "just now", 6),
    ("根", "gēn", "root; basis", 10),
    ("更", "gèng", "more; even more", 7),
    ("关", "guān", "to close; pass", 6),
];

/// Returns the embedded dataset for a level as owned entries.
pub fn entries(level: Level) -> Vec<VocabularyEntry> {
    let rows = match level {
        Level::Hsk2 => HSK2,
        Level::Hsk3 => HSK3,
    };
    rows.iter()
        .map(|&(character, pinyin, gloss, stroke_count)| VocabularyEntry {
            character: character.to_string(),
            pinyin: pinyin.to_string(),
            gloss: gloss.to_string(),
            stroke_count,
        })
        .collect()
}
