//! Letter points and themed words

/// Bonus for using every letter on the rack
pub const ALL_LETTERS_BONUS: u32 = 25;

/// Themed words that get special treatment when played
pub const MAGIC_WORDS: &[&str] = &[
    "SPELL", "MAGIC", "WAND", "HEX", "CHARM", "CURSE", "POTION", "RUNE", "ARCANE", "MYSTIC",
    "ENCHANT", "CONJURE", "RITUAL", "OMEN", "ORACLE", "AMULET", "SORCERY", "VOODOO", "WITCH",
    "WIZARD", "COVEN", "BREW", "ELIXIR", "FAIRY", "HAUNT", "GHOST", "SPIRIT", "PHANTOM", "WRAITH",
    "SPECTER", "DEMON", "SUMMON", "INVOKE", "CAST", "SCROLL", "TOME", "ORB", "CRYSTAL", "ALCHEMY",
    "CAULDRON", "JINX", "WISH", "BLESS", "SMITE", "BANISH", "SCRY", "DISPEL", "BEWITCH", "MORPH",
    "WARP", "BLINK", "WARD", "MAGE", "DRUID", "SHAMAN", "PIXIE", "SPRITE", "GNOME", "IMP",
    "DRAGON", "NYMPH", "GOLEM", "DJINN", "SIREN", "FIEND", "BANSHEE", "ELF", "GOBLIN", "TROLL",
    "OGRE", "HYDRA", "WYRM", "LICH", "GHOUL", "HARPY", "SIGIL", "TOTEM", "OCCULT", "ASTRAL",
    "MANA", "AURA", "CURSED", "BLIGHT",
];

/// Points for a single letter (case-insensitive, 0 for non-letters)
#[must_use]
pub const fn letter_points(letter: u8) -> u32 {
    match letter.to_ascii_uppercase() {
        b'E' | b'A' => 1,
        b'I' | b'O' | b'N' | b'T' => 2,
        b'R' | b'S' | b'L' => 3,
        b'D' | b'U' | b'C' => 4,
        b'M' | b'G' | b'H' => 5,
        b'P' | b'B' | b'W' | b'F' | b'Y' => 6,
        b'K' | b'V' => 7,
        b'J' | b'X' => 8,
        b'Q' | b'Z' => 10,
        _ => 0,
    }
}

/// Sum of letter points in a word
#[must_use]
pub fn word_points(word: &str) -> u32 {
    word.bytes().map(letter_points).sum()
}

/// Whether a word is one of the themed words
#[must_use]
pub fn is_magic_word(word: &str) -> bool {
    MAGIC_WORDS.iter().any(|magic| magic.eq_ignore_ascii_case(word))
}
