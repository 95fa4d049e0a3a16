pub const SAMPLE_TEXTS: [&str; 3] = [
    "I absolutely love this! It's the best thing ever. I'm so happy and excited!",
    "This is terrible. I hate it. Worst experience of my life. Very disappointing.",
    "The product is okay. It works as expected. Nothing special about it.",
];

pub fn sample(index: usize) -> Option<&'static str> {
    SAMPLE_TEXTS.get(index).copied()
}
