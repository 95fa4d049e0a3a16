pub const HELP: &str = "\
Type text and press Enter to analyze it.
  :sample N        load sample text N (0-2) into the input
  :analyze         analyze the current input
  :history         reload the history panel
  :stats           show totals across recent analyses
  :batch a | b     analyze several texts at once
  :help            show this message
  :quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze(String),
    AnalyzeInput,
    Sample(usize),
    History,
    Stats,
    Batch(Vec<String>),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Self::Analyze(line.to_string());
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name {
            "sample" => match args.parse::<usize>() {
                Ok(index) => Self::Sample(index),
                Err(_) => Self::Unknown(trimmed.to_string()),
            },
            "analyze" => Self::AnalyzeInput,
            "history" => Self::History,
            "stats" => Self::Stats,
            "batch" => Self::Batch(args.split('|').map(|text| text.trim().to_string()).collect()),
            "help" | "h" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}
