// src/cli/value_enum.rs
use clap::ValueEnum;
use pascal_domain::{Strategy, options::OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliStrategy {
    /// n! / (k! (n-k)!) for every entry
    Factorial,
    /// Pairwise sums of the previous row
    Additive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    Jsonl,
    Yaml,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CliStrategy, Strategy, Factorial, Additive);
map_enum!(CliOutputFormat, OutputFormat, Text, Json, Jsonl, Yaml);
