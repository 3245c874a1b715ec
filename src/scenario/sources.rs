use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    #[value(alias = "ndjson")]
    Lines,
    #[value(name = "websocket", alias = "ws")]
    WebSocket,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines => write!(f, "lines"),
            Self::WebSocket => write!(f, "websocket"),
        }
    }
}
