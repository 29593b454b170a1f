use super::commands::{GoParams, UciCommand};

pub struct Encoder {}

impl Encoder {
    pub fn encode(&self, command: &UciCommand) -> String {
        match command {
            UciCommand::Uci => "uci".to_string(),
            UciCommand::IsReady => "isready".to_string(),

            UciCommand::UciNewGame => "ucinewgame".to_string(),
            UciCommand::Position { fen } => format!("position fen {}", fen),
            UciCommand::Go(params) => encode_go(params),

            UciCommand::Stop => "stop".to_string(),
            UciCommand::Quit => "quit".to_string(),
        }
    }
}

fn encode_go(params: &GoParams) -> String {
    let mut out = String::from("go");

    if let Some(depth) = params.depth {
        out.push_str(&format!(" depth {}", depth));
    }

    out
}
